//! Reveal-on-scroll
//!
//! An element is tagged with [`TRIGGER_CLASS`] when it is attached and gains
//! [`REVEALED_CLASS`] the first time at least a tenth of it scrolls into
//! view. After that the element stops being observed; the reveal never
//! reverses.
//!
//! [`Reveal`] is the platform-free state machine. The `wasm` feature drives
//! it from a browser `IntersectionObserver`.

/// Fraction of the element that must be visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Slack under the threshold still counted as crossing it. Browsers report
/// the crossing entry with a rounded ratio, e.g. `0.0999` for `0.1`.
pub const REVEAL_RATIO_TOLERANCE: f64 = 1e-3;

/// Shrinks the viewport's bottom edge so elements reveal slightly late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

/// Added on attach; styles the hidden pre-reveal state.
pub const TRIGGER_CLASS: &str = "reveal";

/// Added once the element has been seen.
pub const REVEALED_CLASS: &str = "revealed";

/// Something that carries CSS classes.
pub trait ClassList {
    fn add_class(&mut self, class: &str);
}

/// Observer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

/// One visibility report for the observed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    /// Whether this entry counts as the element being seen at `threshold`.
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + REVEAL_RATIO_TOLERANCE >= threshold
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Attached, waiting to be seen
    Pending,
    /// Seen; terminal
    Revealed,
    /// Torn down before or after revealing
    Destroyed,
}

/// What the driver should do with its observer after a batch of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Unobserve,
}

/// One-shot reveal state machine for a single element.
#[derive(Debug, Clone)]
pub struct Reveal {
    options: RevealOptions,
    state: RevealState,
}

impl Reveal {
    /// Attach to `target` with the default options.
    pub fn attach<C: ClassList + ?Sized>(target: &mut C) -> Self {
        Self::attach_with(target, RevealOptions::default())
    }

    pub fn attach_with<C: ClassList + ?Sized>(target: &mut C, options: RevealOptions) -> Self {
        target.add_class(TRIGGER_CLASS);
        Self {
            options,
            state: RevealState::Pending,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// Feed a batch of observer entries.
    ///
    /// Returns [`Observation::Unobserve`] exactly once, for the batch that
    /// revealed the element.
    pub fn on_intersection<C: ClassList + ?Sized>(
        &mut self,
        target: &mut C,
        entries: &[IntersectionEntry],
    ) -> Observation {
        if self.state != RevealState::Pending {
            return Observation::Keep;
        }

        let seen = entries
            .iter()
            .any(|e| e.crosses(self.options.threshold));

        if !seen {
            return Observation::Keep;
        }

        target.add_class(REVEALED_CLASS);
        self.state = RevealState::Revealed;
        Observation::Unobserve
    }

    /// Tear down. Later entries are ignored.
    pub fn destroy(&mut self) {
        self.state = RevealState::Destroyed;
    }
}
