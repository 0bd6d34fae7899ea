//! Colour themes
//!
//! The selected theme is persisted under [`THEME_STORAGE_KEY`] and applied
//! by setting [`THEME_ATTRIBUTE`] on the document root. The default theme
//! is expressed by an empty attribute value, so the stylesheet's base rules
//! apply.

use crate::error::{Result, UiError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Preference key holding the theme id
pub const THEME_STORAGE_KEY: &str = "illuminate-theme";

/// Root attribute the stylesheet keys themes on
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Forest,
    Sunset,
    Orchid,
    Crimson,
    Glacier,
    Mono,
}

impl ThemeId {
    /// All themes, in picker order.
    pub const ALL: [ThemeId; 6] = [
        ThemeId::Forest,
        ThemeId::Sunset,
        ThemeId::Orchid,
        ThemeId::Crimson,
        ThemeId::Glacier,
        ThemeId::Mono,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ThemeId::Forest => "forest",
            ThemeId::Sunset => "sunset",
            ThemeId::Orchid => "orchid",
            ThemeId::Crimson => "crimson",
            ThemeId::Glacier => "glacier",
            ThemeId::Mono => "mono",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeId::Forest => "Forest",
            ThemeId::Sunset => "Sunset",
            ThemeId::Orchid => "Orchid",
            ThemeId::Crimson => "Crimson",
            ThemeId::Glacier => "Glacier",
            ThemeId::Mono => "Mono",
        }
    }

    /// Swatch colour shown in the picker.
    pub fn accent(&self) -> &'static str {
        match self {
            ThemeId::Forest => "#73E2A7",
            ThemeId::Sunset => "#FF8811",
            ThemeId::Orchid => "#E15A97",
            ThemeId::Crimson => "#c93040",
            ThemeId::Glacier => "#64B6AC",
            ThemeId::Mono => "#e0e0e0",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == ThemeId::default()
    }

    /// Value written to [`THEME_ATTRIBUTE`].
    pub fn attribute_value(&self) -> &'static str {
        if self.is_default() {
            ""
        } else {
            self.id()
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemeId {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self> {
        ThemeId::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| UiError::UnknownTheme(s.to_string()))
    }
}

/// String key-value persistence (browser local storage, a file, memory).
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The element themes are applied to.
pub trait ThemeRoot {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()>;
}

/// Reads, applies and persists the theme preference.
pub struct ThemeManager<S, R> {
    store: S,
    root: R,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeManager<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self { store, root }
    }

    /// The persisted theme.
    ///
    /// Falls back to the default when nothing is stored, the store cannot
    /// be read, or the stored id is not a known theme.
    pub fn get_theme(&self) -> ThemeId {
        let stored = match self.store.get(THEME_STORAGE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return ThemeId::default(),
            Err(e) => {
                debug!(error = %e, "Theme preference unreadable, using default");
                return ThemeId::default();
            }
        };

        match stored.parse() {
            Ok(theme) => theme,
            Err(_) => {
                warn!(stored = %stored, "Ignoring unknown stored theme");
                ThemeId::default()
            }
        }
    }

    /// Apply `theme` to the root and persist it.
    pub fn set_theme(&mut self, theme: ThemeId) -> Result<()> {
        self.root
            .set_attribute(THEME_ATTRIBUTE, theme.attribute_value())?;
        self.store.set(THEME_STORAGE_KEY, theme.id())?;
        debug!(theme = %theme, "Theme set");
        Ok(())
    }

    /// Apply the persisted theme at startup.
    ///
    /// The root is left untouched for the default theme.
    pub fn init_theme(&mut self) -> Result<ThemeId> {
        let theme = self.get_theme();
        if !theme.is_default() {
            self.root.set_attribute(THEME_ATTRIBUTE, theme.id())?;
        }
        Ok(theme)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn into_parts(self) -> (S, R) {
        (self.store, self.root)
    }
}
