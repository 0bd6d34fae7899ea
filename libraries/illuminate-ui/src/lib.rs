//! Illuminate UI utilities
//!
//! Platform-agnostic front-end helpers:
//! - Reveal-on-scroll: a one-shot state machine that tags an element and
//!   marks it revealed the first time it becomes visible
//! - Themes: the theme table plus get/set/init over a preference store and
//!   a document root
//!
//! Browser bindings (IntersectionObserver, localStorage, the document
//! element) live behind the `wasm` feature. Everything else runs anywhere,
//! with [`MemoryStore`], [`FileStore`] and [`MemoryRoot`] standing in for
//! the browser.
//!
//! # Example
//!
//! ```rust
//! use illuminate_ui::{MemoryRoot, MemoryStore, ThemeId, ThemeManager, THEME_ATTRIBUTE};
//!
//! let mut themes = ThemeManager::new(MemoryStore::default(), MemoryRoot::default());
//! assert_eq!(themes.get_theme(), ThemeId::Forest);
//!
//! themes.set_theme(ThemeId::Sunset).unwrap();
//! assert_eq!(themes.get_theme(), ThemeId::Sunset);
//! assert_eq!(themes.root().attribute(THEME_ATTRIBUTE), Some("sunset"));
//! ```

pub mod error;
pub mod reveal;
pub mod store;
pub mod theme;

pub mod wasm;

pub use error::{Result, UiError};
pub use reveal::{
    ClassList, IntersectionEntry, Observation, Reveal, RevealOptions, RevealState,
    REVEALED_CLASS, REVEAL_RATIO_TOLERANCE, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, TRIGGER_CLASS,
};
pub use store::{FileStore, MemoryRoot, MemoryStore};
pub use theme::{PreferenceStore, ThemeId, ThemeManager, ThemeRoot, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
