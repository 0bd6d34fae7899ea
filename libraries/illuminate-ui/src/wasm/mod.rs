//! WASM bindings for illuminate-ui
//!
//! Browser implementations of the [`ClassList`](crate::ClassList),
//! [`PreferenceStore`](crate::PreferenceStore) and
//! [`ThemeRoot`](crate::ThemeRoot) seams, plus JavaScript-facing exports.

#[cfg(feature = "wasm")]
pub mod dom;

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub use dom::{observe_reveal, DocumentRoot, ElementClasses, LocalStorage, RevealHandle};
