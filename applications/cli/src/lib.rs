//! Illuminate CLI Library
//!
//! Terminal front end for the Illuminate API: configuration, output
//! rendering and the file-backed theme preference.

pub mod config;
pub mod error;
pub mod render;

pub use config::CliConfig;
pub use error::{CliError, Result};

use illuminate_client::ApiError;
use illuminate_ui::{FileStore, MemoryRoot, ThemeManager};

/// Theme manager persisting to `<ui.state_dir>/preferences.json`.
pub fn theme_manager(config: &CliConfig) -> ThemeManager<FileStore, MemoryRoot> {
    ThemeManager::new(FileStore::in_dir(&config.ui.state_dir), MemoryRoot::default())
}

/// The login URL carried by an unrecoverable-session error anywhere in
/// `error`'s chain.
pub fn login_url(error: &anyhow::Error) -> Option<&str> {
    error.chain().find_map(|cause| match cause.downcast_ref::<ApiError>() {
        Some(ApiError::AuthRequired { login_url }) => Some(login_url.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use illuminate_ui::ThemeId;
    use tempfile::tempdir;

    #[test]
    fn test_login_url_found_through_context() {
        let err = anyhow::Error::new(ApiError::AuthRequired {
            login_url: "http://localhost:8080/auth/github/login".into(),
        })
        .context("loading feed");

        assert_eq!(
            login_url(&err),
            Some("http://localhost:8080/auth/github/login")
        );
    }

    #[test]
    fn test_login_url_found_inside_cli_error() {
        let err = anyhow::Error::new(CliError::from(ApiError::AuthRequired {
            login_url: "https://x.test/auth/github/login".into(),
        }));
        assert_eq!(login_url(&err), Some("https://x.test/auth/github/login"));
    }

    #[test]
    fn test_login_url_absent_for_other_errors() {
        let err = anyhow::Error::new(ApiError::Http {
            status: 500,
            message: "boom".into(),
        });
        assert!(login_url(&err).is_none());
    }

    #[test]
    fn test_theme_manager_uses_state_dir() {
        let dir = tempdir().unwrap();
        let mut config = CliConfig::default();
        config.ui.state_dir = dir.path().to_path_buf();

        theme_manager(&config).set_theme(ThemeId::Glacier).unwrap();
        assert_eq!(theme_manager(&config).get_theme(), ThemeId::Glacier);
        assert!(dir.path().join(FileStore::FILE_NAME).exists());
    }
}
