//! Application-wide error types using thiserror.

use folio_common::FolioError;
use folio_config::ConfigError;
use folio_i18n::I18nError;
use std::path::PathBuf;

/// Main application error type.
///
/// Only failures the site cannot render around end up here. Missing
/// documents and translations are logged and rendered without.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Source or logging setup failed.
    #[error(transparent)]
    Common(#[from] FolioError),

    /// Language tag or session store error.
    #[error("Language error: {0}")]
    Language(#[from] I18nError),

    /// The rendered page could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the site application.
pub type SiteResult<T> = Result<T, SiteError>;
