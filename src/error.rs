//! Custom error types for changelog-bump.

use thiserror::Error;

/// Main error type for changelog-bump operations.
#[derive(Error, Debug)]
pub enum ChangelogError {
    // Version errors
    #[error(
        "Invalid version '{0}': expected at least major and minor components"
    )]
    InvalidVersion(String),

    #[error("Unable to read version from manifest {path}: {reason}")]
    ManifestVersion { path: String, reason: String },

    // Release mutation errors
    #[error("Change description must not be empty")]
    EmptyDescription,

    // Document parsing errors
    #[error("Changelog parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // Prompt errors
    #[error("Input stream closed before the session finished")]
    InputClosed,

    // Parsing errors - automatic conversions via #[from]
    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a parse error for the given 1-based line number
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Create a manifest version error
    pub fn manifest_version(
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ManifestVersion {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ChangelogError::parse(3, "bullet outside of a category");
        assert_eq!(
            err.to_string(),
            "Changelog parse error on line 3: bullet outside of a category"
        );

        let err = ChangelogError::InvalidVersion("1".into());
        assert_eq!(
            err.to_string(),
            "Invalid version '1': expected at least major and minor components"
        );
    }

    #[test]
    fn test_error_helpers() {
        let err = ChangelogError::manifest_version("package.json", "missing");
        assert!(matches!(err, ChangelogError::ManifestVersion { .. }));

        let err = ChangelogError::parse(1, "missing title");
        assert!(matches!(err, ChangelogError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_from_conversions() {
        let json_err = serde_json::from_str::<serde_json::Value>("{");
        assert!(json_err.is_err());
        let err: ChangelogError = json_err.unwrap_err().into();
        assert!(matches!(err, ChangelogError::JsonParseError(_)));

        let io_err = std::io::Error::other("disk full");
        let err: ChangelogError = io_err.into();
        assert!(matches!(err, ChangelogError::IoError(_)));
    }
}
