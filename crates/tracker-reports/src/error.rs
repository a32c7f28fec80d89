//! Report error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// The list, artist or ranking does not exist or is not published.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store failed; surfaced as-is and never retried.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] sea_orm::DbErr),
}

pub type Result<T, E = ReportError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    // ── Display messages ──────────────────────────────────────────────

    #[test]
    fn test_display_not_found() {
        let err = ReportError::NotFound("obsessions list for 1999".into());
        assert_eq!(err.to_string(), "not found: obsessions list for 1999");
    }

    #[test]
    fn test_display_invalid_argument() {
        let err = ReportError::InvalidArgument("\"20\" is not a valid year".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: \"20\" is not a valid year"
        );
    }

    // ── From conversions ──────────────────────────────────────────────

    #[test]
    fn test_from_db_error() {
        let db_err = sea_orm::DbErr::Custom("connection reset".into());
        let err: ReportError = db_err.into();
        assert!(matches!(err, ReportError::StoreUnavailable(_)));
        assert!(err.to_string().contains("connection reset"));
    }

    // ── Error trait source chain ──────────────────────────────────────

    #[test]
    fn test_error_source_store() {
        use std::error::Error;
        let err: ReportError = sea_orm::DbErr::Custom("boom".into()).into();
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_string_variants() {
        use std::error::Error;
        let err = ReportError::NotFound("artist".into());
        assert!(err.source().is_none());
    }
}
