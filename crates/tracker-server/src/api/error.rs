use axum::{http::StatusCode, Json};
use serde_json::{json, Value};
use tracker_reports::ReportError;

pub type ApiError = (StatusCode, Json<Value>);

/// Map a report failure to its HTTP status with a `{ "error": ... }` body.
pub fn report_error(err: ReportError) -> ApiError {
    let status = match &err {
        ReportError::NotFound(_) => {
            tracing::debug!("{err}");
            StatusCode::NOT_FOUND
        }
        ReportError::InvalidArgument(_) => {
            tracing::debug!("{err}");
            StatusCode::BAD_REQUEST
        }
        ReportError::StoreUnavailable(e) => {
            tracing::error!(error = %e, "report failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn statuses() {
        let cases = [
            (ReportError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ReportError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
            (
                ReportError::StoreUnavailable(DbErr::Custom("down".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(report_error(err).0, expected);
        }
    }

    #[test]
    fn body_carries_the_message() {
        let (_, Json(body)) = report_error(ReportError::NotFound("album list for 1999".into()));
        assert_eq!(body["error"], "not found: album list for 1999");
    }
}
