use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use snafu::Snafu;
use std::num::ParseIntError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApiError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error commiting SQL transaction"))]
    CommitTransaction { source: sqlx::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseNumber {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Unknown student store kind {:?}, expected `postgres` or `memory`", kind))]
    UnknownStoreKind { kind: String },
    #[snafu(display("Unable to parse student id {:?}", original))]
    ParseStudentId {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Unable to read request body: {}", source.body_text()))]
    ReadBody { source: BytesRejection },
    #[snafu(display("Unable to parse student from request body: {}", source))]
    InvalidStudentBody { source: serde_json::Error },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: i32 },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let status_code = match &self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MakeQuery { .. } | Self::CommitTransaction { .. } => ISE,
            Self::BadEnvVar { .. } => ISE,
            Self::ParsePort { .. } | Self::ParseNumber { .. } => ISE,
            Self::UnknownStoreKind { .. } => ISE,
            Self::ParseStudentId { .. } => BI,
            Self::ReadBody { source } => source.status(),
            Self::InvalidStudentBody { .. } => BI,
            Self::MissingStudent { .. } => NF,
        };

        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(%self, "Rejected request");
        }

        (
            status_code,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_student_is_not_found() {
        let response = ApiError::MissingStudent { id: 7 }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_id_is_bad_request() {
        let source = "abc".parse::<i32>().unwrap_err();
        let response = ApiError::ParseStudentId {
            source,
            original: "abc".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn query_errors_are_server_errors() {
        let response = ApiError::MakeQuery {
            source: sqlx::Error::PoolTimedOut,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
