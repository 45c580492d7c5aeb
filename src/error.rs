use actix_web::{body, http::{self, header::ContentType, StatusCode}, HttpResponse};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayrollError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("database error")]
    Database(#[from] DbErr),
}

impl PayrollError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }
}

impl actix_web::error::ResponseError for PayrollError {
    fn error_response(&self) -> HttpResponse<body::BoxBody> {
        if let PayrollError::Database(err) = self {
            tracing::error!(error = %err, "database failure");
        }

        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> http::StatusCode {
        match self {
            PayrollError::NotFound(_) => StatusCode::NOT_FOUND,
            PayrollError::Validation(_) => StatusCode::BAD_REQUEST,
            PayrollError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
