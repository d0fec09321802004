use opentelemetry_semantic_conventions::{attribute::OTEL_STATUS_CODE, trace::ERROR_TYPE};
use thiserror::Error;
use tracing::{Span, error, warn};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Content store request failed for {query}: {source}")]
    Http {
        query: &'static str,
        source: reqwest::Error,
    },

    #[error("Content store returned {status} for {query}")]
    UnexpectedStatus {
        query: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read content store response for {query}: {source}")]
    ResponseBody {
        query: &'static str,
        source: reqwest::Error,
    },

    #[error("Failed to decode content store response for {query}: {source}")]
    Decode {
        query: &'static str,
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),
}

impl AppError {
    /// Name of the content query that failed, when the error came from the store.
    pub fn query(&self) -> Option<&'static str> {
        match self {
            AppError::Http { query, .. }
            | AppError::UnexpectedStatus { query, .. }
            | AppError::ResponseBody { query, .. }
            | AppError::Decode { query, .. } => Some(*query),
            _ => None,
        }
    }

    pub fn log_and_record(&self, ctx: &str) {
        let current_span = Span::current();
        let is_valid_span = !current_span.is_none();

        let message = self.to_string();
        let error_kind = match self {
            AppError::Http { query, source } => {
                error!(error = %message, context = %ctx, query = %query, http_error = %source, "Content store request error");
                "content_store_http_error"
            }
            AppError::UnexpectedStatus { query, status } => {
                error!(error = %message, context = %ctx, query = %query, status = %status, "Content store status error");
                "content_store_status_error"
            }
            AppError::ResponseBody { query, source } => {
                error!(error = %message, context = %ctx, query = %query, http_error = %source, "Content store body error");
                "content_store_body_error"
            }
            AppError::Decode { query, source } => {
                error!(error = %message, context = %ctx, query = %query, decode_error = %source, "Content store decode error");
                "content_store_decode_error"
            }
            AppError::Configuration(msg) => {
                warn!(message = %msg, context = %ctx, "Configuration error");
                "configuration_error"
            }
            AppError::Authentication(msg) => {
                warn!(message = %msg, context = %ctx, "Authentication error");
                "authentication_error"
            }
        };

        if is_valid_span {
            current_span.record("error", tracing::field::display(true));
            current_span.record(ERROR_TYPE, tracing::field::display(error_kind));
            current_span.record("error.message", tracing::field::display(&message));

            if self.query().is_some() {
                current_span.record(OTEL_STATUS_CODE, tracing::field::display("ERROR"));
            }
        }
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(error: base64::DecodeError) -> Self {
        AppError::Authentication(format!("Malformed basic credentials: {}", error))
    }
}

impl From<std::string::FromUtf8Error> for AppError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        AppError::Authentication(format!("Credentials are not valid UTF-8: {}", error))
    }
}
