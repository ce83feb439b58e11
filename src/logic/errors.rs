use anyhow::Error;

use crate::api::BackendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401/403 or no session
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

fn classify_status(status: u16) -> ErrorType {
    match status {
        401 | 403 => ErrorType::Unauthorized,
        404 => ErrorType::NotFound,
        500..=599 => ErrorType::ServerError,
        _ => ErrorType::Other,
    }
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    // Typed backend errors first
    for cause in error.chain() {
        if let Some(backend) = cause.downcast_ref::<BackendError>() {
            return match backend {
                BackendError::Status { status, .. } => classify_status(*status),
                BackendError::NotAuthenticated => ErrorType::Unauthorized,
            };
        }
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            if reqwest_err.is_timeout() {
                return ErrorType::Timeout;
            }
            if let Some(status) = reqwest_err.status() {
                return classify_status(status.as_u16());
            }
        }
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for display - surfaces the root cause
pub fn format_error_message(error: &Error) -> String {
    // reqwest errors carry the most useful text for network failures
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    error.root_cause().to_string()
}

/// Short label for the status bar
pub fn error_label(error_type: &ErrorType) -> &'static str {
    match error_type {
        ErrorType::ConnectionRefused => "connection refused",
        ErrorType::Timeout => "timed out",
        ErrorType::Unauthorized => "not authorized",
        ErrorType::NotFound => "not found",
        ErrorType::ServerError => "server error",
        ErrorType::NetworkError => "network error",
        ErrorType::Other => "error",
    }
}
