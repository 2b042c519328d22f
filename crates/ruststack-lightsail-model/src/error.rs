//! Lightsail error types.
//!
//! Lightsail errors use the AWS JSON 1.1 format with a `__type` field
//! containing the fully-qualified error type name.

use std::fmt;

/// Well-known Lightsail error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum LightsailErrorCode {
    /// The caller is not permitted to perform the operation.
    AccessDeniedException,
    /// The account is still being set up and cannot accept requests yet.
    AccountSetupInProgressException,
    /// A request parameter failed validation.
    #[default]
    InvalidInputException,
    /// The referenced resource does not exist.
    NotFoundException,
    /// The requested operation cannot be performed in the resource's
    /// current state.
    OperationFailureException,
    /// An internal service failure.
    ServiceException,
    /// The request was not signed with valid credentials.
    UnauthenticatedException,
}

impl LightsailErrorCode {
    /// Returns the fully-qualified error type string for the JSON `__type` field.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::AccessDeniedException => "com.amazonaws.lightsail#AccessDeniedException",
            Self::AccountSetupInProgressException => {
                "com.amazonaws.lightsail#AccountSetupInProgressException"
            }
            Self::InvalidInputException => "com.amazonaws.lightsail#InvalidInputException",
            Self::NotFoundException => "com.amazonaws.lightsail#NotFoundException",
            Self::OperationFailureException => "com.amazonaws.lightsail#OperationFailureException",
            Self::ServiceException => "com.amazonaws.lightsail#ServiceException",
            Self::UnauthenticatedException => "com.amazonaws.lightsail#UnauthenticatedException",
        }
    }

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccessDeniedException => "AccessDeniedException",
            Self::AccountSetupInProgressException => "AccountSetupInProgressException",
            Self::InvalidInputException => "InvalidInputException",
            Self::NotFoundException => "NotFoundException",
            Self::OperationFailureException => "OperationFailureException",
            Self::ServiceException => "ServiceException",
            Self::UnauthenticatedException => "UnauthenticatedException",
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::AccessDeniedException => http::StatusCode::FORBIDDEN,
            Self::NotFoundException => http::StatusCode::NOT_FOUND,
            Self::ServiceException => http::StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnauthenticatedException => http::StatusCode::UNAUTHORIZED,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for LightsailErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Lightsail error response.
#[derive(Debug)]
pub struct LightsailError {
    /// The error code.
    pub code: LightsailErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for LightsailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LightsailError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for LightsailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl LightsailError {
    /// Create a new `LightsailError` from an error code.
    #[must_use]
    pub fn new(code: LightsailErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `LightsailError` with a custom message.
    #[must_use]
    pub fn with_message(code: LightsailErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error response.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        self.code.error_type()
    }

    // -- Convenience constructors --

    /// Caller lacks permission for the operation.
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::AccessDeniedException, message)
    }

    /// Request parameter failed validation.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::InvalidInputException, message)
    }

    /// Referenced resource does not exist.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::NotFoundException, message)
    }

    /// Operation cannot be performed in the resource's current state.
    #[must_use]
    pub fn operation_failure(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::OperationFailureException, message)
    }

    /// Internal service failure.
    #[must_use]
    pub fn service_error(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::ServiceException, message)
    }

    /// Request was not signed with valid credentials.
    #[must_use]
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::with_message(LightsailErrorCode::UnauthenticatedException, message)
    }
}

/// Create a `LightsailError` from an error code.
///
/// # Examples
///
/// ```
/// use ruststack_lightsail_model::lightsail_error;
/// use ruststack_lightsail_model::error::LightsailErrorCode;
///
/// let err = lightsail_error!(InvalidInputException);
/// assert_eq!(err.code, LightsailErrorCode::InvalidInputException);
///
/// let err = lightsail_error!(NotFoundException, "Instance not found");
/// assert_eq!(err.message, "Instance not found");
/// ```
#[macro_export]
macro_rules! lightsail_error {
    ($code:ident) => {
        $crate::error::LightsailError::new($crate::error::LightsailErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::LightsailError::with_message($crate::error::LightsailErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_map_error_codes_to_type_strings() {
        assert_eq!(
            LightsailErrorCode::NotFoundException.error_type(),
            "com.amazonaws.lightsail#NotFoundException"
        );
        assert_eq!(
            LightsailErrorCode::ServiceException.error_type(),
            "com.amazonaws.lightsail#ServiceException"
        );
    }

    #[test]
    fn test_should_map_error_codes_to_status_codes() {
        assert_eq!(
            LightsailErrorCode::AccessDeniedException.default_status_code(),
            http::StatusCode::FORBIDDEN
        );
        assert_eq!(
            LightsailErrorCode::NotFoundException.default_status_code(),
            http::StatusCode::NOT_FOUND
        );
        assert_eq!(
            LightsailErrorCode::ServiceException.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LightsailErrorCode::UnauthenticatedException.default_status_code(),
            http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            LightsailErrorCode::InvalidInputException.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_should_build_error_with_custom_message() {
        let err = LightsailError::not_found("Disk not found: my-disk");
        assert_eq!(err.code, LightsailErrorCode::NotFoundException);
        assert_eq!(err.message, "Disk not found: my-disk");
        assert_eq!(err.status_code, http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_should_display_error() {
        let err = lightsail_error!(OperationFailureException, "disk is attached");
        assert_eq!(
            err.to_string(),
            "LightsailError(OperationFailureException): disk is attached"
        );
    }

    #[test]
    fn test_should_default_to_invalid_input() {
        assert_eq!(
            LightsailErrorCode::default(),
            LightsailErrorCode::InvalidInputException
        );
    }
}
