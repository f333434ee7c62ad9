use reqwest::StatusCode;
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub struct PortalError {
    pub message: String,
    /// Set when the portal answered with a non-success status.
    pub status: Option<StatusCode>,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl PortalError {
    pub fn new(message: &str) -> Self {
        PortalError {
            message: message.to_string(),
            status: None,
            source: None,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        PortalError {
            message: format!("failed to retrieve the page, status code: {}", status.as_u16()),
            status: Some(status),
            source: None,
        }
    }

    /// The wrapped error, if any.
    pub fn source_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PortalError: {}", self.message)
    }
}

impl<E: StdError + Send + Sync + 'static> From<E> for PortalError {
    fn from(err: E) -> Self {
        PortalError {
            message: err.to_string(),
            status: None,
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_code() {
        let err = PortalError::status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.status, Some(StatusCode::BAD_GATEWAY));
        assert_eq!(err.to_string(), "PortalError: failed to retrieve the page, status code: 502");
        assert!(err.source_error().is_none());
    }

    #[test]
    fn wraps_std_errors() {
        let err: PortalError = "not a url".parse::<url::Url>().unwrap_err().into();
        assert!(err.status.is_none());
        assert!(err.source_error().is_some());
    }
}
