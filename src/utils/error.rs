use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No profile in response: {reason}")]
    MissingProfile { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Document has no element with id '{id}'")]
    MissingElement { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 網路、HTTP 狀態或回應解析失敗
    Fetch,
    Config,
    Render,
}

impl CardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CardError::Api(_)
            | CardError::HttpStatus { .. }
            | CardError::Serialization(_)
            | CardError::MissingProfile { .. } => ErrorCategory::Fetch,
            CardError::ConfigError { .. } | CardError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            CardError::Io(_) | CardError::MissingElement { .. } => ErrorCategory::Render,
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        self.category() == ErrorCategory::Fetch
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Fetch => format!("Could not load a user profile: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::Render => format!("Could not render the student card: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CardError::Api(_) => "Check the network connection and that the API endpoint is reachable",
            CardError::HttpStatus { .. } => "The API rejected the request; try again later or use another endpoint",
            CardError::Serialization(_) | CardError::MissingProfile { .. } => {
                "The API answered with an unexpected body; make sure the endpoint speaks the randomuser format"
            }
            CardError::Io(_) => "Check that the template exists and the output directory is writable",
            CardError::ConfigError { .. } | CardError::InvalidConfigValueError { .. } => {
                "Fix the flag or config file value named in the message"
            }
            CardError::MissingElement { .. } => {
                "Add the missing element (nombre, programa, codigoEstudiante) to the template"
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Fetch => 2,
            ErrorCategory::Render => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_and_exit_codes() {
        let missing = CardError::MissingProfile {
            reason: "results is empty".to_string(),
        };
        assert!(missing.is_fetch_failure());
        assert_eq!(missing.exit_code(), 2);

        let status = CardError::HttpStatus {
            status: 503,
            url: "http://localhost/api".to_string(),
        };
        assert_eq!(status.category(), ErrorCategory::Fetch);
        assert_eq!(status.to_string(), "API returned 503 for http://localhost/api");

        let element = CardError::MissingElement {
            id: "programa".to_string(),
        };
        assert_eq!(element.category(), ErrorCategory::Render);
        assert_eq!(element.exit_code(), 3);

        let config = CardError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!config.is_fetch_failure());
        assert_eq!(config.exit_code(), 1);
        assert!(config.user_friendly_message().starts_with("Invalid configuration"));
    }
}
