//! Error types shared by the services and the UI layer.

/// Failure of a remote task-store call.
///
/// `Display` yields only the human-readable message so it can be shown to the
/// user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),

    #[error("Task service unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected response from {command}: {reason}")]
    Decode { command: String, reason: String },

    #[error("Could not encode arguments for {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required route parameter `{0}`")]
    MissingRouteParam(&'static str),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_bare_message() {
        assert_eq!(ApiError::Rejected("Network error".into()).to_string(), "Network error");
    }

    #[test]
    fn test_config_error_names_param() {
        let err = ConfigError::MissingRouteParam("projectId");
        assert_eq!(err.to_string(), "Missing required route parameter `projectId`");
    }
}
