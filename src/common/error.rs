use thiserror::Error;

/// Failures surfaced to the user. `Display` is the exact text shown in the
/// status chip (and, for solve, in the output panel).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkbenchError {
    /// Guard failure: nothing to solve, no request was sent.
    #[error("Add or generate a formula first")]
    EmptyFormula,
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request could not be completed.
    #[error("{message}")]
    Transport { message: String },
    /// A 2xx body could not be decoded.
    #[error("{message}")]
    Decode { message: String },
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl WorkbenchError {
    /// Server error with the backend's message, falling back to the operation's
    /// generic text when the body had none.
    pub fn server(status: u16, message: Option<String>, fallback: &str) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        WorkbenchError::Server { status, message }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for WorkbenchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            WorkbenchError::Decode { message: e.to_string() }
        } else {
            WorkbenchError::Transport { message: e.to_string() }
        }
    }
}

impl From<serde_json::Error> for WorkbenchError {
    fn from(e: serde_json::Error) -> Self {
        WorkbenchError::Decode { message: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_backend_message() {
        let err = WorkbenchError::server(400, Some("bad seed".into()), "Generation failed");
        assert_eq!(err.to_string(), "bad seed");
    }

    #[test]
    fn server_error_falls_back_when_message_missing_or_empty() {
        let err = WorkbenchError::server(500, None, "Solver failed");
        assert_eq!(err.to_string(), "Solver failed");
        let err = WorkbenchError::server(500, Some(String::new()), "Solver failed");
        assert_eq!(err.to_string(), "Solver failed");
    }

    #[test]
    fn guard_message_is_fixed() {
        assert_eq!(WorkbenchError::EmptyFormula.to_string(), "Add or generate a formula first");
    }
}
