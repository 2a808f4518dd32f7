//! Shared error types for jdeps invocations

use thiserror::Error;

/// Main error type for jdeps-runner operations
#[derive(Debug, Error)]
pub enum JdepsError {
    /// Every executable-resolution strategy was exhausted
    #[error("Unable to find jdeps command: {reason}")]
    ToolNotFound { reason: String },

    /// The host project's classpath could not be materialized
    #[error("Dependency resolution failed: {0}")]
    DependencyResolution(String),

    /// The child process could not be started or driven to completion
    #[error("Unable to execute jdeps command: {source}")]
    ProcessLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// jdeps ran and returned a non-zero exit code
    #[error("{}", exit_failure_message(.exit_code, .stderr, .command))]
    ToolExecution {
        exit_code: i32,
        stderr: String,
        command: String,
    },

    /// Configuration file errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl JdepsError {
    /// Create a `ToolNotFound` error with a resolution-failure reason
    pub fn tool_not_found(reason: impl Into<String>) -> Self {
        Self::ToolNotFound {
            reason: reason.into(),
        }
    }

    /// Create a `DependencyResolution` error
    pub fn dependency_resolution(message: impl Into<String>) -> Self {
        Self::DependencyResolution(message.into())
    }

    /// Create a `Configuration` error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, JdepsError>;

// Mirrors the failure text of the original tool integration so the operator
// can reproduce the run by hand.
fn exit_failure_message(exit_code: &i32, stderr: &str, command: &str) -> String {
    let mut msg = format!("\nExit code: {exit_code}");
    if !stderr.is_empty() {
        msg.push_str(" - ");
        msg.push_str(stderr);
    }
    msg.push('\n');
    msg.push_str("Command line was: ");
    msg.push_str(command);
    msg.push_str("\n\n");
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_execution_message_carries_code_stderr_and_command() {
        let err = JdepsError::ToolExecution {
            exit_code: 3,
            stderr: "boom".to_string(),
            command: "/opt/jdk/bin/jdeps -cp a.jar target/classes".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Exit code: 3"));
        assert!(msg.contains("boom"));
        assert!(msg.contains("/opt/jdk/bin/jdeps -cp a.jar target/classes"));
    }

    #[test]
    fn test_tool_execution_message_omits_separator_without_stderr() {
        let err = JdepsError::ToolExecution {
            exit_code: 2,
            stderr: String::new(),
            command: "jdeps -version x".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Exit code: 2\n"));
        assert!(!msg.contains(" - "));
    }

    #[test]
    fn test_tool_not_found_prefixes_reason() {
        let err =
            JdepsError::tool_not_found("The environment variable JAVA_HOME is not correctly set.");
        assert_eq!(
            err.to_string(),
            "Unable to find jdeps command: The environment variable JAVA_HOME is not correctly set."
        );
    }

    #[test]
    fn test_dependency_resolution_passes_message_through() {
        let err = JdepsError::dependency_resolution("artifact not downloaded: junit:junit:4.13");
        assert!(err.to_string().contains("artifact not downloaded"));
    }
}
