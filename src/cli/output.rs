//! Rendering of command results and failures.

use serde::Serialize;

/// Anything a command prints, as text or as JSON
pub trait CommandOutput: Serialize {
    /// Plain-text rendering
    fn to_human(&self) -> String;

    /// JSON rendering, the serialized value unless overridden
    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Failure of any command
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    /// Always false
    pub success: bool,
    /// Error with its context chain
    pub error: String,
}

impl From<&anyhow::Error> for ErrorOutput {
    fn from(err: &anyhow::Error) -> Self {
        Self {
            success: false,
            error: format!("{err:#}"),
        }
    }
}

impl CommandOutput for ErrorOutput {
    fn to_human(&self) -> String {
        format!("Error: {}", self.error)
    }
}

fn render<T: CommandOutput>(result: &T, json_mode: bool) -> String {
    if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    }
}

/// Print a command result to stdout.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    println!("{}", render(result, json_mode));
}

/// Print a command failure to stderr.
pub fn output_error(err: &anyhow::Error, json_mode: bool) {
    eprintln!("{}", render(&ErrorOutput::from(err), json_mode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_output_keeps_context_chain() {
        let err = anyhow::anyhow!("root cause").context("Failed to install json logger");
        let rendered = ErrorOutput::from(&err);

        assert!(!rendered.success);
        assert_eq!(rendered.error, "Failed to install json logger: root cause");
        assert_eq!(
            rendered.to_human(),
            "Error: Failed to install json logger: root cause"
        );
    }

    #[test]
    fn test_error_output_json() {
        let err = anyhow::anyhow!("boom");
        let json: serde_json::Value =
            serde_json::from_str(&render(&ErrorOutput::from(&err), true)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
    }
}
