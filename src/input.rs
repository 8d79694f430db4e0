//! JSON payload read from standard input.

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_MODEL: &str = "Claude";

/// Session state sent by the host editor. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusInput {
    pub model: Option<ModelInfo>,
    pub workspace: Option<WorkspaceInfo>,
    pub session_id: Option<String>,
    pub context_window: Option<ContextWindow>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelInfo {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkspaceInfo {
    pub current_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContextWindow {
    pub remaining_percentage: Option<f64>,
}

impl StatusInput {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Model display name, "Claude" when missing or empty.
    pub fn model_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Workspace directory, falling back to the process working directory.
    pub fn current_dir(&self) -> PathBuf {
        self.workspace
            .as_ref()
            .and_then(|w| w.current_dir.as_deref())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or_default()
    }

    pub fn remaining_percentage(&self) -> Option<f64> {
        self.context_window
            .as_ref()
            .and_then(|c| c.remaining_percentage)
            .filter(|r| r.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let input = StatusInput::parse(
            r#"{
                "session_id": "abc-123",
                "model": {"id": "x", "display_name": "Opus"},
                "workspace": {"current_dir": "/home/me/project", "project_dir": "/home/me"},
                "context_window": {"remaining_percentage": 42.5},
                "cost": {"total_cost_usd": 0.1}
            }"#,
        )
        .unwrap();

        assert_eq!(input.model_name(), "Opus");
        assert_eq!(input.current_dir(), PathBuf::from("/home/me/project"));
        assert_eq!(input.session_id(), "abc-123");
        assert_eq!(input.remaining_percentage(), Some(42.5));
    }

    #[test]
    fn test_empty_object_defaults() {
        let input = StatusInput::parse("{}").unwrap();
        assert_eq!(input.model_name(), "Claude");
        assert_eq!(input.session_id(), "");
        assert_eq!(input.remaining_percentage(), None);
        assert!(!input.current_dir().as_os_str().is_empty());
    }

    #[test]
    fn test_nulls_and_empty_strings() {
        let input = StatusInput::parse(
            r#"{"model": {"display_name": ""}, "workspace": null, "context_window": {"remaining_percentage": null}}"#,
        )
        .unwrap();
        assert_eq!(input.model_name(), "Claude");
        assert_eq!(input.remaining_percentage(), None);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(StatusInput::parse("").is_err());
        assert!(StatusInput::parse("{not json").is_err());
    }
}
