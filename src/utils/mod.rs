use tokio::process::Command;

use crate::config::Config;

/// Result of probing an external tool with its version flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Tool ran and exited successfully
    Available,
    /// Binary not found on PATH
    Missing,
    /// Tool was found but the version check exited non-zero
    Failed(Option<i32>),
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, ToolStatus::Available)
    }
}

/// Probe an external tool by invoking it with `--version`
pub async fn probe_tool(command: &str) -> ToolStatus {
    match Command::new(command).arg("--version").output().await {
        Ok(output) if output.status.success() => ToolStatus::Available,
        Ok(output) => ToolStatus::Failed(output.status.code()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ToolStatus::Missing,
        Err(_) => ToolStatus::Failed(None),
    }
}

/// Check if the current environment has the required external tools
pub async fn check_dependencies(config: &Config) -> Vec<String> {
    let mut missing = Vec::new();

    if !probe_tool(&config.tools.yt_dlp_path).await.is_available() {
        missing.push(format!(
            "{} - required for YouTube audio extraction",
            config.tools.yt_dlp_path
        ));
    }

    if !probe_tool(&config.tools.whisper_path).await.is_available() {
        missing.push(format!(
            "{} - required for transcription",
            config.tools.whisper_path
        ));
    }

    missing
}

/// Format duration in human-readable format
pub fn format_duration(seconds: i64) -> String {
    let total_seconds = seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}
