use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::Transcriber;
use crate::{Result, YtWhisperError};

/// Speech-to-text using the Whisper command-line tool
pub struct WhisperTranscriber {
    whisper_path: String,
}

impl WhisperTranscriber {
    pub fn new(whisper_path: impl Into<String>) -> Self {
        Self {
            whisper_path: whisper_path.into(),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, audio_path: &Path, transcript_path: &Path) -> Result<()> {
        tracing::debug!("Invoking Whisper on {}", audio_path.display());

        let result = Command::new(&self.whisper_path)
            .arg("-f")
            .arg(audio_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(YtWhisperError::ToolMissing(self.whisper_path.clone()).into());
            }
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(YtWhisperError::TranscriptionFailed(stderr.trim().to_string()).into());
        }

        // Whisper prints the line-oriented transcript on stdout; capture it
        // verbatim at the deterministic transcript path.
        fs_err::write(transcript_path, &output.stdout)?;

        Ok(())
    }
}
