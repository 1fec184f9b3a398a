use std::process::Stdio;

use obhidhan_config::speech::SpeechConfig;
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("speech playback is not available: '{0}' was not found")]
    Unavailable(String),

    #[error("speech playback is disabled")]
    Disabled,

    #[error("speech playback failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Hands text to an external TTS command. Speaking again cuts off
/// whatever is still playing.
pub struct Speaker {
    config: SpeechConfig,
    current: Mutex<Option<Child>>,
}

impl Speaker {
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            current: Mutex::new(None),
        }
    }

    pub async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if !self.config.enabled {
            return Err(SpeechError::Disabled);
        }

        let mut slot = self.current.lock().await;

        if let Some(mut child) = slot.take()
            && let Err(e) = child.kill().await
        {
            tracing::debug!("previous utterance already gone: {e}");
        }

        let child = Command::new(&self.config.command)
            .args(&self.config.args)
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    SpeechError::Unavailable(self.config.command.clone())
                }
                _ => SpeechError::Io(e),
            })?;

        tracing::debug!(command = %self.config.command, "speaking");
        *slot = Some(child);
        Ok(())
    }

    /// Lets the current utterance finish. One-shot callers use this so the
    /// process does not exit mid-sentence.
    pub async fn wait(&self) -> Result<(), SpeechError> {
        let mut slot = self.current.lock().await;
        if let Some(mut child) = slot.take() {
            child.wait().await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_config_reports_disabled() {
        let speaker = Speaker::new(SpeechConfig {
            enabled: false,
            ..SpeechConfig::default()
        });

        assert!(matches!(
            speaker.speak("hello").await,
            Err(SpeechError::Disabled)
        ));
    }

    #[tokio::test]
    async fn missing_command_reports_unavailable() {
        let speaker = Speaker::new(SpeechConfig {
            enabled: true,
            command: "obhidhan-no-such-tts".to_string(),
            args: Vec::new(),
        });

        match speaker.speak("hello").await {
            Err(SpeechError::Unavailable(command)) => {
                assert_eq!(command, "obhidhan-no-such-tts");
            }
            other => panic!("expected Unavailable, got {other:?}"),
        }
    }
}
