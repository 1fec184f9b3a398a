use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::speech::SpeechConfig;

pub mod lookup;
pub mod speech;

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub speech: SpeechConfig,
    /// Clipboard poll cadence in watch mode
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup: LookupConfig::default(),
            speech: SpeechConfig::default(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let poll_interval_ms = env::var("SELECTION_POLL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_poll_interval_ms);

        Config {
            lookup: LookupConfig::new(),
            speech: SpeechConfig::new(),
            poll_interval_ms,
        }
    }
}
