//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Which backend the engine should run on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendPreference {
    /// Hardware AES when the CPU has it, software otherwise.
    #[default]
    Auto,
    /// Hardware AES; construction fails if it is unavailable.
    Native,
    /// Always use the software backend.
    Portable,
}

/// Configuration for [`BatchEncryptor`](crate::BatchEncryptor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Backend selection policy.
    pub backend: BackendPreference,
    /// Batches with at least this many instances are sharded across the rayon
    /// pool. Smaller batches run on the calling thread.
    pub parallel_threshold: usize,
    /// Instances per shard when a batch is sharded. Zero is treated as one.
    pub shard_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: BackendPreference::Auto,
            parallel_threshold: 4096,
            shard_size: 1024,
        }
    }
}

impl EngineConfig {
    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    pub(crate) fn effective_shard_size(&self) -> usize {
        self.shard_size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "backend": "portable", "shard_size": 0 }"#).unwrap();
        assert_eq!(config.backend, BackendPreference::Portable);
        assert_eq!(config.parallel_threshold, 4096);
        assert_eq!(config.effective_shard_size(), 1);
    }

    #[test]
    fn empty_config_is_default() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
