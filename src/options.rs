//! Definition of timeline configuration and its validation.

use crate::Level;
use serde_json::Value;
use thiserror::Error;

/// Buffered events allowed before eviction kicks in, unless configured.
pub const DEFAULT_LIMIT: usize = 10_000;

/// Top-level payload fields that extra params are not allowed to shadow.
const RESERVED_FIELDS: [&str; 7] = [
    "bundle", "key", "session", "lib", "timeline", "features", "version",
];

/// Different types of error that can happen when configuring a timeline.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Param key collides with reserved payload field: {0}")]
    ReservedParam(String),
    #[error("Duplicate param key: {0}")]
    DuplicateParam(String),
}

/// Configuration accepted by a timeline.
///
/// `features`, `version` and `params` describe the client once; they ride
/// along only in the first payload ever sent. `limit` and `level` shape the
/// buffer itself for the whole lifetime of the instance.
#[derive(Debug, Clone)]
pub struct Options {
    /// Tags describing enabled client capabilities, sent once.
    pub features: Vec<String>,

    /// Client version string, sent once.
    pub version: Option<String>,

    /// Extra key/value pairs spread into the first payload, in order.
    pub params: Vec<(String, Value)>,

    /// Maximum number of buffered events; oldest are evicted beyond this.
    pub limit: usize,

    /// Least severe level still accepted by the buffer.
    pub level: Level,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            version: None,
            params: Vec::new(),
            limit: DEFAULT_LIMIT,
            level: Level::DEBUG,
        }
    }
}

impl Options {
    /// Check params against reserved payload fields and duplicates.
    ///
    /// Params are spread directly into the top level of the first payload,
    /// so a key matching a reserved field would silently shadow it.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (index, (key, _)) in self.params.iter().enumerate() {
            if RESERVED_FIELDS.contains(&key.as_str()) {
                return Err(ConfigError::ReservedParam(key.clone()));
            }

            if self.params[..index].iter().any(|(prev, _)| prev == key) {
                return Err(ConfigError::DuplicateParam(key.clone()));
            }
        }

        Ok(())
    }
}
