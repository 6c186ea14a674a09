//! Definition of the diagnostic event record held in the buffer.

use crate::Level;
use serde::Serialize;
use serde_json::{Map, Value};

/// Caller-supplied key/value fields attached to an event.
pub type Fields = Map<String, Value>;

/// A single buffered diagnostic event.
///
/// Events are immutable once created. The level is stored only when it
/// differs from the implicit default severity; the serializer omits it
/// entirely in that case rather than encoding a sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Milliseconds since epoch, stamped from the clock at log time.
    pub timestamp: u64,

    /// Explicit severity, absent for events logged at the default level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,

    /// Arbitrary caller-supplied fields, flattened into the wire object.
    #[serde(flatten)]
    pub fields: Fields,
}

impl Event {
    /// Create a new event record.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - Milliseconds since epoch.
    /// * `level` - Severity of the event; the default severity is elided.
    /// * `fields` - Caller-supplied key/value fields.
    pub fn new(timestamp: u64, level: Level, fields: Fields) -> Self {
        Self {
            timestamp,
            fields,
            level: (level != Level::INFO).then_some(level),
        }
    }
}
