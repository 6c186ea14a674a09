//! Definition of severity levels used to filter buffered events.

use serde::{Deserialize, Serialize};

/// Severity rank of a diagnostic event.
///
/// Ranks are plain integers where a lower value means a more severe event.
/// The named constants cover the common severities, but any rank can be
/// constructed for callers that want finer grading in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    /// Most severe rank, reserved for unrecoverable client errors.
    pub const ERROR: Level = Level(3);

    /// Default rank for routine diagnostic events.
    pub const INFO: Level = Level(6);

    /// Least severe rank, for verbose debugging output.
    pub const DEBUG: Level = Level(7);

    /// Create a level with an arbitrary rank.
    ///
    /// # Arguments
    ///
    /// * `rank` - Numeric severity, lower is more severe.
    pub const fn new(rank: u8) -> Self {
        Level(rank)
    }

    /// Numeric rank of this level.
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Whether an event at this level passes a severity threshold.
    ///
    /// The check is inclusive: an event is kept iff its rank is at most
    /// the threshold's rank.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Least severe rank still accepted.
    pub const fn passes(self, threshold: Level) -> bool {
        self.0 <= threshold.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Level::ERROR, Level::ERROR, true)]
    #[case(Level::ERROR, Level::INFO, true)]
    #[case(Level::ERROR, Level::DEBUG, true)]
    #[case(Level::INFO, Level::ERROR, false)]
    #[case(Level::INFO, Level::INFO, true)]
    #[case(Level::DEBUG, Level::INFO, false)]
    #[case(Level::new(2), Level::ERROR, true)]
    fn threshold_is_inclusive(#[case] level: Level, #[case] threshold: Level, #[case] kept: bool) {
        assert_eq!(level.passes(threshold), kept);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_value(Level::ERROR).expect("Level should serialize");
        assert_eq!(json, serde_json::json!(3));
    }

    #[test]
    fn severity_ordering() {
        assert!(Level::ERROR < Level::INFO);
        assert!(Level::INFO < Level::DEBUG);
    }
}
