//! Definition of the unique id capability used for correlation handles.

use rand::Rng;

/// Produces identifiers that are extremely unlikely to collide.
///
/// No ordering or format is guaranteed beyond collision resistance across
/// successive calls on the same source.
pub trait IdSource {
    /// Generate a fresh identifier.
    fn unique_id(&self) -> String;
}

/// [`IdSource`] backed by the thread-local random number generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn unique_id(&self) -> String {
        format!("{:032x}", rand::rng().random::<u128>())
    }
}

// Any `() -> String` callable works as an id source.
impl<F: Fn() -> String> IdSource for F {
    fn unique_id(&self) -> String {
        self()
    }
}
