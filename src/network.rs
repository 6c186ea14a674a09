//! Definition of the connectivity capability consulted before each send.

/// Reports current connectivity, checked once per send attempt.
pub trait OnlineProbe {
    /// Whether the client currently believes it can reach the collector.
    fn is_online(&self) -> bool;
}

/// [`OnlineProbe`] that always reports connected.
///
/// Real connectivity detection is platform specific and injected by the
/// embedding client; this is the default for environments without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeOnline;

impl OnlineProbe for AssumeOnline {
    fn is_online(&self) -> bool {
        true
    }
}

// Any `() -> bool` callable works as a probe.
impl<F: Fn() -> bool> OnlineProbe for F {
    fn is_online(&self) -> bool {
        self()
    }
}
