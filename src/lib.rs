//! # Timeline
//!
//! Timeline is a bounded, in-memory diagnostics buffer for realtime clients.
//! Leveled events accumulate in a fixed-size FIFO buffer and are periodically
//! drained into numbered bundles handed to an injected transport callable.
//!
//! ## Diff send
//!
//! The first bundle ever sent carries the full session metadata (client key,
//! enabled features, client version and any extra params). Every later bundle
//! is a reduced "diff" payload holding only the bundle number, the session id
//! and the drained events, since the collector already knows the rest.
//!
//! ## Capabilities
//!
//! Wall-clock time ([`Clock`]), connectivity ([`OnlineProbe`]) and unique id
//! generation ([`IdSource`]) are consumed as injected capabilities with system
//! defaults, so hosts and tests can substitute their own. The transport is a
//! plain callable receiving each payload and a completion callback; delivery
//! guarantees, retries and persistence are explicitly out of scope.

pub(crate) mod clock;
pub(crate) mod event;
pub(crate) mod ids;
pub(crate) mod level;
pub(crate) mod network;
pub(crate) mod options;
pub(crate) mod timeline;

// Externally exposed types.
pub use clock::{Clock, SystemClock};
pub use event::{Event, Fields};
pub use ids::{IdSource, RandomIds};
pub use level::Level;
pub use network::{AssumeOnline, OnlineProbe};
pub use options::{ConfigError, DEFAULT_LIMIT, Options};
pub use timeline::{SendCallback, Timeline};
