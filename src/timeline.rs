//! Definition of the bounded diagnostic timeline and its send protocol.

use crate::{
    AssumeOnline, Clock, ConfigError, Event, Fields, IdSource, Level, OnlineProbe, Options,
    RandomIds, SystemClock,
};
use serde_json::{Map, Value, json};
use std::collections::VecDeque;

/// Client identifier tag stamped into the first payload.
const LIB: &str = "rust";

/// Completion callback handed to a transport alongside each payload.
///
/// The transport must invoke it at most once, with whatever opaque result
/// the collector returned (or `None` when there was nothing to report).
pub type SendCallback = Box<dyn FnOnce(Option<Value>)>;

/// A bounded in-memory buffer of diagnostic events, flushed in bundles.
///
/// Events are appended through the leveled logging calls and drained into a
/// numbered payload on every [`send`](Timeline::send). Session-identifying
/// metadata rides along only in the first payload; later bundles carry just
/// the session id and the drained events.
///
/// All mutation goes through `&mut self`, so a single instance is safe to
/// drive from one execution context without any locking. The transport is
/// the only suspension point: it receives the payload and a completion
/// callback, and returns control immediately.
#[derive(Debug)]
pub struct Timeline<C = SystemClock, P = AssumeOnline, G = RandomIds> {
    key: String,
    session: u64,
    options: Options,
    events: VecDeque<Event>,
    sent: bool,
    bundle: u64,
    clock: C,
    probe: P,
    ids: G,
}

impl Timeline {
    /// Create a timeline with the system clock and default capabilities.
    ///
    /// # Arguments
    ///
    /// * `key` - Opaque string identifying the client application.
    /// * `session` - Session identifier, fixed for the instance lifetime.
    /// * `options` - Buffer and metadata configuration.
    pub fn new(
        key: impl Into<String>,
        session: u64,
        options: Options,
    ) -> Result<Self, ConfigError> {
        Timeline::from_parts(key, session, options, SystemClock, AssumeOnline, RandomIds)
    }
}

impl<C: Clock, P: OnlineProbe, G: IdSource> Timeline<C, P, G> {
    /// Construct a timeline from its basic parts.
    ///
    /// # Arguments
    ///
    /// * `key` - Opaque string identifying the client application.
    /// * `session` - Session identifier, fixed for the instance lifetime.
    /// * `options` - Buffer and metadata configuration.
    /// * `clock` - Timestamp source for event records.
    /// * `probe` - Connectivity check consulted once per send.
    /// * `ids` - Source of unique correlation ids.
    pub fn from_parts(
        key: impl Into<String>,
        session: u64,
        options: Options,
        clock: C,
        probe: P,
        ids: G,
    ) -> Result<Self, ConfigError> {
        options.validate()?;

        Ok(Self {
            session,
            options,
            clock,
            probe,
            ids,
            key: key.into(),
            events: VecDeque::new(),
            sent: false,
            bundle: 0,
        })
    }

    /// Key identifying the client application.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Session identifier this timeline was created with.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Configuration this timeline was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the buffer currently holds zero events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events currently buffered.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Generate a fresh correlation id from the injected source.
    pub fn generate_unique_id(&self) -> String {
        self.ids.unique_id()
    }

    /// Record an event at the given severity.
    ///
    /// Events less severe than the configured threshold are dropped without
    /// any other side effect. Accepted events are stamped with the current
    /// clock reading and appended; if the buffer then exceeds its limit, the
    /// oldest events are evicted first.
    ///
    /// # Arguments
    ///
    /// * `level` - Severity of the event.
    /// * `fields` - Caller-supplied key/value fields.
    pub fn log(&mut self, level: Level, fields: Fields) {
        if !level.passes(self.options.level) {
            return;
        }

        self.events
            .push_back(Event::new(self.clock.now_ms(), level, fields));

        while self.events.len() > self.options.limit {
            self.events.pop_front();
        }
    }

    /// Record an event at [`Level::ERROR`].
    pub fn error(&mut self, fields: Fields) {
        self.log(Level::ERROR, fields);
    }

    /// Record an event at the default [`Level::INFO`] severity.
    pub fn info(&mut self, fields: Fields) {
        self.log(Level::INFO, fields);
    }

    /// Record an event at [`Level::DEBUG`].
    pub fn debug(&mut self, fields: Fields) {
        self.log(Level::DEBUG, fields);
    }

    /// Drain the buffer into a numbered bundle and hand it to a transport.
    ///
    /// Returns `false` without any side effect when the probe reports
    /// offline. Otherwise the bundle counter is incremented, the buffer is
    /// drained into the payload synchronously, and the transport receives
    /// the payload together with a completion callback that forwards its
    /// opaque result to `on_send`. A `true` return means "handed off", not
    /// "delivered"; transport failures never roll back the drain or the
    /// counter.
    ///
    /// # Arguments
    ///
    /// * `transport` - Callable performing the actual network exchange.
    /// * `on_send` - Hook receiving the transport's eventual result.
    pub fn send<T, F>(&mut self, transport: T, on_send: F) -> bool
    where
        T: FnOnce(Value, SendCallback),
        F: FnOnce(Option<Value>) + 'static,
    {
        if !self.probe.is_online() {
            return false;
        }

        self.bundle += 1;
        let payload = self.build_payload();
        transport(payload, Box::new(on_send));

        true
    }

    /// Assemble the outgoing payload and drain the buffer.
    ///
    /// Full session metadata is included only while no send has been
    /// initiated yet; the flag flips here, when the payload is built, not
    /// when the transport confirms delivery.
    fn build_payload(&mut self) -> Value {
        let mut payload = Map::new();
        payload.insert("bundle".to_string(), json!(self.bundle));

        if !self.sent {
            payload.insert("key".to_string(), json!(self.key));
        }

        payload.insert("session".to_string(), json!(self.session));

        if !self.sent {
            if !self.options.features.is_empty() {
                payload.insert("features".to_string(), json!(self.options.features));
            }

            payload.insert("lib".to_string(), json!(LIB));

            if let Some(version) = &self.options.version {
                payload.insert("version".to_string(), json!(version));
            }

            for (key, value) in &self.options.params {
                payload.insert(key.clone(), value.clone());
            }
        }

        let drained: Vec<Event> = self.events.drain(..).collect();
        payload.insert("timeline".to_string(), json!(drained));

        self.sent = true;
        Value::Object(payload)
    }
}
