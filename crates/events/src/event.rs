use chrono::{DateTime, Utc};

use crate::any::AsAny;

/// Notification of a completed fact, queued for in-process follow-up.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - recorded on the unit of work by handlers, then drained by the bus
/// - routed to zero or more [`EventHandler`](crate::EventHandler)s by concrete type
pub trait Event: AsAny + core::fmt::Debug {
    /// Stable event name/type identifier (e.g. "books.book.created").
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
