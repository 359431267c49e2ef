//! Transactional scope handlers run their repository work in.

use bibliotheca_core::AppResult;

use crate::Event;

/// Snapshot / commit / rollback boundary around one working set.
///
/// The lifecycle of one scope is:
///
/// ```text
/// enter()     load durable snapshot into the working set, remember a backup
///   ↓
/// work        handlers mutate the working set, record events
///   ↓
/// Ok  → commit() if is_dirty(), then close()
/// Err → rollback(), then close()
/// ```
///
/// [`atomically`] drives this lifecycle; implementors only provide the steps.
///
/// The unit of work also owns a FIFO event buffer. Events recorded during a
/// scope survive a successful close so the bus can drain them afterwards with
/// [`UnitOfWork::collect_new_events`]; `rollback` discards whatever has not
/// been drained yet.
///
/// Scopes are not re-entrant: `enter` on an open scope must fail.
pub trait UnitOfWork {
    /// Open a scope: load the durable snapshot and record a backup copy.
    fn enter(&mut self) -> AppResult<()>;

    /// Whether the working set differs from the backup.
    fn is_dirty(&self) -> bool;

    /// Write the whole working set to durable storage (overwrite, not append).
    fn commit(&mut self) -> AppResult<()>;

    /// Restore the working set from the backup and drop undrained events.
    fn rollback(&mut self);

    /// Tear the scope down. Recorded events are kept.
    fn close(&mut self);

    /// Record an event for the bus to pick up.
    fn add_event(&mut self, event: Box<dyn Event>);

    /// Drain the event buffer. Each event is returned exactly once.
    fn collect_new_events(&mut self) -> Vec<Box<dyn Event>>;

    /// Typed convenience over [`UnitOfWork::add_event`].
    fn record<E: Event>(&mut self, event: E)
    where
        Self: Sized,
    {
        self.add_event(Box::new(event));
    }
}

/// Run `work` inside one unit of work scope.
///
/// Commits on success when the working set changed, rolls back on any error
/// (including a failed commit). The error is returned unchanged.
pub fn atomically<U, T, F>(uow: &mut U, work: F) -> AppResult<T>
where
    U: UnitOfWork + ?Sized,
    F: FnOnce(&mut U) -> AppResult<T>,
{
    uow.enter()?;

    let outcome = work(uow).and_then(|value| {
        if uow.is_dirty() {
            uow.commit()?;
        }
        Ok(value)
    });

    if outcome.is_err() {
        uow.rollback();
    }
    uow.close();

    outcome
}
