//! In-process message bus (mechanics only).
//!
//! The bus owns a FIFO queue of [`Message`]s, the unit of work every handler
//! runs against, and the [`HandlerRegistry`] that routes messages by concrete
//! type.
//!
//! ## Dispatch Flow
//!
//! ```text
//! handle(message)
//!   ↓
//! enqueue → while queue non-empty:
//!             Command → its single handler → store result → drain uow events
//!             Event   → each handler in order → drain uow events after EACH
//!   ↓
//! queue empty → caller reads command_result()
//! ```
//!
//! Draining events after every single event handler means a handler's own
//! follow-up events are queued before the next handler of the same list runs.
//!
//! ## Failure Semantics
//!
//! - Unregistered command type: [`InfrastructureError::HandlerNotRegistered`]
//! - Unregistered event type: no-op
//! - Command queued as an event (or the reverse): [`InfrastructureError::MessageKind`]
//! - Handler failure: propagated unchanged. The handler's unit of work scope has
//!   already rolled back and dropped its undrained events; messages that were
//!   already queued stay queued and are drained by the next `handle` call.
//!
//! Single-threaded by construction: `handle` takes `&mut self` and never yields
//! mid-drain. Re-entrant dispatch from inside a handler is not supported.

use std::any::{Any, TypeId, type_name};
use std::collections::VecDeque;

use bibliotheca_core::{AppResult, InfrastructureError};

use crate::{Command, DynCommand, Event, HandlerRegistry, Message, UnitOfWork};

pub struct MessageBus<U> {
    uow: U,
    registry: HandlerRegistry<U>,
    queue: VecDeque<Message>,
    command_result: Option<Box<dyn Any>>,
}

impl<U> MessageBus<U> {
    pub fn new(uow: U, registry: HandlerRegistry<U>) -> Self {
        Self {
            uow,
            registry,
            queue: VecDeque::new(),
            command_result: None,
        }
    }

    pub fn unit_of_work(&self) -> &U {
        &self.uow
    }

    pub fn unit_of_work_mut(&mut self) -> &mut U {
        &mut self.uow
    }

    /// Messages still queued (non-zero only after a failed `handle`).
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Result of the last command handled, viewed as `T`.
    ///
    /// `Ok(None)` if no command has completed since the last `handle` call
    /// started; [`InfrastructureError::InstanceMismatch`] if the result is not a `T`.
    pub fn command_result<T: Any>(&self) -> AppResult<Option<&T>> {
        match &self.command_result {
            None => Ok(None),
            Some(result) => result
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| instance_mismatch::<T>()),
        }
    }

    /// Move the last command result out of the bus.
    ///
    /// On a type mismatch the result is left in place.
    pub fn take_command_result<T: Any>(&mut self) -> AppResult<Option<T>> {
        match self.command_result.take() {
            None => Ok(None),
            Some(result) => match result.downcast::<T>() {
                Ok(value) => Ok(Some(*value)),
                Err(result) => {
                    self.command_result = Some(result);
                    Err(instance_mismatch::<T>())
                }
            },
        }
    }
}

impl<U: UnitOfWork> MessageBus<U> {
    /// Dispatch `message` and everything it transitively produces.
    pub fn handle(&mut self, message: Message) -> AppResult<()> {
        self.command_result = None;
        self.queue.push_back(message);

        while let Some(message) = self.queue.pop_front() {
            let type_id = message.payload_type_id();
            match message {
                Message::Command(command) => self.handle_command(command, type_id)?,
                Message::Event(event) => self.handle_event(event, type_id)?,
            }
        }

        Ok(())
    }

    /// Handle a single command and return its typed result.
    pub fn execute<C: Command>(&mut self, command: C) -> AppResult<C::Output> {
        self.handle(Message::command(command))?;
        self.take_command_result::<C::Output>()?
            .ok_or_else(|| instance_mismatch::<C::Output>())
    }

    fn handle_command(&mut self, command: Box<dyn DynCommand>, type_id: TypeId) -> AppResult<()> {
        let command_type = command.message_type();

        let Some(registered) = self.registry.command(type_id) else {
            if self.registry.handles_event(type_id) {
                return Err(InfrastructureError::MessageKind {
                    message_type: command_type,
                }
                .into());
            }
            return Err(InfrastructureError::HandlerNotRegistered { command_type }.into());
        };

        tracing::debug!(command = command_type, "dispatching command");
        let result = registered.handler.handle_dyn(command, &mut self.uow)?;
        self.command_result = Some(result);

        self.enqueue_new_events();
        Ok(())
    }

    fn handle_event(&mut self, event: Box<dyn Event>, type_id: TypeId) -> AppResult<()> {
        let event_type = event.event_type();

        if self.registry.handles_command(type_id) {
            return Err(InfrastructureError::MessageKind {
                message_type: event_type,
            }
            .into());
        }

        let handlers = self.registry.event_handlers(type_id);
        tracing::debug!(event = event_type, handlers = handlers.len(), "dispatching event");

        for handler in handlers {
            handler.handle_dyn(&*event, &mut self.uow)?;
            for new_event in self.uow.collect_new_events() {
                self.queue.push_back(Message::Event(new_event));
            }
        }

        Ok(())
    }

    fn enqueue_new_events(&mut self) {
        for event in self.uow.collect_new_events() {
            self.queue.push_back(Message::Event(event));
        }
    }
}

impl<U: core::fmt::Debug> core::fmt::Debug for MessageBus<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MessageBus")
            .field("uow", &self.uow)
            .field("registry", &self.registry)
            .field("pending", &self.queue.len())
            .field("has_result", &self.command_result.is_some())
            .finish()
    }
}

fn instance_mismatch<T>() -> bibliotheca_core::AppError {
    InfrastructureError::InstanceMismatch {
        expected: type_name::<T>(),
    }
    .into()
}
