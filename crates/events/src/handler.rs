use std::any::{Any, type_name};
use std::marker::PhantomData;

use bibliotheca_core::{AppResult, InfrastructureError};

use crate::{Command, DynCommand, Event};

/// Handles one command type (command handler capability).
///
/// `U` is the unit of work the bus owns. It is lent to the handler for the
/// duration of one call; handlers hold no reference to it between calls, so
/// implementors are typically unit structs.
///
/// A handler checks its pre-conditions through the unit of work before mutating
/// anything, so a failed pre-condition leaves the working set untouched.
pub trait CommandHandler<C: Command, U: ?Sized> {
    fn handle(&self, command: C, uow: &mut U) -> AppResult<C::Output>;
}

/// Handles one event type. Any number of these may be registered per event.
///
/// Follow-up events are recorded on the unit of work; the bus picks them up
/// right after this handler returns.
pub trait EventHandler<E: Event, U: ?Sized> {
    fn handle(&self, event: &E, uow: &mut U) -> AppResult<()>;
}

/// Type-erased command handler stored in the registry.
pub(crate) trait ErasedCommandHandler<U: ?Sized> {
    fn handle_dyn(&self, command: Box<dyn DynCommand>, uow: &mut U) -> AppResult<Box<dyn Any>>;
}

/// Type-erased event handler stored in the registry.
pub(crate) trait ErasedEventHandler<U: ?Sized> {
    fn handle_dyn(&self, event: &dyn Event, uow: &mut U) -> AppResult<()>;
}

pub(crate) struct TypedCommandHandler<C, H> {
    handler: H,
    _command: PhantomData<fn(C)>,
}

impl<C, H> TypedCommandHandler<C, H> {
    pub(crate) fn new(handler: H) -> Self {
        Self {
            handler,
            _command: PhantomData,
        }
    }
}

impl<C, H, U> ErasedCommandHandler<U> for TypedCommandHandler<C, H>
where
    C: Command,
    H: CommandHandler<C, U>,
    U: ?Sized,
{
    fn handle_dyn(&self, command: Box<dyn DynCommand>, uow: &mut U) -> AppResult<Box<dyn Any>> {
        let command = command
            .into_any()
            .downcast::<C>()
            .map_err(|_| InfrastructureError::InstanceMismatch {
                expected: type_name::<C>(),
            })?;
        let output = self.handler.handle(*command, uow)?;
        Ok(Box::new(output))
    }
}

pub(crate) struct TypedEventHandler<E, H> {
    handler: H,
    _event: PhantomData<fn(E)>,
}

impl<E, H> TypedEventHandler<E, H> {
    pub(crate) fn new(handler: H) -> Self {
        Self {
            handler,
            _event: PhantomData,
        }
    }
}

impl<E, H, U> ErasedEventHandler<U> for TypedEventHandler<E, H>
where
    E: Event,
    H: EventHandler<E, U>,
    U: ?Sized,
{
    fn handle_dyn(&self, event: &dyn Event, uow: &mut U) -> AppResult<()> {
        let event = event
            .as_any()
            .downcast_ref::<E>()
            .ok_or(InfrastructureError::InstanceMismatch {
                expected: type_name::<E>(),
            })?;
        self.handler.handle(event, uow)
    }
}
