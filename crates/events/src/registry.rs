//! Explicit message type → handler(s) configuration.

use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::handler::{
    ErasedCommandHandler, ErasedEventHandler, TypedCommandHandler, TypedEventHandler,
};
use crate::{Command, CommandHandler, Event, EventHandler};

pub(crate) struct RegisteredCommand<U: ?Sized> {
    pub(crate) command_type: &'static str,
    pub(crate) handler: Box<dyn ErasedCommandHandler<U>>,
}

pub(crate) struct RegisteredEvent<U: ?Sized> {
    pub(crate) event_type: &'static str,
    pub(crate) handlers: Vec<Box<dyn ErasedEventHandler<U>>>,
}

/// Routing table handed to [`MessageBus::new`](crate::MessageBus::new).
///
/// - Commands: exactly one handler per command type. Registering a second
///   handler for the same type replaces the first.
/// - Events: zero or more handlers per event type, invoked in registration
///   order.
///
/// Built once at startup and owned by the bus; there is no global registry.
pub struct HandlerRegistry<U: ?Sized> {
    commands: HashMap<TypeId, RegisteredCommand<U>>,
    events: HashMap<TypeId, RegisteredEvent<U>>,
}

impl<U: ?Sized + 'static> HandlerRegistry<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route command type `C` to `handler`.
    pub fn register_command<C, H>(&mut self, handler: H) -> &mut Self
    where
        C: Command,
        H: CommandHandler<C, U> + 'static,
    {
        let replaced = self.commands.insert(
            TypeId::of::<C>(),
            RegisteredCommand {
                command_type: type_name::<C>(),
                handler: Box::new(TypedCommandHandler::<C, H>::new(handler)),
            },
        );
        if replaced.is_some() {
            tracing::warn!(command = type_name::<C>(), "command handler replaced");
        }
        self
    }

    /// Append `handler` to the handler list of event type `E`.
    pub fn register_event<E, H>(&mut self, handler: H) -> &mut Self
    where
        E: Event,
        H: EventHandler<E, U> + 'static,
    {
        self.events
            .entry(TypeId::of::<E>())
            .or_insert_with(|| RegisteredEvent {
                event_type: type_name::<E>(),
                handlers: Vec::new(),
            })
            .handlers
            .push(Box::new(TypedEventHandler::<E, H>::new(handler)));
        self
    }

    /// Builder form of [`HandlerRegistry::register_command`].
    pub fn with_command<C, H>(mut self, handler: H) -> Self
    where
        C: Command,
        H: CommandHandler<C, U> + 'static,
    {
        self.register_command::<C, H>(handler);
        self
    }

    /// Builder form of [`HandlerRegistry::register_event`].
    pub fn with_event<E, H>(mut self, handler: H) -> Self
    where
        E: Event,
        H: EventHandler<E, U> + 'static,
    {
        self.register_event::<E, H>(handler);
        self
    }
}

impl<U: ?Sized> HandlerRegistry<U> {
    pub fn handles_command(&self, type_id: TypeId) -> bool {
        self.commands.contains_key(&type_id)
    }

    pub fn handles_event(&self, type_id: TypeId) -> bool {
        self.events.contains_key(&type_id)
    }

    /// Registered command type names, sorted.
    pub fn command_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.values().map(|c| c.command_type).collect();
        names.sort_unstable();
        names
    }

    /// Registered event type names, sorted.
    pub fn event_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.events.values().map(|e| e.event_type).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn command(&self, type_id: TypeId) -> Option<&RegisteredCommand<U>> {
        self.commands.get(&type_id)
    }

    pub(crate) fn event_handlers(&self, type_id: TypeId) -> &[Box<dyn ErasedEventHandler<U>>] {
        self.events
            .get(&type_id)
            .map(|e| e.handlers.as_slice())
            .unwrap_or(&[])
    }
}

impl<U: ?Sized> Default for HandlerRegistry<U> {
    fn default() -> Self {
        Self {
            commands: HashMap::new(),
            events: HashMap::new(),
        }
    }
}

impl<U: ?Sized> core::fmt::Debug for HandlerRegistry<U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("commands", &self.command_types())
            .field("events", &self.event_types())
            .finish()
    }
}
