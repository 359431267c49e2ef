use std::any::TypeId;

use crate::{Command, DynCommand, Event};

/// One entry of the bus queue: either a command or an event.
#[derive(Debug)]
pub enum Message {
    Command(Box<dyn DynCommand>),
    Event(Box<dyn Event>),
}

impl Message {
    pub fn command<C: Command>(command: C) -> Self {
        Message::Command(Box::new(command))
    }

    pub fn event<E: Event>(event: E) -> Self {
        Message::Event(Box::new(event))
    }

    /// Stable name of the wrapped command or event.
    pub fn message_type(&self) -> &'static str {
        match self {
            Message::Command(c) => c.message_type(),
            Message::Event(e) => e.event_type(),
        }
    }

    /// Concrete Rust type of the payload, used as the routing key.
    pub fn payload_type_id(&self) -> TypeId {
        match self {
            Message::Command(c) => (**c).as_any().type_id(),
            Message::Event(e) => (**e).as_any().type_id(),
        }
    }
}
