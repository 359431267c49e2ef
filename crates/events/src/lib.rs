//! Commands, events and the in-process message bus that routes them.
//!
//! The pieces, leaves first:
//!
//! - [`Command`] / [`Event`]: message contracts
//! - [`CommandHandler`] / [`EventHandler`]: capability traits, one per message type
//! - [`UnitOfWork`] + [`atomically`]: the transactional scope handlers run in
//! - [`HandlerRegistry`]: explicit message type → handler(s) configuration
//! - [`MessageBus`]: drains a FIFO of commands and events until empty

pub mod any;
pub mod bus;
pub mod command;
pub mod event;
pub mod handler;
pub mod message;
pub mod registry;
pub mod unit_of_work;

pub use any::AsAny;
pub use bus::MessageBus;
pub use command::{Command, DynCommand};
pub use event::Event;
pub use handler::{CommandHandler, EventHandler};
pub use message::Message;
pub use registry::HandlerRegistry;
pub use unit_of_work::{UnitOfWork, atomically};
