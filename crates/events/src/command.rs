use std::any::Any;

use crate::any::AsAny;

/// A request describing one intended operation (command abstraction).
///
/// Commands represent **intent**. They carry only primitive fields so they can
/// be built straight from raw external input; validation happens when a
/// handler turns them into domain values.
///
/// Each command type is routed to exactly one [`CommandHandler`](crate::CommandHandler),
/// keyed by its concrete Rust type.
pub trait Command: AsAny + core::fmt::Debug {
    /// What a successful handler returns for this command.
    type Output: Any;

    /// Stable command name (e.g. "books.create").
    fn command_type(&self) -> &'static str;
}

/// Object-safe view of a [`Command`], used while it sits in the bus queue.
pub trait DynCommand: AsAny + core::fmt::Debug {
    fn message_type(&self) -> &'static str;
}

impl<C: Command> DynCommand for C {
    fn message_type(&self) -> &'static str {
        Command::command_type(self)
    }
}
