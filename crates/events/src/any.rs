//! Runtime type access for boxed messages.

use std::any::Any;

/// Exposes the concrete value behind a trait object as [`Any`].
///
/// Blanket-implemented for every `'static` type. Call it on the trait object
/// itself (`(**boxed).as_any()` or via `&dyn Trait`), not on the `Box`, or the
/// `Box` is what gets inspected.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
