//! Opaque event handlers carried through widget descriptors.
//!
//! The kit never invokes these itself; they are configuration handed to the
//! rendering toolkit, which calls them from its own event dispatch.

use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe event handler.
///
/// `T` is the event payload: `()` for click and long-press, `bool` for hover
/// enter/exit and checkbox changes, `String` for text input changes.
pub struct Callback<T = ()>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Callback<T> {
    pub fn new(handler: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// Invoke the handler with an event payload.
    pub fn call(&self, payload: T) {
        (self.0)(payload)
    }
}

impl Callback<()> {
    /// Wrap a payload-free closure, for click-style events.
    pub fn unit(handler: impl Fn() + Send + Sync + 'static) -> Self {
        Self::new(move |()| handler())
    }

    pub fn invoke(&self) {
        self.call(())
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}
