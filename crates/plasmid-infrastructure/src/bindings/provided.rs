//! Type-erased produced values

use std::any::{Any, type_name};
use std::fmt;

/// Opaque value produced by a factory, restored by a checked downcast
///
/// The name of the erased type is kept alongside the value so a failed
/// downcast can report what was actually produced.
pub struct Provided {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl Provided {
    /// Erase `value`
    pub fn new<T: Send + 'static>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
        }
    }

    /// Name of the erased type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the erased value is a `T`
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Restore the value as `T`, handing it back unchanged on mismatch
    pub fn downcast<T: 'static>(self) -> Result<T, Self> {
        let Self { value, type_name } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self { value, type_name }),
        }
    }
}

impl fmt::Debug for Provided {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provided")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
