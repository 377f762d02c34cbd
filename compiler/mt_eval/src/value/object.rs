//! Values as they flow through the evaluator's stack.

use std::ops::Deref;

use bitflags::bitflags;

use super::Value;

bitflags! {
    /// Bookkeeping set on a result after it is produced.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u8 {
        /// Returned as a statement result but not printed by a REPL.
        const SILENT = 1 << 0;
    }
}

/// A [`Value`] plus evaluator-side flags.
///
/// Flags never change what a value does, only how a front end reports it.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    pub value: Value,
    pub flags: ObjectFlags,
}

impl Object {
    #[inline]
    pub fn new(value: Value) -> Self {
        Object {
            value,
            flags: ObjectFlags::empty(),
        }
    }

    /// A result that should not be echoed.
    #[inline]
    pub fn silent(value: Value) -> Self {
        Object {
            value,
            flags: ObjectFlags::SILENT,
        }
    }

    #[inline]
    pub fn is_printable(&self) -> bool {
        !self.flags.contains(ObjectFlags::SILENT)
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for Object {
    #[inline]
    fn from(value: Value) -> Self {
        Object::new(value)
    }
}

impl Deref for Object {
    type Target = Value;

    #[inline]
    fn deref(&self) -> &Value {
        &self.value
    }
}
