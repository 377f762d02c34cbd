//! Activation records for block calls.
//!
//! Each call pushes one [`Activation`] holding its parameters, and
//! [`FrameGuard`] pops it again on every exit path, including a fatal
//! error unwinding through `?`. Nothing a call binds ever reaches the
//! session [`Scope`](crate::Scope), so two calls that share a parameter
//! name cannot disturb each other.
//!
//! ```text
//! let mut frame = interpreter.push_frame(activation);
//! frame.run_statement(&tokens)?;
//! // popped here
//! ```

use std::ops::{Deref, DerefMut};

use rustc_hash::FxHashMap;

use super::Interpreter;
use crate::value::CodeBlock;
use crate::Value;

/// Variables of one running block.
#[derive(Debug, Default)]
pub(crate) struct Activation {
    /// Parameters, curried arguments and assignments to them.
    bindings: FxHashMap<String, Value>,
    /// Copied from the frame the block literal was written in. Consulted
    /// after `bindings` and before the session scope.
    captured: FxHashMap<String, Value>,
}

impl Activation {
    /// Bind a fully applied call. The caller checks the argument count.
    pub(crate) fn for_call(block: &CodeBlock, args: Vec<Value>) -> Self {
        let mut bindings = FxHashMap::default();
        for (name, value) in block.bound() {
            bindings.insert(name.clone(), value.clone());
        }
        for (name, value) in block.params().iter().zip(args) {
            bindings.insert(name.clone(), value);
        }
        let captured = block.captured().iter().cloned().collect();
        Activation { bindings, captured }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub(crate) fn get_captured(&self, name: &str) -> Option<&Value> {
        self.captured.get(name)
    }

    /// Overwrite `name`, preferring a binding over a captured copy.
    pub(crate) fn assign(&mut self, name: &str, value: Value) {
        let slot = match self.bindings.get_mut(name) {
            Some(slot) => slot,
            None => self.captured.entry(name.to_string()).or_insert(Value::Nil),
        };
        *slot = value;
    }

    /// Variables a block literal written in this frame keeps, minus the
    /// names its own parameters shadow.
    pub(crate) fn capture(&self, shadowed: &[String]) -> Vec<(String, Value)> {
        self.captured
            .iter()
            .chain(&self.bindings)
            .filter(|(name, _)| !shadowed.iter().any(|param| param == *name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

/// Pops the frame it was created for when dropped.
pub(crate) struct FrameGuard<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
}

impl Drop for FrameGuard<'_, '_> {
    fn drop(&mut self) {
        self.interpreter.frames.pop();
        tracing::trace!(depth = self.interpreter.frames.len(), "frame popped");
    }
}

impl<'interp> Deref for FrameGuard<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for FrameGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    pub(crate) fn push_frame(&mut self, frame: Activation) -> FrameGuard<'_, 'a> {
        self.frames.push(frame);
        tracing::trace!(depth = self.frames.len(), "frame pushed");
        FrameGuard { interpreter: self }
    }
}
