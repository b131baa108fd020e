//! VM Operand Stack
//!
//! Bounded LIFO of numeric values for a single interpreter run.
//! No execution semantics.

use crate::config::DEFAULT_STACK_CAPACITY;
use crate::error::{VmError, VmResult};

/// Operand stack with a fixed capacity
#[derive(Debug)]
pub struct OperandStack {
    values: Vec<f64>,
    capacity: usize,
}

impl OperandStack {
    /// Create new stack with maximum size
    ///
    /// Storage grows on demand; `capacity` is only enforced by `push`.
    pub fn new(capacity: usize) -> Self {
        OperandStack {
            values: Vec::with_capacity(capacity.min(DEFAULT_STACK_CAPACITY)),
            capacity,
        }
    }

    /// Push value onto stack
    pub fn push(&mut self, value: f64) -> VmResult<()> {
        if self.values.len() >= self.capacity {
            return Err(VmError::StackOverflow {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(())
    }

    /// Pop value from stack
    pub fn pop(&mut self) -> VmResult<f64> {
        self.values.pop().ok_or(VmError::StackUnderflow)
    }

    /// Clear stack
    pub fn reset(&mut self) {
        self.values.clear();
    }

    /// Get current stack size
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Maximum number of values the stack accepts
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
