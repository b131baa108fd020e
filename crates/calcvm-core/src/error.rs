//! calcvm Error Types
//!
//! Every way a run can fail. Errors abort the run immediately and are
//! returned to the caller as values; the interpreter never panics on
//! malformed bytecode.

use thiserror::Error;

use crate::bytecode::opcode::OpCode;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VmError {
    // Arithmetic errors
    #[error("division by zero")]
    DivisionByZero,

    #[error("math domain error in {op:?} for operand {operand}")]
    Domain { op: OpCode, operand: f64 },

    // Bytecode errors
    #[error("unknown opcode 0x{opcode:02X} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    #[error("truncated program: fetch past end at offset {offset}")]
    TruncatedProgram { offset: usize },

    // Stack errors
    #[error("stack overflow (capacity {capacity})")]
    StackOverflow { capacity: usize },

    #[error("stack underflow")]
    StackUnderflow,
}

pub type VmResult<T> = Result<T, VmError>;
