//! calcvm - Core Library
//!
//! Stack-based bytecode interpreter for arithmetic expressions.
//! Public API surface for the calcvm core.

pub mod bytecode;
pub mod config;
pub mod error;
pub mod vm;

// Re-export commonly used types
pub use bytecode::{disassemble, Instruction, OpCode};
pub use config::{DomainPolicy, VmConfig};
pub use error::{VmError, VmResult};
pub use vm::{ExecState, Interpreter, OperandStack};

/// Run `bytecode` on a fresh interpreter with the default configuration.
pub fn interpret(bytecode: &[u8]) -> VmResult<f64> {
    Interpreter::default().run(bytecode)
}
