pub mod interpreter;
pub mod stack;

pub use interpreter::{ExecState, Interpreter};
pub use stack::OperandStack;
