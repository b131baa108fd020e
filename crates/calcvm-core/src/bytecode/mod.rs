pub mod disasm;
pub mod instruction;
pub mod opcode;

pub use disasm::disassemble;
pub use instruction::Instruction;
pub use opcode::OpCode;
