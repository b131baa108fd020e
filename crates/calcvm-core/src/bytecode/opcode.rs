//! Bytecode Opcode Definitions
//!
//! Defines the raw opcode set for calcvm bytecode.
//! This file contains no execution semantics.
//! Opcode values are a compatibility contract with existing bytecode producers.

/// Bytecode opcodes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpCode {
    /// Push the one-byte immediate operand
    PushImm = 0,

    // Binary arithmetic: pop right, pop left, push `left op right`
    Add = 1,
    Sub = 2,
    Div = 3,
    Mul = 4,
    Pow = 5,

    // Unary arithmetic
    Sqrt = 6,
    Ln = 7,

    /// Pop the top of the stack into the result register
    PopResult = 8,

    /// Stop execution
    Halt = 9,
}

impl OpCode {
    /// Convert raw byte to opcode
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(OpCode::PushImm),

            1 => Some(OpCode::Add),
            2 => Some(OpCode::Sub),
            3 => Some(OpCode::Div),
            4 => Some(OpCode::Mul),
            5 => Some(OpCode::Pow),

            6 => Some(OpCode::Sqrt),
            7 => Some(OpCode::Ln),

            8 => Some(OpCode::PopResult),
            9 => Some(OpCode::Halt),

            _ => None,
        }
    }

    /// Number of immediate bytes following the opcode byte
    pub fn immediate_len(self) -> usize {
        match self {
            OpCode::PushImm => 1,
            _ => 0,
        }
    }
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_defined_byte_maps_back_to_itself() {
        for byte in 0u8..=9 {
            let op = OpCode::from_u8(byte).expect("byte is in the opcode table");
            assert_eq!(u8::from(op), byte);
        }
    }

    #[test]
    fn bytes_past_halt_are_rejected() {
        assert_eq!(OpCode::from_u8(10), None);
        assert_eq!(OpCode::from_u8(0xFF), None);
    }

    #[test]
    fn only_push_carries_an_immediate() {
        assert_eq!(OpCode::PushImm.immediate_len(), 1);
        assert_eq!(OpCode::Halt.immediate_len(), 0);
        assert_eq!(OpCode::Div.immediate_len(), 0);
    }
}
