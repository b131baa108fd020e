//! Bytecode Instruction Representation
//!
//! Decoded form of one instruction and the prefix-free decoder shared by the
//! interpreter and the disassembler.

use crate::error::{VmError, VmResult};

use super::opcode::OpCode;

/// Decoded bytecode instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: OpCode,
    pub operand: Option<u8>,
}

impl Instruction {
    /// Create an instruction with no operand
    pub fn new(opcode: OpCode) -> Self {
        Instruction {
            opcode,
            operand: None,
        }
    }

    /// Create a push-immediate instruction
    pub fn push(value: u8) -> Self {
        Instruction {
            opcode: OpCode::PushImm,
            operand: Some(value),
        }
    }

    /// Encoded size in bytes (1 or 2)
    pub fn encoded_len(&self) -> usize {
        1 + self.opcode.immediate_len()
    }

    /// Decode the instruction starting at `offset`.
    ///
    /// Returns the instruction and the offset of the next one.
    pub fn decode(bytes: &[u8], offset: usize) -> VmResult<(Self, usize)> {
        let mut cursor = offset;
        let byte = read_u8(bytes, &mut cursor)?;
        let opcode = OpCode::from_u8(byte)
            .ok_or(VmError::UnknownOpcode { opcode: byte, offset })?;

        let operand = match opcode.immediate_len() {
            0 => None,
            _ => Some(read_u8(bytes, &mut cursor)?),
        };

        Ok((Instruction { opcode, operand }, cursor))
    }

    /// Append the canonical byte form to `out`
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.push(self.opcode.into());
        if let Some(operand) = self.operand {
            out.push(operand);
        }
    }
}

/// Read next byte from instruction stream
fn read_u8(bytes: &[u8], cursor: &mut usize) -> VmResult<u8> {
    let byte = *bytes
        .get(*cursor)
        .ok_or(VmError::TruncatedProgram { offset: *cursor })?;
    *cursor += 1;
    Ok(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_push_consumes_two_bytes() {
        let (ins, next) = Instruction::decode(&[0, 42, 9], 0).unwrap();
        assert_eq!(ins, Instruction::push(42));
        assert_eq!(next, 2);
    }

    #[test]
    fn decode_from_middle_of_buffer() {
        let (ins, next) = Instruction::decode(&[0, 42, 9], 2).unwrap();
        assert_eq!(ins, Instruction::new(OpCode::Halt));
        assert_eq!(next, 3);
    }

    #[test]
    fn decode_push_without_operand_is_truncated() {
        let err = Instruction::decode(&[0], 0).unwrap_err();
        assert_eq!(err, VmError::TruncatedProgram { offset: 1 });
    }

    #[test]
    fn decode_past_end_is_truncated() {
        let err = Instruction::decode(&[9], 1).unwrap_err();
        assert_eq!(err, VmError::TruncatedProgram { offset: 1 });
    }

    #[test]
    fn decode_unknown_reports_offset() {
        let err = Instruction::decode(&[0, 1, 0x7F], 2).unwrap_err();
        assert_eq!(err, VmError::UnknownOpcode { opcode: 0x7F, offset: 2 });
    }

    #[test]
    fn encode_matches_decoded_length() {
        let program = [
            Instruction::push(3),
            Instruction::new(OpCode::Sqrt),
            Instruction::new(OpCode::Halt),
        ];
        let mut bytes = Vec::new();
        for ins in &program {
            ins.encode_into(&mut bytes);
        }
        assert_eq!(bytes, vec![0, 3, 6, 9]);
        assert_eq!(program.iter().map(Instruction::encoded_len).sum::<usize>(), bytes.len());
    }
}
