//! calcvm disassembler: human-readable opcode listing from bytecode.

use crate::error::VmResult;

use super::instruction::Instruction;

/// Disassemble bytecode into a human-readable string.
///
/// The whole buffer is listed, including anything after `Halt`.
pub fn disassemble(bytecode: &[u8]) -> VmResult<String> {
    let mut out = String::new();
    let mut offset = 0usize;

    while offset < bytecode.len() {
        let (ins, _) = Instruction::decode(bytecode, offset)?;
        out.push_str(&format_instr(offset, &ins));
        out.push('\n');
        offset += ins.encoded_len();
    }

    if out.is_empty() {
        out.push_str("(empty program)\n");
    }

    Ok(out)
}

fn format_instr(offset: usize, ins: &Instruction) -> String {
    let byte = u8::from(ins.opcode);
    match ins.operand {
        Some(operand) => format!("{:04x}  {:02x}  {:?} ({})", offset, byte, ins.opcode, operand),
        None => format!("{:04x}  {:02x}  {:?}", offset, byte, ins.opcode),
    }
}
