//! Interpreter Core
//!
//! Fetch-decode-execute loop over a flat bytecode buffer. One `run` call
//! executes one program from a freshly reset state until `Halt` or the first
//! error.

use tracing::{debug, instrument, trace};

use crate::bytecode::instruction::Instruction;
use crate::bytecode::opcode::OpCode;
use crate::config::{DomainPolicy, VmConfig};
use crate::error::{VmError, VmResult};

use super::stack::OperandStack;

/// Execution state of the current (or last) run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    /// No run has started yet
    Idle,
    Running,
    Halted,
    Failed,
}

/// Stack-machine interpreter with a single result register
#[derive(Debug)]
pub struct Interpreter {
    config: VmConfig,
    stack: OperandStack,

    ip: usize,
    result: f64,

    state: ExecState,
    steps: u64,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}

impl Interpreter {
    /// Create a new interpreter instance
    pub fn new(config: VmConfig) -> Self {
        Interpreter {
            stack: OperandStack::new(config.stack_capacity),
            ip: 0,
            result: 0.0,
            state: ExecState::Idle,
            steps: 0,
            config,
        }
    }

    /// Execute `bytecode` until halt or error.
    ///
    /// State from any previous run is discarded first. On success the value
    /// of the result register is returned.
    #[instrument(skip_all, fields(len = bytecode.len()))]
    pub fn run(&mut self, bytecode: &[u8]) -> VmResult<f64> {
        self.reset();

        debug!("start interpreting");
        while self.state == ExecState::Running {
            if let Err(err) = self.step(bytecode) {
                self.state = ExecState::Failed;
                debug!(%err, ip = self.ip, steps = self.steps, "run failed");
                return Err(err);
            }
        }

        debug!(result = self.result, steps = self.steps, "halted");
        Ok(self.result)
    }

    /// Value of the result register
    pub fn result(&self) -> f64 {
        self.result
    }

    /// Execution state of the current or last run
    pub fn state(&self) -> ExecState {
        self.state
    }

    /// Number of instructions dispatched by the last run
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Configuration this interpreter was built with
    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    fn reset(&mut self) {
        debug!("reset vm state");
        self.stack.reset();
        self.ip = 0;
        self.result = 0.0;
        self.state = ExecState::Running;
        self.steps = 0;
    }

    /// Execute a single instruction
    fn step(&mut self, bytecode: &[u8]) -> VmResult<()> {
        let offset = self.ip;
        let (ins, next) = Instruction::decode(bytecode, offset)?;
        self.ip = next;

        self.steps += 1;
        trace!(offset, opcode = ?ins.opcode, depth = self.stack.len(), "dispatch");

        match ins.opcode {
            OpCode::PushImm => {
                let arg = ins
                    .operand
                    .ok_or(VmError::TruncatedProgram { offset: next })?;
                self.stack.push(f64::from(arg))?;
            }

            OpCode::Add => self.binary(|left, right| left + right)?,
            OpCode::Sub => self.binary(|left, right| left - right)?,
            OpCode::Mul => self.binary(|left, right| left * right)?,
            OpCode::Div => {
                // the divisor is checked before the dividend is touched
                let right = self.stack.pop()?;
                if right == 0.0 {
                    return Err(VmError::DivisionByZero);
                }
                let left = self.stack.pop()?;
                self.stack.push(left / right)?;
            }
            OpCode::Pow => {
                let right = self.stack.pop()?;
                let left = self.stack.pop()?;
                let res = left.powf(right);
                let in_domain = !res.is_nan() || left.is_nan() || right.is_nan();
                self.check_domain(OpCode::Pow, left, in_domain)?;
                self.stack.push(res)?;
            }

            OpCode::Sqrt => {
                let arg = self.stack.pop()?;
                self.check_domain(OpCode::Sqrt, arg, arg >= 0.0 || arg.is_nan())?;
                self.stack.push(arg.sqrt())?;
            }
            OpCode::Ln => {
                let arg = self.stack.pop()?;
                self.check_domain(OpCode::Ln, arg, arg > 0.0 || arg.is_nan())?;
                self.stack.push(arg.ln())?;
            }

            OpCode::PopResult => {
                self.result = self.stack.pop()?;
            }
            OpCode::Halt => {
                self.state = ExecState::Halted;
            }
        }

        Ok(())
    }

    /// Pop right then left, push `op(left, right)`
    fn binary(&mut self, op: impl FnOnce(f64, f64) -> f64) -> VmResult<()> {
        let right = self.stack.pop()?;
        let left = self.stack.pop()?;
        self.stack.push(op(left, right))
    }

    fn check_domain(&self, op: OpCode, operand: f64, in_domain: bool) -> VmResult<()> {
        match self.config.domain_policy {
            DomainPolicy::Trap if !in_domain => Err(VmError::Domain { op, operand }),
            _ => Ok(()),
        }
    }
}
