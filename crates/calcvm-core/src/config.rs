//! calcvm Configuration
//!
//! Runtime limits and policies for the interpreter.
//! Configuration specifies constraints only; enforcement is handled by the VM.

/// Default operand stack capacity.
pub const DEFAULT_STACK_CAPACITY: usize = 256;

/// How `Sqrt`, `Ln` and `Pow` treat arguments outside their real domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DomainPolicy {
    /// Let NaN and infinities flow through the stack.
    #[default]
    Propagate,

    /// Abort the run with `VmError::Domain`.
    Trap,
}

/// VM Configuration
#[derive(Debug, Clone)]
pub struct VmConfig {
    /// Maximum operand stack depth
    pub stack_capacity: usize,

    /// Handling of math domain violations
    pub domain_policy: DomainPolicy,
}

impl Default for VmConfig {
    fn default() -> Self {
        VmConfig {
            stack_capacity: DEFAULT_STACK_CAPACITY,
            domain_policy: DomainPolicy::Propagate,
        }
    }
}

impl VmConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum operand stack depth
    pub fn with_stack_capacity(mut self, stack_capacity: usize) -> Self {
        self.stack_capacity = stack_capacity;
        self
    }

    /// Set the handling of math domain violations
    pub fn with_domain_policy(mut self, domain_policy: DomainPolicy) -> Self {
        self.domain_policy = domain_policy;
        self
    }
}
