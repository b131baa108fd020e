//! Interpreter property tests
//!
//! 1. Push then pop-to-result returns the pushed value
//! 2. Binary ops apply `left op right` in push order
//! 3. Runs are deterministic across fresh and reused instances
//! 4. Overflow happens exactly one push past capacity
//! 5. Arbitrary bytes never panic and always terminate

use calcvm_core::{interpret, Interpreter, OpCode, VmConfig, VmError};
use proptest::prelude::*;

const PUSHI: u8 = OpCode::PushImm as u8;
const POP_RES: u8 = OpCode::PopResult as u8;
const DONE: u8 = OpCode::Halt as u8;

fn binary(a: u8, b: u8, op: OpCode) -> Vec<u8> {
    vec![PUSHI, a, PUSHI, b, op as u8, POP_RES, DONE]
}

proptest! {
    #[test]
    fn prop_push_pop_identity(x in any::<u8>()) {
        prop_assert_eq!(interpret(&[PUSHI, x, POP_RES, DONE]), Ok(f64::from(x)));
    }

    #[test]
    fn prop_sub_is_left_minus_right(a in any::<u8>(), b in any::<u8>()) {
        let expected = f64::from(a) - f64::from(b);
        prop_assert_eq!(interpret(&binary(a, b, OpCode::Sub)), Ok(expected));
    }

    #[test]
    fn prop_div_is_left_over_right(a in any::<u8>(), b in 1u8..=255) {
        let expected = f64::from(a) / f64::from(b);
        prop_assert_eq!(interpret(&binary(a, b, OpCode::Div)), Ok(expected));
    }

    #[test]
    fn prop_div_by_zero_always_fails(a in any::<u8>()) {
        let mut vm = Interpreter::default();
        prop_assert_eq!(vm.run(&binary(a, 0, OpCode::Div)), Err(VmError::DivisionByZero));
        prop_assert_eq!(vm.result(), 0.0);
    }

    #[test]
    fn prop_deterministic(a in any::<u8>(), b in any::<u8>(), op in 1u8..=5) {
        let op = OpCode::from_u8(op).unwrap();
        let code = binary(a, b, op);
        let fresh = interpret(&code);
        let mut vm = Interpreter::default();
        let _ = vm.run(&code);
        let reused = vm.run(&code);
        prop_assert_eq!(fresh, reused);
    }

    #[test]
    fn prop_overflow_one_past_capacity(capacity in 0usize..64) {
        let mut vm = Interpreter::new(VmConfig::new().with_stack_capacity(capacity));

        let mut code = Vec::new();
        for _ in 0..capacity {
            code.extend([PUSHI, 1]);
        }
        code.push(DONE);
        prop_assert_eq!(vm.run(&code), Ok(0.0));

        code.pop();
        code.extend([PUSHI, 1, DONE]);
        prop_assert_eq!(vm.run(&code), Err(VmError::StackOverflow { capacity }));
    }

    #[test]
    fn prop_arbitrary_bytes_terminate(bytes in proptest::collection::vec(any::<u8>(), 0..=512)) {
        let mut vm = Interpreter::default();
        let _ = vm.run(&bytes);
        // every dispatched instruction consumes at least one byte
        prop_assert!(vm.steps() <= bytes.len() as u64);
    }
}
