//! Property-based tests for the machine.

#[cfg(test)]
mod tests {
    use crate::{program::*, Flags, Instruction, Machine, Program, Word};
    use proptest::prelude::*;

    const NAMES: [&str; 4] = ["a", "b", "c", "d"];

    /// Either a declaration of one of `NAMES` or an increment/move touching one.
    fn instruction() -> impl Strategy<Value = Instruction> {
        prop_oneof![
            (0..NAMES.len(), -50i64..50).prop_map(|(n, v)| data(NAMES[n], v).unwrap()),
            (0..NAMES.len()).prop_map(|n| inc(mem(lea(NAMES[n]).unwrap()))),
            (0..NAMES.len(), 0i64..8).prop_map(|(n, v)| mov(mem(num(v)), mem(lea(NAMES[n]).unwrap()))),
            (0i64..8, -5i64..5).prop_map(|(a, v)| sub(mem(num(a)), num(v))),
        ]
    }

    proptest! {
        #[test]
        fn prop_flags_follow_result(a in any::<Word>(), b in any::<Word>(), subtract in any::<bool>()) {
            let op = if subtract { sub(mem(num(1)), num(b)) } else { add(mem(num(1)), num(b)) };
            let mut machine = Machine::new(4).unwrap();
            let program = crate::program![mov(mem(num(1)), num(a)), op, mov(mem(num(2)), num(0))];
            machine.boot(&program).unwrap();

            let r = machine.memory().cells()[1];
            let expected = if subtract { a.wrapping_sub(b) } else { a.wrapping_add(b) };
            prop_assert_eq!(r, expected);
            prop_assert_eq!(machine.memory().flags(), Flags { zero: r == 0, sign: r < 0 });
        }

        #[test]
        fn prop_declarations_hoisted(program in prop::collection::vec(instruction(), 0..24)) {
            let program = Program::new(program);
            let hoisted: Program = program
                .declarations()
                .chain(program.operations())
                .cloned()
                .collect();

            let mut in_order = Machine::new(8).unwrap();
            let mut reordered = Machine::new(8).unwrap();
            let r1 = in_order.boot(&program);
            let r2 = reordered.boot(&hoisted);
            prop_assert_eq!(r1, r2);
            prop_assert_eq!(in_order.dump(), reordered.dump());
        }

        #[test]
        fn prop_indirect_round_trip(v in any::<Word>(), slot in 0usize..3) {
            let name = NAMES[slot];
            let mut machine = Machine::new(5).unwrap();
            let mut instructions = vec![];
            for declared in &NAMES[..=slot] {
                instructions.push(data(declared, 0).unwrap());
            }
            instructions.push(mov(mem(lea(name).unwrap()), num(v)));
            instructions.push(mov(mem(num(4)), mem(lea(name).unwrap())));
            machine.boot(&Program::new(instructions)).unwrap();
            prop_assert_eq!(machine.memory().cells()[4], v);
        }
    }
}
