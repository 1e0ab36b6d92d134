use rand::Rng;
use tracing::debug;

use crate::training_engine::{
    digits::{generate_number, pick_digits, DigitCount},
    models::{Exercise, Operation},
};

/// Generate one exercise with operand lengths drawn from `min..=max`.
///
/// Draw order is fixed (both digit counts, both operands, then the operation)
/// so a seeded RNG always yields the same sequence.
pub fn generate_exercise<R: Rng>(
    rng: &mut R,
    min: DigitCount,
    max: DigitCount,
) -> Exercise {
    let first_digits = pick_digits(rng, min, max);
    let second_digits = pick_digits(rng, min, max);

    let first = generate_number(rng, first_digits);
    let second = generate_number(rng, second_digits);

    let operation = if rng.gen_bool(0.5) {
        Operation::Addition
    } else {
        Operation::Subtraction
    };

    let exercise = Exercise::from_operands(first, second, operation);
    debug!(
        %exercise,
        first_digits = first_digits.get(),
        second_digits = second_digits.get(),
        "generated exercise"
    );
    exercise
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn answers_follow_the_operation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let ex = generate_exercise(&mut rng, DigitCount::ONE, DigitCount::THREE);
            let (a, b) = (ex.first_operand() as i64, ex.second_operand() as i64);
            match ex.operation() {
                Operation::Addition => assert_eq!(ex.expected_answer(), a + b),
                Operation::Subtraction => {
                    assert!(a >= b, "{ex} has first < second");
                    assert_eq!(ex.expected_answer(), a - b);
                    assert!(ex.expected_answer() >= 0);
                }
            }
        }
    }

    #[test]
    fn operand_lengths_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1_000 {
            let ex = generate_exercise(&mut rng, DigitCount::TWO, DigitCount::THREE);
            for n in [ex.first_operand(), ex.second_operand()] {
                assert!((10..=999).contains(&n), "{n} out of 2..=3 digit range in {ex}");
            }
        }
    }

    #[test]
    fn operand_lengths_are_drawn_independently() {
        let mut rng = StdRng::seed_from_u64(9);
        let mixed = (0..500)
            .map(|_| generate_exercise(&mut rng, DigitCount::ONE, DigitCount::THREE))
            .any(|ex| {
                let len = |n: u32| n.to_string().len();
                len(ex.first_operand()) != len(ex.second_operand())
            });
        assert!(mixed, "operand digit counts never differed");
    }

    #[test]
    fn both_operations_appear() {
        let mut rng = StdRng::seed_from_u64(1);
        let ops: Vec<Operation> = (0..200)
            .map(|_| generate_exercise(&mut rng, DigitCount::ONE, DigitCount::ONE).operation())
            .collect();
        assert!(ops.contains(&Operation::Addition));
        assert!(ops.contains(&Operation::Subtraction));
    }
}
