use rand::Rng;
use tracing::debug;

use crate::quiz_engine::{
    distractors::build_choice_set,
    helpers::{coin, index_of, question_id},
    models::{ArithmeticQuestion, DifficultyConfig, Operator, CHOICE_COUNT},
};

pub const PREFIX: &str = "AR";

/// One addition or subtraction problem whose operands and result all lie in
/// `[0, cfg.max_operand]`.
///
/// Choices come from the same range, widened to `[0, 3]` when `max_operand`
/// is below 3 so there are always four of them.
pub fn generate<R: Rng>(rng: &mut R, cfg: &DifficultyConfig) -> ArithmeticQuestion {
    let question_id = question_id(rng, PREFIX);
    let max = cfg.max_operand.max(0);

    let operator = if coin(rng) { Operator::Add } else { Operator::Subtract };
    let operand_a = rng.gen_range(0..=max);
    let operand_b = match operator {
        // a + b <= max
        Operator::Add      => rng.gen_range(0..=max - operand_a),
        // a - b >= 0
        Operator::Subtract => rng.gen_range(0..=operand_a),
    };
    let correct_value = operator.apply(operand_a, operand_b);

    let choice_max = max.max(CHOICE_COUNT as i32 - 1);
    let choices = build_choice_set(rng, correct_value, 0..=choice_max, CHOICE_COUNT);
    let correct_index = index_of(&choices, &correct_value);

    debug!(%question_id, operand_a, %operator, operand_b, correct_value, ?choices, "arithmetic question");

    ArithmeticQuestion {
        question_id,
        operand_a,
        operand_b,
        operator,
        correct_value,
        choices,
        correct_index,
    }
}
