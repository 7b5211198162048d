use rand::{rngs::StdRng, SeedableRng};

use crate::quiz_engine::{
    models::{Question, QuestionRequest, QuizTopic},
    topics,
};

/// RNG for a request: seeded when a seed is given, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Core dispatch: one question outside of any run.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng = make_rng(request.rng_seed);

    match request.topic {
        QuizTopic::Arithmetic(tier) =>
            Question::Arithmetic(topics::arithmetic::generate(&mut rng, &tier.config())),

        QuizTopic::Letters =>
            Question::Letter(topics::letters::generate(&mut rng)),
    }
}
