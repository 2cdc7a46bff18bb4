use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::training_engine::{
    models::{Difficulty, Question, QuestionRequest, Topic},
    topics,
};

/// Generate one question for `topic` using the caller's RNG.
pub fn generate_for<R: Rng>(rng: &mut R, topic: Topic, difficulty: Difficulty) -> Question {
    // Each family matches every topic exhaustively and claims only its own;
    // probability is the one topic left.
    let question = topics::arithmetic::generate(rng, topic, difficulty)
        .or_else(|| topics::approximation::generate(rng, topic, difficulty))
        .unwrap_or_else(|| topics::probability::generate(rng));
    tracing::debug!(%topic, %difficulty, prompt = %question.prompt, "generated question");
    question
}

/// One-shot entry point: seeds its own RNG from the request.
pub fn generate_question(request: QuestionRequest) -> Question {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    let topic = request.topic.resolve(&mut rng);
    generate_for(&mut rng, topic, request.difficulty)
}
