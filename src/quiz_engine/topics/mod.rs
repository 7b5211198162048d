//! Topic generators.
//!
//! Every topic exposes the same shape of entry point:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, ...) -> <Topic>Question
//! ```
//!
//! Runs call these directly with their own RNG; one-off requests go through
//! `generator.rs`.

/// AR- addition / subtraction with near-miss distractors
pub mod arithmetic;
/// LT- find / match / start letter questions
pub mod letters;
