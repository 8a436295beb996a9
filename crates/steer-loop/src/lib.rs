//! # steer-loop
//!
//! The goal-driven feedback loop. Compares a rolling history of observed
//! actions against a target goal state, derives per-metric analytics, and
//! produces per-action suggestions nudging metrics toward the goal.
//!
//! [`FeedbackLoop`] owns its history and baselines exclusively (one instance
//! per goal, no ambient singletons) and writes them through a pluggable
//! persistence backend after every mutation. [`FeedbackWorker`] wraps a loop
//! in a cooperative polling task with capped exponential backoff.

pub mod loop_engine;
pub mod strategy;
pub mod worker;

pub use loop_engine::{FeedbackLoop, LoopState};
pub use strategy::{build_strategy, Personality, PersonalityStrategy, SimpleStrategy};
pub use worker::FeedbackWorker;
