//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackSymbol, MalformedFeedback};
pub(crate) use feedback::letter_index;
pub use word::{Word, WordError};
