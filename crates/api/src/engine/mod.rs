//! Stateful services held in [`AppState`](crate::state::AppState).
//!
//! - [`dialogue`] -- branching-dialogue session engine.

pub mod dialogue;

pub use dialogue::DialogueEngine;
