//! Adversarial search for the computer opponent.
//!
//! Scores are always from the computer's point of view: the computer
//! maximises, the human minimises. Every function here is pure and takes
//! a [`Grid`](super::Grid) snapshot, so it is safe to call from any thread.

pub mod minimax;
pub mod selector;

pub use minimax::{score, score_exhaustive, DRAW, LOSS, WIN};
pub use selector::{pick_move, ranked_moves};
