//! Board invariants, re-checked after every applied move in debug builds.
//!
//! Each invariant is a zero-sized type so a whole set can be named as a
//! tuple type and checked without allocating anything but the report.

/// A property every reachable state satisfies.
pub trait Invariant<S> {
    /// True when the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// An invariant that failed, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Statement of the property that failed.
    pub description: &'static str,
}

/// Invariants checked together. Implemented for tuples of two to four.
pub trait InvariantSet<S> {
    /// Every failed invariant in tuple order, or `Ok` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! invariant_tuple {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let failed: Vec<InvariantViolation> = [$(($inv::holds(state), $inv::description())),+]
                    .into_iter()
                    .filter_map(|(holds, description)| {
                        (!holds).then_some(InvariantViolation { description })
                    })
                    .collect();
                if failed.is_empty() { Ok(()) } else { Err(failed) }
            }
        }
    };
}

invariant_tuple!(A, B);
invariant_tuple!(A, B, C);
invariant_tuple!(A, B, C, D);

pub mod alternating_turn;
pub mod mark_balance;
pub mod monotonic_board;
pub mod single_winner;

pub use alternating_turn::AlternatingTurnInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MarkBalanceInvariant,
    AlternatingTurnInvariant,
    MonotonicBoardInvariant,
    SingleWinnerInvariant,
);
