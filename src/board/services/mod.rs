//! Application services for the issue board.

mod board;
mod gate;

pub use board::{DuplicateDecision, IssueBoard, SubmitOutcome};
pub use gate::{GateAction, SessionGate, SessionSubscription, SharedBoard};
