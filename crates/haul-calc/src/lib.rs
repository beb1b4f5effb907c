//! # Haul Calc
//!
//! 行程規劃計算引擎

pub mod greedy;
pub mod planner;
pub mod state;

// Re-export 主要類型
pub use greedy::GreedySimulator;
pub use planner::TripPlanner;
pub use state::{eligible_states, ProductState, TripCandidate, TripKind};
