//! Geometric predicates with explicit tolerance.
//!
//! No hidden epsilons: callers pass the tolerance they want.

mod predicates;

pub use predicates::{all_collinear, orient2d, Orientation};
