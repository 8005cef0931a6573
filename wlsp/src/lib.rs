//! Level assignment engine for the weighted strip packing problem.
//!
//! Items are assigned to horizontal levels of a strip with fixed width. The cost of a solution
//! is the sum over all items of their weight multiplied by the base height of their level.

/// Entities to model the problem: rectangles, instances and solutions
pub mod entities;

/// Cost and feasibility of solutions
pub mod eval;

/// Constructive heuristics building solutions from a visitation order
pub mod heuristics;

/// Dynamic capacity index used by the first-fit heuristic
pub mod index;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// Random-key encoding of solutions, used by decoder-based metaheuristics
pub mod random_key;

/// Helper functions which do not belong to any specific module
pub mod util;
