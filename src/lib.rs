//! Graph coloring as a constraint satisfaction problem: backtracking searches
//! (plain, MRV/LCV with forward checking, AC-3 preprocessing) and greedy baselines.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]


/// coloring instance, solutions and checker
pub mod color;

/// error types
pub mod error;

/// read/write the `colors = k` edge-list format and `node:color` solutions
pub mod input;

/// search strategies for the graph coloring problem
pub mod search;

/// per-solve configuration
pub mod config;

/// random instance generators
pub mod generator;

/// helper and utility methods for executables
pub mod util;
