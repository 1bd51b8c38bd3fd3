//! # u-numkit
//!
//! Numeric and text utility primitives.
//!
//! Every function is a pure, synchronous transformation of its inputs.
//! Invalid or degenerate input yields `None` rather than a sentinel
//! value, so an error can never be mistaken for a real result.
//!
//! ## Modules
//!
//! - [`stats`] — Descriptive and inferential statistics, streaming moments
//! - [`regression`] — Covariance, correlation, least-squares line fitting
//! - [`special`] — Normal CDF and its inverse, log-gamma
//! - [`vector`] — Euclidean vector algebra on slices
//! - [`combinatorics`] — Overflow-checked factorials, permutations, combinations
//! - [`probability`] — Binomial and finite discrete distributions
//! - [`random`] — Seeded RNG, shuffling, weighted sampling
//! - [`text`] — String analysis, editing, ciphers, edit distances
//!
//! ## Design Philosophy
//!
//! - **Numerical stability first**: Welford/Pébay moment updates,
//!   Neumaier-compensated summation
//! - **No silent failure**: `Option` for numeric results, `Result` for
//!   distribution constructors
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod combinatorics;
pub mod probability;
pub mod random;
pub mod regression;
pub mod special;
pub mod stats;
pub mod text;
pub mod vector;
