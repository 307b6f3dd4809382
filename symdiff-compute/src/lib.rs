//! Symbolic differentiation of single-variable expressions.
//!
//! This crate builds expressions in `x` as trees, evaluates them with `f64` arithmetic, computes
//! their exact symbolic derivatives, and simplifies the results. See the [`symbolic`] module for
//! an overview.
//!
//! # Features
//!
//! - `funcs` (enabled by default): the [`funcs`] module, a library of named functions such as
//!   `tan` and `sec` defined in terms of the elementary node kinds.

pub mod error;
#[cfg(feature = "funcs")]
pub mod funcs;
pub mod symbolic;
