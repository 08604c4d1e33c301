//! # scalargrad-core
//!
//! Scalar operators, backward rules, and sequence combinators for a
//! reverse-mode autodiff engine.
//!
//! This crate provides:
//! - [`ops`]: elementary forward operators (`mul`, `sigmoid`, `log`, `inv`, ...)
//! - [`backprop`]: vector-Jacobian products `d * f'(x)` for those operators
//! - [`UnaryOp`] / [`BinaryOp`]: named operators with forward + backward dispatch
//! - [`combinators`]: `map`, `zip_with`, `reduce` and the derived `sum` / `prod`
//! - [`OpsConfig`]: the numeric constants (`EPS`, close tolerance) as explicit config
//! - [`Error`]: the single `Domain` failure raised by the reciprocal family
// - No graph, tape, or gradient accumulation lives here; that is the engine's job.
// - Everything is pure and thread-safe: no globals, no interior mutability.

pub mod backprop;
pub mod combinators;
pub mod config;
pub mod error;
pub mod op;
pub mod ops;

pub use backprop::{
    add_back, exp_back, id_back, inv_back, log_back, mul_back, neg_back, relu_back, sigmoid_back,
};
pub use combinators::{add_lists, map, neg_list, prod, reduce, sum, try_map, zip_with};
pub use config::{OpsConfig, CLOSE_TOLERANCE, EPS};
pub use error::{Error, Result};
pub use op::{BinaryOp, UnaryOp};
