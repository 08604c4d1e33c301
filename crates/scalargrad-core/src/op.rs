// Op - named operators for graph nodes
//
// The autodiff engine records, for every node it creates, WHICH operator
// produced it. On the backward pass it needs the matching gradient rule for
// that operator. These enums are that record: a closed, Copy-able set of
// names, each with a forward evaluation and a backward rule.
//
// Example: c = sigmoid(a)
//   forward:  c.value = UnaryOp::Sigmoid.forward(a.value, &cfg)?
//   backward: grad_a += UnaryOp::Sigmoid.backward(a.value, grad_c)?
//
// Unary forward/backward return Result because Inv (and Log's backward
// rule) are undefined at zero. Binary operators are total.

use std::fmt;

use crate::backprop;
use crate::config::OpsConfig;
use crate::error::Result;
use crate::ops;

/// Element-wise unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Id,
    Neg,
    Sigmoid,
    Relu,
    Log,
    Exp,
    Inv,
}

/// Element-wise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Mul,
    Lt,
    Eq,
    Max,
}

impl UnaryOp {
    /// Evaluate the operator at `x`.
    pub fn forward(self, x: f64, cfg: &OpsConfig) -> Result<f64> {
        Ok(match self {
            UnaryOp::Id => ops::id(x),
            UnaryOp::Neg => ops::neg(x),
            UnaryOp::Sigmoid => ops::sigmoid(x),
            UnaryOp::Relu => ops::relu(x),
            UnaryOp::Log => ops::log_with_eps(x, cfg.log_eps),
            UnaryOp::Exp => ops::exp(x),
            UnaryOp::Inv => ops::inv(x)?,
        })
    }

    /// Compute `d * f'(x)` for this operator.
    ///
    /// `Log` differentiates plain ln, so no `OpsConfig` is involved.
    pub fn backward(self, x: f64, d: f64) -> Result<f64> {
        Ok(match self {
            UnaryOp::Id => backprop::id_back(x, d),
            UnaryOp::Neg => backprop::neg_back(x, d),
            UnaryOp::Sigmoid => backprop::sigmoid_back(x, d),
            UnaryOp::Relu => backprop::relu_back(x, d),
            UnaryOp::Log => backprop::log_back(x, d)?,
            UnaryOp::Exp => backprop::exp_back(x, d),
            UnaryOp::Inv => backprop::inv_back(x, d)?,
        })
    }

    /// Whether this operator can signal `Error::Domain`.
    pub fn is_partial(self) -> bool {
        matches!(self, UnaryOp::Log | UnaryOp::Inv)
    }
}

impl BinaryOp {
    /// Evaluate the operator at `(x, y)`.
    pub fn forward(self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => ops::add(x, y),
            BinaryOp::Mul => ops::mul(x, y),
            BinaryOp::Lt => ops::lt(x, y),
            BinaryOp::Eq => ops::eq(x, y),
            BinaryOp::Max => ops::max(x, y),
        }
    }

    /// Return the gradient contributions `(grad_x, grad_y)` for upstream `d`.
    ///
    /// Indicator operators are piecewise constant, so both contributions are
    /// zero. `Max` routes `d` to whichever argument the forward pass
    /// returned, including the tie rule (ties go to `y`).
    pub fn backward(self, x: f64, y: f64, d: f64) -> (f64, f64) {
        match self {
            BinaryOp::Add => backprop::add_back(x, y, d),
            BinaryOp::Mul => backprop::mul_back(x, y, d),
            BinaryOp::Lt | BinaryOp::Eq => (0.0, 0.0),
            BinaryOp::Max => {
                if x > y {
                    (d, 0.0)
                } else {
                    (0.0, d)
                }
            }
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::Add => "add",
            BinaryOp::Mul => "mul",
            BinaryOp::Lt => "lt",
            BinaryOp::Eq => "eq",
            BinaryOp::Max => "max",
        };
        write!(f, "{}", s)
    }
}
