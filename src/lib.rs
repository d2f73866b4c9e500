//! Neural field modules implemented with [candle](https://crates.io/crates/candle-core).
pub mod error;
pub mod mlp;
pub mod model;
pub mod util;
use candle_core::Tensor;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Copy, Deserialize, Serialize, PartialEq)]
/// Element-wise activation function applied after linear units.
///
/// This enum is added because the activation functions in [`candle_nn`] have
/// no identity variant, while field modules treat "no activation" as a valid
/// strategy.
pub enum Activation {
    /// Identity.
    None,

    /// Rectified linear unit.
    ReLU,

    /// Sigmoid.
    Sigmoid,

    /// Hyperbolic tangent.
    Tanh,
}

impl Activation {
    /// Applies the activation function to a tensor.
    pub fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        match self {
            Self::None => Ok(xs.clone()),
            Self::ReLU => xs.relu(),
            Self::Sigmoid => candle_nn::ops::sigmoid(xs),
            Self::Tanh => xs.tanh(),
        }
    }
}
