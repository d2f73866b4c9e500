//! Multilayer perceptron with optional skip connections.
mod base;
mod config;
use crate::Activation;
pub use base::Mlp;
use candle_core::{Result, Tensor, D};
use candle_nn::{Linear, Module};
pub use config::MlpConfig;

/// Runs the layer stack on `in_tensor`.
///
/// Before each layer whose index is listed in `skip_connections`, the
/// original input is concatenated to the running value along the trailing
/// axis. The activation is applied after every layer, including the last.
fn mlp_forward(
    in_tensor: &Tensor,
    layers: &[Linear],
    skip_connections: &[i64],
    activation: &Activation,
) -> Result<Tensor> {
    let mut xs = in_tensor.clone();

    for (i, layer) in layers.iter().enumerate() {
        if skip_connections.contains(&(i as i64)) {
            xs = Tensor::cat(&[in_tensor, &xs], D::Minus1)?;
        }
        xs = layer.forward(&xs)?;
        xs = activation.forward(&xs)?;
    }

    Ok(xs)
}
