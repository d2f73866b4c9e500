use super::{mlp_forward, MlpConfig};
use crate::error::FieldError;
use crate::model::{FieldModule, FieldModule2};
use anyhow::Result;
use candle_core::{Device, Tensor, D};
use candle_nn::{linear, Linear, VarBuilder};
use log::trace;

/// Returns vector of linear modules from [`MlpConfig`].
///
/// The first unit maps `in_dim` to `layer_width`, units at skip indices map
/// `layer_width + in_dim` to `layer_width`, and the final unit maps
/// `layer_width` to the output dimension. With a single layer, one unit maps
/// `in_dim` directly to the output dimension.
fn create_linear_layers(prefix: &str, vs: VarBuilder, config: &MlpConfig) -> Result<Vec<Linear>> {
    if config.in_dim <= 0 {
        return Err(FieldError::InvalidMlpConfig(format!(
            "in_dim must be positive, got {}",
            config.in_dim
        ))
        .into());
    }
    if config.skip_connections.contains(&0) {
        return Err(FieldError::InvalidMlpConfig(
            "Skip connection at layer 0 doesn't make sense.".into(),
        )
        .into());
    }

    let out_dim = config.out_dim.unwrap_or(config.layer_width);
    let mut in_out_pairs: Vec<(i64, i64)> = vec![];

    if config.num_layers == 1 {
        in_out_pairs.push((config.in_dim, out_dim));
    } else {
        for i in 0..(config.num_layers - 1) {
            if i == 0 {
                in_out_pairs.push((config.in_dim, config.layer_width));
            } else if config.skip_connections.contains(&i) {
                in_out_pairs.push((config.layer_width + config.in_dim, config.layer_width));
            } else {
                in_out_pairs.push((config.layer_width, config.layer_width));
            }
        }
        in_out_pairs.push((config.layer_width, out_dim));
    }

    let vs = vs.pp(prefix);

    Ok(in_out_pairs
        .iter()
        .enumerate()
        .map(|(i, &(in_dim, out_dim))| linear(in_dim as _, out_dim as _, vs.pp(format!("ln{}", i))))
        .collect::<candle_core::Result<Vec<_>>>()?)
}

/// Multilayer perceptron with configurable activation and skip connections.
///
/// The layer stack is derived once from [`MlpConfig`] at build time and is
/// read-only afterwards.
#[derive(Debug)]
pub struct Mlp {
    config: MlpConfig,
    device: Device,
    layers: Vec<Linear>,
}

fn _build(vs: VarBuilder, config: MlpConfig) -> Result<Mlp> {
    let device = vs.device().clone();
    let layers = create_linear_layers("mlp", vs, &config)?;
    trace!("built mlp with {} linear layers", layers.len());

    Ok(Mlp {
        config,
        device,
        layers,
    })
}

impl Mlp {
    /// Processes a batched input whose trailing dimension is `in_dim`.
    ///
    /// Leading dimensions are preserved; the trailing dimension of the output
    /// is the output dimension of the network. Shape errors from the
    /// underlying tensor operations propagate unchanged.
    pub fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        let xs = xs.to_device(&self.device)?;
        mlp_forward(
            &xs,
            &self.layers,
            &self.config.skip_connections,
            &self.config.activation,
        )
    }

    /// Returns the output dimension of the network.
    pub fn out_dim(&self) -> i64 {
        self.config.out_dim.unwrap_or(self.config.layer_width)
    }
}

impl FieldModule for Mlp {
    type Config = MlpConfig;
    type Input = Tensor;
    type Output = Tensor;

    fn build(vs: VarBuilder, config: Self::Config) -> Result<Self> {
        _build(vs, config)
    }

    fn forward(&self, xs: &Self::Input) -> candle_core::Result<Tensor> {
        self.forward(xs)
    }
}

impl FieldModule2 for Mlp {
    type Config = MlpConfig;
    type Input1 = Tensor;
    type Input2 = Tensor;
    type Output = Tensor;

    fn build(vs: VarBuilder, config: Self::Config) -> Result<Self> {
        _build(vs, config)
    }

    fn forward(
        &self,
        input1: &Self::Input1,
        input2: &Self::Input2,
    ) -> candle_core::Result<Tensor> {
        let input1 = input1.to_device(&self.device)?;
        let input2 = input2.to_device(&self.device)?;
        let input = Tensor::cat(&[input1, input2], D::Minus1)?;
        self.forward(&input)
    }
}
