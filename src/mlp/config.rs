use crate::{util::OutDim, Activation};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
/// Configuration of [`Mlp`](super::Mlp).
pub struct MlpConfig {
    pub(super) in_dim: i64,
    pub(super) num_layers: i64,
    pub(super) layer_width: i64,
    pub(super) out_dim: Option<i64>,
    pub(super) skip_connections: Vec<i64>,
    pub(super) activation: Activation,
    pub(super) out_activation: Activation,
}

impl MlpConfig {
    /// Creates configuration of MLP.
    ///
    /// The output dimension defaults to `layer_width`, the activation to
    /// [`Activation::ReLU`], and there are no skip connections.
    pub fn new(in_dim: i64, num_layers: i64, layer_width: i64) -> Self {
        Self {
            in_dim,
            num_layers,
            layer_width,
            out_dim: None,
            skip_connections: vec![],
            activation: Activation::ReLU,
            out_activation: Activation::None,
        }
    }

    /// Sets the output dimension.
    pub fn out_dim(mut self, v: i64) -> Self {
        self.out_dim = Some(v);
        self
    }

    /// Sets the layer indices at which the input is reinjected.
    pub fn skip_connections(mut self, v: Vec<i64>) -> Self {
        self.skip_connections = v;
        self
    }

    /// Sets the activation function applied after every linear unit.
    ///
    /// [`Activation::None`] disables activation everywhere.
    pub fn activation(mut self, v: Activation) -> Self {
        self.activation = v;
        self
    }

    /// Sets the output activation function.
    ///
    /// Stored and serialized, but currently not applied in the forward pass
    /// of [`Mlp`](super::Mlp).
    pub fn out_activation(mut self, v: Activation) -> Self {
        self.out_activation = v;
        self
    }

    /// Constructs [`MlpConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`MlpConfig`] as YAML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

impl OutDim for MlpConfig {
    fn get_out_dim(&self) -> i64 {
        self.out_dim.unwrap_or(self.layer_width)
    }

    fn set_out_dim(&mut self, out_dim: i64) {
        self.out_dim = Some(out_dim);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_mlp_config() -> Result<()> {
        let config = MlpConfig::new(3, 8, 256)
            .out_dim(4)
            .skip_connections(vec![4])
            .out_activation(Activation::Sigmoid);

        let dir = TempDir::new("mlp_config")?;
        let path = dir.path().join("mlp_config.yaml");

        config.save(&path)?;
        let config_ = MlpConfig::load(&path)?;
        assert_eq!(config, config_);

        Ok(())
    }

    #[test]
    fn test_out_dim_defaults_to_layer_width() {
        let config = MlpConfig::new(3, 2, 64);
        assert_eq!(config.get_out_dim(), 64);

        let mut config = config;
        config.set_out_dim(7);
        assert_eq!(config.get_out_dim(), 7);
    }
}
