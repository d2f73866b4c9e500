//! Interface of neural network modules used in field models.
use anyhow::Result;
use candle_nn::VarBuilder;

/// Neural network module not owning its [`VarMap`] internally.
///
/// Learnable parameters are registered through the [`VarBuilder`] passed to
/// [`FieldModule::build`], so the enclosing field model owns them in its
/// [`VarMap`] and collects them directly for gradient-based optimization.
///
/// [`VarMap`]: https://docs.rs/candle-nn/0.8.4/candle_nn/var_map/struct.VarMap.html
pub trait FieldModule: Sized {
    /// Configuration from which [`FieldModule`] is constructed.
    type Config;

    /// Input of the [`FieldModule`].
    type Input;

    /// Output of the [`FieldModule`].
    type Output;

    /// Builds [`FieldModule`] with [`VarBuilder`] and [`FieldModule::Config`].
    ///
    /// [`VarBuilder`]: https://docs.rs/candle-nn/0.8.4/candle_nn/var_builder/type.VarBuilder.html
    fn build(vb: VarBuilder, config: Self::Config) -> Result<Self>;

    /// A generalized forward function.
    fn forward(&self, input: &Self::Input) -> candle_core::Result<Self::Output>;
}

/// Neural network module not owning its [`VarMap`] internally.
///
/// The difference from [`FieldModule`] is that this trait takes two inputs,
/// concatenated or otherwise combined by the implementation.
///
/// [`VarMap`]: https://docs.rs/candle-nn/0.8.4/candle_nn/var_map/struct.VarMap.html
pub trait FieldModule2: Sized {
    /// Configuration from which [`FieldModule2`] is constructed.
    type Config;

    /// Input of the [`FieldModule2`].
    type Input1;

    /// Input of the [`FieldModule2`].
    type Input2;

    /// Output of the [`FieldModule2`].
    type Output;

    /// Builds [`FieldModule2`].
    fn build(vb: VarBuilder, config: Self::Config) -> Result<Self>;

    /// A generalized forward function.
    fn forward(&self, input1: &Self::Input1, input2: &Self::Input2)
        -> candle_core::Result<Self::Output>;
}
