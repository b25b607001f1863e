//! Array converter configuration.

/// Which container values a conversion function accepts as input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputShapePolicy {
    /// Accept any array or list value, whatever the declared input shape.
    /// Elements are read through the shared slice view either way.
    #[default]
    AnySequence,
    /// Accept only values whose variant matches the declared input shape.
    Declared,
}

/// Configuration for [`ArrayConverter`](crate::ArrayConverter) construction.
///
/// Fixed at construction; the built conversion functions capture a copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Input acceptance rule for both directions.
    ///
    /// Default: [`InputShapePolicy::AnySequence`].
    pub input_shape: InputShapePolicy,
}

impl ConverterConfig {
    /// Default input acceptance rule.
    pub const DEFAULT_INPUT_SHAPE: InputShapePolicy = InputShapePolicy::AnySequence;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            input_shape: Self::DEFAULT_INPUT_SHAPE,
        }
    }

    /// Require input values to match their declared shape.
    pub fn strict() -> Self {
        Self {
            input_shape: InputShapePolicy::Declared,
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}
