use std::fmt;

/// Inputs of the spread equation, named as in the `rate_of_spread` signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputParameter {
    SaVolRatio,
    FuelLoad,
    BedDepth,
    DeadExtinctionMoisture,
    MoistureContent,
    Wind,
    TanSlope,
    HeatContent,
    MineralContent,
    EffectiveMineralContent,
    ParticleDensity,
}

impl InputParameter {
    /// Parameter name as it appears in the function signature.
    pub fn name(self) -> &'static str {
        match self {
            InputParameter::SaVolRatio => "sa_vol_ratio",
            InputParameter::FuelLoad => "fuel_load",
            InputParameter::BedDepth => "bed_depth",
            InputParameter::DeadExtinctionMoisture => "dead_extinction_moisture",
            InputParameter::MoistureContent => "moisture_content",
            InputParameter::Wind => "wind",
            InputParameter::TanSlope => "tan_slope",
            InputParameter::HeatContent => "heat_content",
            InputParameter::MineralContent => "mineral_content",
            InputParameter::EffectiveMineralContent => "effective_mineral_content",
            InputParameter::ParticleDensity => "particle_density",
        }
    }
}

impl fmt::Display for InputParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Constraint an input failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Finite and strictly greater than zero (divisors and power bases)
    Positive,
    /// Finite and zero or greater (fractional power bases)
    NonNegative,
    /// Any finite value
    Finite,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Positive => f.write_str("must be finite and positive"),
            Constraint::NonNegative => f.write_str("must be finite and non-negative"),
            Constraint::Finite => f.write_str("must be finite"),
        }
    }
}

/// Errors returned by the spread evaluator.
///
/// The evaluator fails fast on inputs the equation is undefined for, and
/// never hands NaN or infinity back to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RothermelError {
    /// An input is outside the domain of the spread equation.
    InvalidInput {
        parameter: InputParameter,
        value: f64,
        constraint: Constraint,
    },
    /// Every input passed validation but the equation overflowed or
    /// underflowed to NaN or infinity (e.g. σ so small that ε and Γ' both
    /// underflow to zero).
    NonFiniteResult { rate_of_spread: f64 },
}

impl RothermelError {
    /// The offending parameter, if the error was caused by a single input.
    pub fn parameter(&self) -> Option<InputParameter> {
        match self {
            RothermelError::InvalidInput { parameter, .. } => Some(*parameter),
            RothermelError::NonFiniteResult { .. } => None,
        }
    }
}

impl fmt::Display for RothermelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RothermelError::InvalidInput {
                parameter,
                value,
                constraint,
            } => write!(f, "Invalid input {parameter}: {constraint}, got {value}"),
            RothermelError::NonFiniteResult { rate_of_spread } => write!(
                f,
                "Rate of spread is not finite for the given inputs, got {rate_of_spread}"
            ),
        }
    }
}

impl std::error::Error for RothermelError {}

/// Check one input against its constraint.
pub(crate) fn check(
    parameter: InputParameter,
    value: f64,
    constraint: Constraint,
) -> Result<(), RothermelError> {
    let ok = value.is_finite()
        && match constraint {
            Constraint::Positive => value > 0.0,
            Constraint::NonNegative => value >= 0.0,
            Constraint::Finite => true,
        };

    if ok {
        Ok(())
    } else {
        Err(RothermelError::InvalidInput {
            parameter,
            value,
            constraint,
        })
    }
}
