//! Parallel evaluation of many independent spread inputs
//!
//! The spread equation is pure, so a batch is a plain parallel map. Results
//! keep the order of the inputs and each one is exactly what
//! [`rate_of_spread_with`] returns for that input.

use crate::core_types::fuel::{FuelBed, FuelConstants, SpreadConditions};
use crate::core_types::units::FeetPerMinute;
use crate::error::RothermelError;
use crate::physics::rothermel::rate_of_spread_with;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One complete parameter set for the spread equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadInput {
    pub fuel: FuelBed,
    #[serde(default)]
    pub constants: FuelConstants,
    pub conditions: SpreadConditions,
}

impl SpreadInput {
    /// Bundle a fuel bed and conditions with the default fuel constants.
    pub fn new(fuel: FuelBed, conditions: SpreadConditions) -> Self {
        SpreadInput {
            fuel,
            constants: FuelConstants::default(),
            conditions,
        }
    }

    /// Evaluate this input.
    ///
    /// # Errors
    /// Returns [`RothermelError::InvalidInput`] for the first input outside the
    /// domain of the equation.
    pub fn rate_of_spread(&self) -> Result<FeetPerMinute, RothermelError> {
        rate_of_spread_with(&self.fuel, &self.constants, &self.conditions)
    }
}

/// Evaluate every input in parallel, preserving order
pub fn evaluate_batch(inputs: &[SpreadInput]) -> Vec<Result<FeetPerMinute, RothermelError>> {
    let results: Vec<_> = inputs.par_iter().map(SpreadInput::rate_of_spread).collect();

    let rejected = results.iter().filter(|r| r.is_err()).count();
    debug!(
        evaluated = results.len(),
        rejected, "Evaluated spread batch"
    );

    results
}
