//! Physics modules: the Rothermel spread equation

pub mod rothermel;

pub use rothermel::{
    rate_of_spread, rate_of_spread_with, spread_components, validate, SpreadComponents,
    WindCoefficients,
};

// ============================================================================
// PUBLIC RE-EXPORTS FOR VALIDATION TESTING
// ============================================================================
// The per-term helpers are exported so integration tests can check each
// sub-model against published values independently of the full equation.

/// Public re-exports of the individual Rothermel terms
pub mod rothermel_validation {
    pub use super::rothermel::{
        heating_number, max_reaction_velocity, mineral_damping, moisture_damping,
        optimal_packing_ratio, optimal_reaction_velocity, preignition_energy, propagating_flux,
        reaction_velocity_exponent, relative_moisture, slope_factor, wind_coefficients,
        wind_factor,
    };
}
