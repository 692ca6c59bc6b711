//! Fire Spread Core Library
//!
//! Evaluates the Rothermel (1972) surface fire rate-of-spread equation for a
//! homogeneous bed of dead fuel, in the model's imperial units (ft, lb, Btu, min).
//!
//! ## Quick start
//!
//! ```
//! use fire_spread_core::rate_of_spread;
//!
//! // σ = 2000 ft⁻¹, 0.2 lb/ft², 1 ft deep, M_x = 30%, M_f = 10%, calm and flat
//! let ros = rate_of_spread(2000.0, 0.2, 1.0, 0.3, 0.1, 0.0, 0.0).unwrap();
//! assert!(ros > 0.0);
//! ```
//!
//! The evaluator is pure and stateless. Inputs outside the domain of the
//! equation are rejected with [`RothermelError::InvalidInput`], and accepted
//! inputs whose result overflows to NaN or infinity are reported as
//! [`RothermelError::NonFiniteResult`]. A successful result is always finite.

// Core types: imperial units and fuel-bed descriptions
pub mod core_types;

pub mod error;

// Spread equation
pub mod physics;

// Parallel evaluation of independent inputs
pub mod batch;

// Re-export core types
pub use core_types::{
    FeetPerMinute, FuelBed, FuelConstants, SpreadConditions, DEFAULT_EFFECTIVE_MINERAL_CONTENT,
    DEFAULT_HEAT_CONTENT, DEFAULT_MINERAL_CONTENT, DEFAULT_PARTICLE_DENSITY,
};
pub use error::{Constraint, InputParameter, RothermelError};

// Re-export the evaluator
pub use batch::{evaluate_batch, SpreadInput};
pub use physics::{rate_of_spread, rate_of_spread_with, spread_components, SpreadComponents};
