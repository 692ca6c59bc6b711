//! C ABI for the Rothermel spread evaluator
//!
//! Every function returns a [`FireSpreadErrorCode`]; on failure the message is
//! available from [`fire_spread_get_last_error`] on the same thread.

mod error;
mod helpers;

pub use error::{fire_spread_get_last_error, fire_spread_get_last_error_code, FireSpreadErrorCode};

use error::DefaultFireSpreadError;
use fire_spread_core::{
    spread_components, FuelBed, FuelConstants, SpreadComponents, SpreadConditions,
    DEFAULT_EFFECTIVE_MINERAL_CONTENT, DEFAULT_HEAT_CONTENT, DEFAULT_MINERAL_CONTENT,
    DEFAULT_PARTICLE_DENSITY,
};
use helpers::{track_error, track_result};

/// C-compatible input of the spread equation (imperial units)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireSpreadInput {
    /// Surface-area-to-volume ratio (ft⁻¹)
    pub sa_vol_ratio: f64,
    /// Oven-dry fuel load (lb/ft²)
    pub fuel_load: f64,
    /// Fuel bed depth (ft)
    pub bed_depth: f64,
    /// Dead fuel moisture of extinction (fraction)
    pub dead_extinction_moisture: f64,
    /// Fuel moisture content (fraction)
    pub moisture_content: f64,
    /// Midflame wind speed (ft/min)
    pub wind: f64,
    /// Tangent of the maximum slope angle
    pub tan_slope: f64,
    /// Low heat content (Btu/lb), default 8000
    pub heat_content: f64,
    /// Total mineral content (fraction), default 0.0555
    pub mineral_content: f64,
    /// Effective mineral content (fraction), default 0.010
    pub effective_mineral_content: f64,
    /// Oven-dry particle density (lb/ft³), default 32
    pub particle_density: f64,
}

impl FireSpreadInput {
    fn split(&self) -> (FuelBed, FuelConstants, SpreadConditions) {
        let fuel = FuelBed::new(
            self.sa_vol_ratio,
            self.fuel_load,
            self.bed_depth,
            self.dead_extinction_moisture,
        );
        let constants = FuelConstants {
            heat_content: self.heat_content.into(),
            mineral_content: self.mineral_content.into(),
            effective_mineral_content: self.effective_mineral_content.into(),
            particle_density: self.particle_density.into(),
        };
        let conditions = SpreadConditions::new(self.moisture_content, self.wind, self.tan_slope);

        (fuel, constants, conditions)
    }

    fn evaluate(&self) -> Result<SpreadComponents, DefaultFireSpreadError> {
        let (fuel, constants, conditions) = self.split();
        spread_components(&fuel, &constants, &conditions).map_err(DefaultFireSpreadError::from)
    }
}

/// C-compatible breakdown of one evaluation
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FireSpreadComponents {
    pub preignition_energy: f64,
    pub heating_number: f64,
    pub bulk_density: f64,
    pub packing_ratio: f64,
    pub optimal_packing_ratio: f64,
    pub slope_factor: f64,
    pub wind_factor: f64,
    pub propagating_flux: f64,
    pub mineral_damping: f64,
    pub moisture_damping: f64,
    pub net_fuel_load: f64,
    pub optimal_reaction_velocity: f64,
    pub reaction_intensity: f64,
    pub rate_of_spread: f64,
}

impl From<&SpreadComponents> for FireSpreadComponents {
    fn from(c: &SpreadComponents) -> Self {
        FireSpreadComponents {
            preignition_energy: *c.preignition_energy,
            heating_number: c.heating_number,
            bulk_density: *c.bulk_density,
            packing_ratio: c.packing_ratio,
            optimal_packing_ratio: c.optimal_packing_ratio,
            slope_factor: c.slope_factor,
            wind_factor: c.wind_factor,
            propagating_flux: c.propagating_flux,
            mineral_damping: c.mineral_damping,
            moisture_damping: c.moisture_damping,
            net_fuel_load: *c.net_fuel_load,
            optimal_reaction_velocity: c.optimal_reaction_velocity,
            reaction_intensity: *c.reaction_intensity,
            rate_of_spread: *c.rate_of_spread,
        }
    }
}

/// Build an input with the four fuel constants at their documented defaults.
///
/// # Example Usage (C)
/// ```c
/// FireSpreadInput input = fire_spread_input_default(2000.0, 0.2, 1.0, 0.3, 0.1, 0.0, 0.0);
/// ```
#[no_mangle]
pub extern "C" fn fire_spread_input_default(
    sa_vol_ratio: f64,
    fuel_load: f64,
    bed_depth: f64,
    dead_extinction_moisture: f64,
    moisture_content: f64,
    wind: f64,
    tan_slope: f64,
) -> FireSpreadInput {
    FireSpreadInput {
        sa_vol_ratio,
        fuel_load,
        bed_depth,
        dead_extinction_moisture,
        moisture_content,
        wind,
        tan_slope,
        heat_content: *DEFAULT_HEAT_CONTENT,
        mineral_content: *DEFAULT_MINERAL_CONTENT,
        effective_mineral_content: *DEFAULT_EFFECTIVE_MINERAL_CONTENT,
        particle_density: *DEFAULT_PARTICLE_DENSITY,
    }
}

/// Compute the rate of spread (ft/min).
///
/// Returns
/// - `FireSpreadErrorCode::Ok` (0) on success with the rate written to `out_rate`
/// - `FireSpreadErrorCode::NullPointer` if `input` or `out_rate` is null
/// - `FireSpreadErrorCode::InvalidParameter` if an input is outside the domain of the equation
/// - `FireSpreadErrorCode::NonFiniteResult` if the inputs are valid but the rate is NaN or infinite
///
/// On any error `out_rate` is left untouched.
///
/// # Safety
///
/// - `input` must be null or point to a valid `FireSpreadInput`.
/// - `out_rate` must be null or point to writable memory for one `double`.
///
/// # Example Usage (C)
/// ```c
/// double ros = 0.0;
/// FireSpreadErrorCode err = fire_spread_rate_of_spread(&input, &ros);
/// if (err != Ok) {
///     fprintf(stderr, "%s\n", fire_spread_get_last_error());
/// }
/// ```
#[no_mangle]
pub unsafe extern "C" fn fire_spread_rate_of_spread(
    input: *const FireSpreadInput,
    out_rate: *mut f64,
) -> FireSpreadErrorCode {
    if input.is_null() {
        return track_error(&DefaultFireSpreadError::null_pointer("input"));
    }
    if out_rate.is_null() {
        return track_error(&DefaultFireSpreadError::null_pointer("out_rate"));
    }

    // SAFETY: both pointers were checked for null above; validity is the caller's contract
    let input = unsafe { &*input };
    track_result(input.evaluate().map(|components| unsafe {
        *out_rate = *components.rate_of_spread;
    }))
}

/// Compute the rate of spread together with its intermediate terms.
///
/// Returns
/// - `FireSpreadErrorCode::Ok` (0) on success with `out_components` filled
/// - `FireSpreadErrorCode::NullPointer` if `input` or `out_components` is null
/// - `FireSpreadErrorCode::InvalidParameter` if an input is outside the domain of the equation
/// - `FireSpreadErrorCode::NonFiniteResult` if the inputs are valid but the rate is NaN or infinite
///
/// # Safety
///
/// - `input` must be null or point to a valid `FireSpreadInput`.
/// - `out_components` must be null or point to writable memory for one `FireSpreadComponents`.
#[no_mangle]
pub unsafe extern "C" fn fire_spread_components(
    input: *const FireSpreadInput,
    out_components: *mut FireSpreadComponents,
) -> FireSpreadErrorCode {
    if input.is_null() {
        return track_error(&DefaultFireSpreadError::null_pointer("input"));
    }
    if out_components.is_null() {
        return track_error(&DefaultFireSpreadError::null_pointer("out_components"));
    }

    // SAFETY: both pointers were checked for null above; validity is the caller's contract
    let input = unsafe { &*input };
    track_result(input.evaluate().map(|components| unsafe {
        *out_components = FireSpreadComponents::from(&components);
    }))
}
