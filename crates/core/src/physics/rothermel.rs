//! Rothermel Surface Fire Spread Model (1972)
//!
//! Evaluates the Rothermel rate-of-spread equation for a homogeneous bed of
//! dead surface fuel, in the model's native imperial units.
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread in wildland fuels."
//!   USDA Forest Service Research Paper INT-115.
//! - Albini, F.A. (1976). "Estimating wildfire behavior and effects."
//!   USDA Forest Service General Technical Report INT-30.
//! - Andrews, P.L. (2018). "The Rothermel surface fire spread model and associated developments:
//!   A comprehensive explanation." USDA Forest Service General Technical Report RMRS-GTR-371.

use crate::core_types::fuel::{FuelBed, FuelConstants, SpreadConditions};
use crate::core_types::units::{
    BtuPerPound, BtuPerSquareFootPerMinute, FeetPerMinute, PoundsPerCubicFoot,
    PoundsPerSquareFoot,
};
use crate::error::{check, Constraint, InputParameter, RothermelError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Calculate the rate of spread (ft/min) with the default fuel constants
///
/// Heat content, mineral content, effective mineral content and particle
/// density take the values of [`FuelConstants::default`]. Use
/// [`rate_of_spread_with`] to override them.
///
/// # Arguments
/// * `sa_vol_ratio` - Surface-area-to-volume ratio σ (ft⁻¹)
/// * `fuel_load` - Oven-dry fuel load w₀ (lb/ft²)
/// * `bed_depth` - Fuel bed depth δ (ft)
/// * `dead_extinction_moisture` - Dead fuel moisture of extinction M_x (fraction)
/// * `moisture_content` - Fuel moisture content M_f (fraction)
/// * `wind` - Midflame wind speed U (ft/min)
/// * `tan_slope` - Tangent of the maximum slope angle
///
/// # Errors
/// Returns [`RothermelError::InvalidInput`] for the first input outside the
/// domain of the equation (see [`validate`]), or
/// [`RothermelError::NonFiniteResult`] if the computed rate is NaN or infinite.
///
/// # Example
/// ```
/// use fire_spread_core::physics::rothermel::rate_of_spread;
///
/// let ros = rate_of_spread(2000.0, 0.2, 1.0, 0.3, 0.1, 0.0, 0.0).unwrap();
/// assert!((ros - 3.2124).abs() < 1e-3);
/// ```
pub fn rate_of_spread(
    sa_vol_ratio: f64,
    fuel_load: f64,
    bed_depth: f64,
    dead_extinction_moisture: f64,
    moisture_content: f64,
    wind: f64,
    tan_slope: f64,
) -> Result<f64, RothermelError> {
    let fuel = FuelBed::new(sa_vol_ratio, fuel_load, bed_depth, dead_extinction_moisture);
    let conditions = SpreadConditions::new(moisture_content, wind, tan_slope);

    rate_of_spread_with(&fuel, &FuelConstants::default(), &conditions).map(f64::from)
}

/// Calculate the rate of spread for a fuel bed with explicit fuel constants
///
/// # Formula
/// ```text
/// R = I_R × ξ × (1 + Φ_w + Φ_s) / (ρ_b × ε × Q_ig)
/// ```
///
/// Where:
/// - **R** = Rate of spread (ft/min)
/// - **I_R** = Reaction intensity (Btu/ft²/min)
/// - **ξ** = Propagating flux ratio
/// - **Φ_w** = Wind factor
/// - **Φ_s** = Slope factor
/// - **ρ_b** = Bulk density (lb/ft³)
/// - **ε** = Effective heating number
/// - **Q_ig** = Heat of preignition (Btu/lb)
///
/// # Errors
/// Returns [`RothermelError::InvalidInput`] for the first input outside the
/// domain of the equation (see [`validate`]), or
/// [`RothermelError::NonFiniteResult`] if the computed rate is NaN or infinite.
pub fn rate_of_spread_with(
    fuel: &FuelBed,
    constants: &FuelConstants,
    conditions: &SpreadConditions,
) -> Result<FeetPerMinute, RothermelError> {
    spread_components(fuel, constants, conditions).map(|c| c.rate_of_spread)
}

/// Check every input against the domain of the spread equation
///
/// Inputs are checked in signature order and the first violation is returned:
/// - `sa_vol_ratio`, `fuel_load`, `bed_depth`, `dead_extinction_moisture` and
///   `particle_density` are divisors or power bases and must be positive
/// - `moisture_content`, `wind`, `tan_slope` and `effective_mineral_content`
///   must be non-negative (fractional powers of negative numbers are undefined)
/// - `heat_content` and `mineral_content` must be finite
///
/// # Errors
/// Returns [`RothermelError::InvalidInput`] naming the offending parameter.
pub fn validate(
    fuel: &FuelBed,
    constants: &FuelConstants,
    conditions: &SpreadConditions,
) -> Result<(), RothermelError> {
    use Constraint::{Finite, NonNegative, Positive};

    check(InputParameter::SaVolRatio, *fuel.sa_vol_ratio, Positive)?;
    check(InputParameter::FuelLoad, *fuel.fuel_load, Positive)?;
    check(InputParameter::BedDepth, *fuel.bed_depth, Positive)?;
    check(
        InputParameter::DeadExtinctionMoisture,
        *fuel.dead_extinction_moisture,
        Positive,
    )?;
    check(
        InputParameter::MoistureContent,
        *conditions.moisture_content,
        NonNegative,
    )?;
    check(InputParameter::Wind, *conditions.wind, NonNegative)?;
    check(InputParameter::TanSlope, *conditions.tan_slope, NonNegative)?;
    check(InputParameter::HeatContent, *constants.heat_content, Finite)?;
    check(InputParameter::MineralContent, *constants.mineral_content, Finite)?;
    check(
        InputParameter::EffectiveMineralContent,
        *constants.effective_mineral_content,
        NonNegative,
    )?;
    check(
        InputParameter::ParticleDensity,
        *constants.particle_density,
        Positive,
    )?;

    Ok(())
}

/// Wind factor coefficients, all functions of σ alone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindCoefficients {
    pub c: f64,
    pub b: f64,
    pub e: f64,
}

/// Every intermediate of one evaluation of the spread equation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadComponents {
    pub preignition_energy: BtuPerPound,
    pub heating_number: f64,
    pub bulk_density: PoundsPerCubicFoot,
    pub packing_ratio: f64,
    pub optimal_packing_ratio: f64,
    pub slope_factor: f64,
    pub wind_coefficients: WindCoefficients,
    pub wind_factor: f64,
    pub propagating_flux: f64,
    pub mineral_damping: f64,
    pub relative_moisture: f64,
    pub moisture_damping: f64,
    pub net_fuel_load: PoundsPerSquareFoot,
    /// Γ'_max (1/min)
    pub max_reaction_velocity: f64,
    pub reaction_velocity_exponent: f64,
    /// Γ' (1/min)
    pub optimal_reaction_velocity: f64,
    pub reaction_intensity: BtuPerSquareFootPerMinute,
    pub rate_of_spread: FeetPerMinute,
}

/// Evaluate the spread equation and return every intermediate term
///
/// # Errors
/// Returns [`RothermelError::InvalidInput`] for the first input outside the
/// domain of the equation (see [`validate`]), or
/// [`RothermelError::NonFiniteResult`] if the computed rate is NaN or infinite.
pub fn spread_components(
    fuel: &FuelBed,
    constants: &FuelConstants,
    conditions: &SpreadConditions,
) -> Result<SpreadComponents, RothermelError> {
    if let Err(err) = validate(fuel, constants, conditions) {
        debug!("Rejected spread input: {err}");
        return Err(err);
    }

    let sigma = *fuel.sa_vol_ratio;
    let moisture = *conditions.moisture_content;

    let preignition = preignition_energy(moisture);
    let epsilon = heating_number(sigma);

    let bulk_density = fuel.fuel_load / fuel.bed_depth;
    let packing_ratio = bulk_density / constants.particle_density;
    let optimal_packing = optimal_packing_ratio(sigma);
    let relative_packing = packing_ratio / optimal_packing;

    let phi_s = slope_factor(packing_ratio, *conditions.tan_slope);

    let wind_coefficients = wind_coefficients(sigma);
    let phi_w = wind_factor(&wind_coefficients, *conditions.wind, relative_packing);

    let xi = propagating_flux(sigma, packing_ratio);

    let eta_s = mineral_damping(*constants.effective_mineral_content);

    let rm = relative_moisture(moisture, *fuel.dead_extinction_moisture);
    let eta_m = moisture_damping(rm);

    let net_fuel_load = fuel.fuel_load * (1.0 - *constants.mineral_content);

    let gamma_max = max_reaction_velocity(sigma);
    let a = reaction_velocity_exponent(sigma);
    let gamma = optimal_reaction_velocity(gamma_max, a, relative_packing);

    let reaction_intensity = BtuPerSquareFootPerMinute::new(
        gamma * *net_fuel_load * *constants.heat_content * eta_m * eta_s,
    );

    let rate_of_spread = FeetPerMinute::new(
        *reaction_intensity * xi * (1.0 + phi_w + phi_s) / (*bulk_density * epsilon * preignition),
    );

    trace!(
        sigma,
        packing_ratio,
        relative_packing,
        wind_factor = phi_w,
        slope_factor = phi_s,
        moisture_damping = eta_m,
        reaction_intensity = *reaction_intensity,
        rate_of_spread = *rate_of_spread,
        "Evaluated Rothermel spread"
    );

    if !rate_of_spread.is_finite() {
        let err = RothermelError::NonFiniteResult {
            rate_of_spread: *rate_of_spread,
        };
        debug!(sigma, "Rejected spread result: {err}");
        return Err(err);
    }

    Ok(SpreadComponents {
        preignition_energy: BtuPerPound::new(preignition),
        heating_number: epsilon,
        bulk_density,
        packing_ratio,
        optimal_packing_ratio: optimal_packing,
        slope_factor: phi_s,
        wind_coefficients,
        wind_factor: phi_w,
        propagating_flux: xi,
        mineral_damping: eta_s,
        relative_moisture: rm,
        moisture_damping: eta_m,
        net_fuel_load,
        max_reaction_velocity: gamma_max,
        reaction_velocity_exponent: a,
        optimal_reaction_velocity: gamma,
        reaction_intensity,
        rate_of_spread,
    })
}

/// Calculate heat of preignition Q_ig (Btu/lb)
///
/// # Formula
/// ```text
/// Q_ig = 250 + 1116 × M_f
/// ```
pub fn preignition_energy(moisture_content: f64) -> f64 {
    250.0 + 1116.0 * moisture_content
}

/// Calculate effective heating number ε
///
/// # Formula
/// ```text
/// ε = exp(-138 / σ)
/// ```
pub fn heating_number(sa_vol_ratio: f64) -> f64 {
    (-138.0 / sa_vol_ratio).exp()
}

/// Calculate optimum packing ratio β_op
///
/// # Formula
/// ```text
/// β_op = 3.348 × σ^(-0.8189)
/// ```
pub fn optimal_packing_ratio(sa_vol_ratio: f64) -> f64 {
    3.348 * sa_vol_ratio.powf(-0.8189)
}

/// Calculate slope factor Φ_s
///
/// # Formula
/// ```text
/// Φ_s = 5.275 × β^(-0.3) × tan²φ
/// ```
pub fn slope_factor(packing_ratio: f64, tan_slope: f64) -> f64 {
    5.275 * packing_ratio.powf(-0.3) * tan_slope.powi(2)
}

/// Calculate the wind factor coefficients C, B and E
///
/// # Formula
/// ```text
/// C = 7.74 × exp(-0.133 × σ^0.55)
/// B = 0.02526 × σ^0.54
/// E = 0.715 × exp(-3.59×10⁻⁴ × σ)
/// ```
pub fn wind_coefficients(sa_vol_ratio: f64) -> WindCoefficients {
    WindCoefficients {
        c: 7.74 * (-0.133 * sa_vol_ratio.powf(0.55)).exp(),
        b: 0.02526 * sa_vol_ratio.powf(0.54),
        e: 0.715 * (sa_vol_ratio * -3.59e-4).exp(),
    }
}

/// Calculate wind factor Φ_w
///
/// # Formula
/// ```text
/// Φ_w = C × U^B × (β/β_op)^E
/// ```
///
/// Zero wind gives exactly zero since B > 0.
pub fn wind_factor(coefficients: &WindCoefficients, wind: f64, relative_packing: f64) -> f64 {
    coefficients.c * wind.powf(coefficients.b) * relative_packing.powf(coefficients.e)
}

/// Calculate propagating flux ratio ξ
///
/// # Formula
/// ```text
/// ξ = exp((0.792 + 0.681 × σ^0.5) × (β + 0.1)) / (192 + 0.2595 × σ)
/// ```
pub fn propagating_flux(sa_vol_ratio: f64, packing_ratio: f64) -> f64 {
    let numerator = ((0.792 + 0.681 * sa_vol_ratio.sqrt()) * (packing_ratio + 0.1)).exp();
    let denominator = 192.0 + 0.2595 * sa_vol_ratio;

    numerator / denominator
}

/// Calculate mineral damping coefficient η_s
///
/// # Formula
/// ```text
/// η_s = min(1, 0.174 × S_e^(-0.19))
/// ```
///
/// Capped at 1 for very low effective mineral content. `S_e = 0` drives the
/// power to infinity, which the cap also turns into exactly 1.
pub fn mineral_damping(effective_mineral_content: f64) -> f64 {
    (0.174 * effective_mineral_content.powf(-0.19)).min(1.0)
}

/// Calculate relative moisture M_f / M_x, capped at 1 (extinction)
pub fn relative_moisture(moisture_content: f64, dead_extinction_moisture: f64) -> f64 {
    (moisture_content / dead_extinction_moisture).min(1.0)
}

/// Calculate moisture damping coefficient η_M
///
/// # Formula
/// ```text
/// η_M = 1 - 2.59 r_M + 5.11 r_M² - 3.52 r_M³
/// ```
///
/// Not clamped: at `r_M = 1` the polynomial evaluates to zero up to rounding.
pub fn moisture_damping(relative_moisture: f64) -> f64 {
    1.0 - 2.59 * relative_moisture + 5.11 * relative_moisture.powi(2)
        - 3.52 * relative_moisture.powi(3)
}

/// Calculate maximum reaction velocity Γ'_max (1/min)
///
/// # Formula
/// ```text
/// Γ'_max = σ^1.5 / (495 + 0.0594 × σ^1.5)
/// ```
pub fn max_reaction_velocity(sa_vol_ratio: f64) -> f64 {
    let sigma_15 = sa_vol_ratio.powf(1.5);
    sigma_15 / (495.0 + 0.0594 * sigma_15)
}

/// Calculate reaction velocity exponent A
///
/// # Formula
/// ```text
/// A = 133 × σ^(-0.7913)
/// ```
pub fn reaction_velocity_exponent(sa_vol_ratio: f64) -> f64 {
    133.0 * sa_vol_ratio.powf(-0.7913)
}

/// Calculate optimum reaction velocity Γ' (1/min)
///
/// # Formula
/// ```text
/// Γ' = Γ'_max × (β/β_op)^A × exp(A × (1 - β/β_op))
/// ```
///
/// Peaks at `Γ'_max` when the bed is packed at its optimum.
pub fn optimal_reaction_velocity(max_reaction: f64, exponent: f64, relative_packing: f64) -> f64 {
    max_reaction * relative_packing.powf(exponent) * (exponent * (1.0 - relative_packing)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_fuel() -> FuelBed {
        FuelBed::new(2000.0, 0.2, 1.0, 0.3)
    }

    #[test]
    fn test_reference_scenario() {
        let ros = rate_of_spread(2000.0, 0.2, 1.0, 0.3, 0.1, 0.0, 0.0).unwrap();
        assert_relative_eq!(ros, 3.212385684753328, max_relative = 1e-9);
    }

    #[test]
    fn test_reference_intermediates() {
        let c = spread_components(
            &reference_fuel(),
            &FuelConstants::default(),
            &SpreadConditions::calm(0.1),
        )
        .unwrap();

        assert_relative_eq!(*c.preignition_energy, 361.6, max_relative = 1e-12);
        assert_relative_eq!(c.heating_number, 0.933326680078202, max_relative = 1e-9);
        assert_relative_eq!(*c.bulk_density, 0.2, max_relative = 1e-12);
        assert_relative_eq!(c.packing_ratio, 0.00625, max_relative = 1e-12);
        assert_relative_eq!(c.optimal_packing_ratio, 0.00663089247989385, max_relative = 1e-9);
        assert_relative_eq!(c.propagating_flux, 0.03890421973106594, max_relative = 1e-9);
        assert_relative_eq!(c.mineral_damping, 0.4173969279093913, max_relative = 1e-9);
        assert_relative_eq!(c.moisture_damping, 0.5740740740740742, max_relative = 1e-9);
        assert_relative_eq!(*c.net_fuel_load, 0.1889, max_relative = 1e-12);
        assert_relative_eq!(c.max_reaction_velocity, 15.40018894549715, max_relative = 1e-9);
        assert_relative_eq!(c.reaction_velocity_exponent, 0.32489767641876505, max_relative = 1e-9);
        assert_relative_eq!(c.optimal_reaction_velocity, 15.39160620720892, max_relative = 1e-9);
        assert_relative_eq!(*c.reaction_intensity, 5573.436669758956, max_relative = 1e-9);
    }

    #[test]
    fn test_wind_coefficients_reference() {
        let coefficients = wind_coefficients(2000.0);
        assert_relative_eq!(coefficients.c, 0.0012919882317358822, max_relative = 1e-9);
        assert_relative_eq!(coefficients.b, 1.5310505994941555, max_relative = 1e-9);
        assert_relative_eq!(coefficients.e, 0.3487246152573978, max_relative = 1e-9);
    }

    #[test]
    fn test_calm_flat_factors_are_zero() {
        let c = spread_components(
            &reference_fuel(),
            &FuelConstants::default(),
            &SpreadConditions::calm(0.1),
        )
        .unwrap();
        assert_eq!(c.wind_factor, 0.0);
        assert_eq!(c.slope_factor, 0.0);
    }

    #[test]
    fn test_wind_and_slope_scenario() {
        // 1 mph midflame wind on a 30% slope
        let ros = rate_of_spread(2000.0, 0.2, 1.0, 0.3, 0.1, 88.0, 0.3).unwrap();
        assert_relative_eq!(ros, 14.060023633822013, max_relative = 1e-9);
    }

    #[test]
    fn test_moisture_damping_at_extinction() {
        // 1 - 2.59 + 5.11 - 3.52 is zero up to rounding
        assert!(moisture_damping(1.0).abs() < 1e-12);
        assert_eq!(moisture_damping(0.0), 1.0);
    }

    #[test]
    fn test_relative_moisture_clamps_above_extinction() {
        assert_eq!(relative_moisture(0.45, 0.3), 1.0);
        assert_eq!(relative_moisture(0.15, 0.3), 0.5);
    }

    #[test]
    fn test_mineral_damping_ceiling() {
        assert_eq!(mineral_damping(1e-5), 1.0);
        assert_eq!(mineral_damping(0.0), 1.0);
        assert!(mineral_damping(0.010) < 1.0);
    }

    #[test]
    fn test_reaction_velocity_peaks_at_optimum_packing() {
        let gamma_max = max_reaction_velocity(2000.0);
        let a = reaction_velocity_exponent(2000.0);

        assert_relative_eq!(
            optimal_reaction_velocity(gamma_max, a, 1.0),
            gamma_max,
            max_relative = 1e-12
        );
        assert!(optimal_reaction_velocity(gamma_max, a, 0.5) < gamma_max);
        assert!(optimal_reaction_velocity(gamma_max, a, 2.0) < gamma_max);
    }

    #[test]
    fn test_zero_sa_vol_ratio_rejected() {
        let err = rate_of_spread(0.0, 0.2, 1.0, 0.3, 0.1, 0.0, 0.0).unwrap_err();
        assert_eq!(err.parameter(), Some(InputParameter::SaVolRatio));
    }

    #[test]
    fn test_first_violation_reported() {
        // bed_depth precedes wind in the signature
        let err = rate_of_spread(2000.0, 0.2, 0.0, 0.3, 0.1, -5.0, 0.0).unwrap_err();
        assert_eq!(err.parameter(), Some(InputParameter::BedDepth));
    }

    #[test]
    fn test_underflowing_sa_vol_ratio_is_not_finite() {
        // σ = 0.1: ε = exp(-1380) and (β/β_op)^A both underflow to zero
        let err = rate_of_spread(0.1, 0.2, 1.0, 0.3, 0.1, 0.0, 0.0).unwrap_err();
        assert!(
            matches!(err, RothermelError::NonFiniteResult { .. }),
            "Expected a non-finite result error, got {err:?}"
        );
        assert_eq!(err.parameter(), None);
    }

    #[test]
    fn test_overflowing_heat_content_is_not_finite() {
        let constants = FuelConstants {
            heat_content: 1e308.into(),
            ..FuelConstants::default()
        };
        let result = rate_of_spread_with(
            &FuelBed::new(2000.0, 0.2, 1.0, 0.3),
            &constants,
            &SpreadConditions::calm(0.1),
        );
        assert!(matches!(
            result,
            Err(RothermelError::NonFiniteResult { rate_of_spread }) if rate_of_spread.is_infinite()
        ));
    }
}
