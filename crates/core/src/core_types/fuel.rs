use super::units::{
    BtuPerPound, Feet, FeetPerMinute, Fraction, InverseFeet, PoundsPerCubicFoot,
    PoundsPerSquareFoot,
};
use serde::{Deserialize, Serialize};

/// Low heat content of the fuel (Btu/lb)
pub const DEFAULT_HEAT_CONTENT: BtuPerPound = BtuPerPound::new(8000.0);

/// Total mineral content (lb minerals / lb oven-dry wood)
pub const DEFAULT_MINERAL_CONTENT: Fraction = Fraction::new(0.0555);

/// Effective (silica-free) mineral content
pub const DEFAULT_EFFECTIVE_MINERAL_CONTENT: Fraction = Fraction::new(0.010);

/// Oven-dry particle density (lb/ft³)
pub const DEFAULT_PARTICLE_DENSITY: PoundsPerCubicFoot = PoundsPerCubicFoot::WOOD_PARTICLE;

/// Geometry and extinction moisture of a homogeneous surface fuel bed
///
/// One size class of dead fuel, described by its particles' surface-area-to-volume
/// ratio, its oven-dry load, its depth and the moisture above which it stops burning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelBed {
    pub sa_vol_ratio: InverseFeet,                // σ, ft⁻¹
    pub fuel_load: PoundsPerSquareFoot,           // w₀, oven-dry lb/ft²
    pub bed_depth: Feet,                          // δ, ft
    pub dead_extinction_moisture: Fraction,       // M_x
}

impl FuelBed {
    /// Create a fuel bed from raw imperial values.
    pub fn new(
        sa_vol_ratio: f64,
        fuel_load: f64,
        bed_depth: f64,
        dead_extinction_moisture: f64,
    ) -> Self {
        FuelBed {
            sa_vol_ratio: InverseFeet::new(sa_vol_ratio),
            fuel_load: PoundsPerSquareFoot::new(fuel_load),
            bed_depth: Feet::new(bed_depth),
            dead_extinction_moisture: Fraction::new(dead_extinction_moisture),
        }
    }

    /// Build a bed from a published fuel model row (load in tons per acre).
    fn from_fuel_model(
        sa_vol_ratio: f64,
        load_tons_per_acre: f64,
        bed_depth: f64,
        dead_extinction_moisture: f64,
    ) -> Self {
        FuelBed {
            sa_vol_ratio: InverseFeet::new(sa_vol_ratio),
            fuel_load: PoundsPerSquareFoot::from_tons_per_acre(load_tons_per_acre),
            bed_depth: Feet::new(bed_depth),
            dead_extinction_moisture: Fraction::new(dead_extinction_moisture),
        }
    }

    // Dead 1-h class of the Anderson (1982) NFFL fuel models. Larger and live
    // classes are dropped since the model here carries a single size class.

    /// Fuel model 1: short grass (1 ft)
    pub fn short_grass() -> Self {
        Self::from_fuel_model(3500.0, 0.74, 1.0, 0.12)
    }

    /// Fuel model 2: timber with grass understory
    pub fn timber_grass() -> Self {
        Self::from_fuel_model(3000.0, 2.0, 1.0, 0.15)
    }

    /// Fuel model 3: tall grass (2.5 ft)
    pub fn tall_grass() -> Self {
        Self::from_fuel_model(1500.0, 3.01, 2.5, 0.25)
    }

    /// Fuel model 8: closed timber litter
    pub fn closed_timber_litter() -> Self {
        Self::from_fuel_model(2000.0, 1.5, 0.2, 0.30)
    }

    /// Fuel model 9: hardwood litter
    pub fn hardwood_litter() -> Self {
        Self::from_fuel_model(2500.0, 2.92, 0.2, 0.25)
    }
}

/// Physical constants of the fuel particles
///
/// Missing fields deserialize to the documented defaults, so a config only
/// needs to name the constants it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelConstants {
    pub heat_content: BtuPerPound,            // h, low heat content
    pub mineral_content: Fraction,            // S_T, total mineral content
    pub effective_mineral_content: Fraction,  // S_e, silica-free mineral content
    pub particle_density: PoundsPerCubicFoot, // ρ_p, oven-dry
}

impl Default for FuelConstants {
    fn default() -> Self {
        FuelConstants {
            heat_content: DEFAULT_HEAT_CONTENT,
            mineral_content: DEFAULT_MINERAL_CONTENT,
            effective_mineral_content: DEFAULT_EFFECTIVE_MINERAL_CONTENT,
            particle_density: DEFAULT_PARTICLE_DENSITY,
        }
    }
}

/// Environmental state the fuel bed burns under
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadConditions {
    pub moisture_content: Fraction, // M_f, dead fuel moisture
    pub wind: FeetPerMinute,        // U, midflame
    pub tan_slope: Fraction,        // tan φ, maximum slope
}

impl SpreadConditions {
    /// Create spread conditions from raw imperial values.
    pub fn new(moisture_content: f64, wind: f64, tan_slope: f64) -> Self {
        SpreadConditions {
            moisture_content: Fraction::new(moisture_content),
            wind: FeetPerMinute::new(wind),
            tan_slope: Fraction::new(tan_slope),
        }
    }

    /// Calm, flat ground at the given moisture.
    pub fn calm(moisture_content: f64) -> Self {
        Self::new(moisture_content, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = FuelConstants::default();
        assert_eq!(*constants.heat_content, 8000.0);
        assert_eq!(*constants.mineral_content, 0.0555);
        assert_eq!(*constants.effective_mineral_content, 0.010);
        assert_eq!(*constants.particle_density, 32.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let constants: FuelConstants =
            serde_json::from_str(r#"{ "heat_content": 9000.0 }"#).unwrap();
        assert_eq!(*constants.heat_content, 9000.0);
        assert_eq!(constants.mineral_content, DEFAULT_MINERAL_CONTENT);
        assert_eq!(
            constants.effective_mineral_content,
            DEFAULT_EFFECTIVE_MINERAL_CONTENT
        );
        assert_eq!(constants.particle_density, DEFAULT_PARTICLE_DENSITY);
    }

    #[test]
    fn test_fuel_bed_config_round_trip() {
        let bed = FuelBed::new(2000.0, 0.2, 1.0, 0.3);
        let json = serde_json::to_string(&bed).unwrap();
        assert_eq!(
            json,
            r#"{"sa_vol_ratio":2000.0,"fuel_load":0.2,"bed_depth":1.0,"dead_extinction_moisture":0.3}"#
        );
    }

    #[test]
    fn test_short_grass_preset() {
        let bed = FuelBed::short_grass();
        assert_eq!(*bed.sa_vol_ratio, 3500.0);
        // 0.74 t/ac
        assert!((*bed.fuel_load - 0.0339761).abs() < 1e-6);
        assert_eq!(*bed.bed_depth, 1.0);
        assert_eq!(*bed.dead_extinction_moisture, 0.12);
    }

    #[test]
    fn test_litter_presets_are_shallow() {
        for bed in [FuelBed::closed_timber_litter(), FuelBed::hardwood_litter()] {
            assert!(*bed.bed_depth < 0.5);
            assert!(*bed.fuel_load > 0.05);
        }
    }
}
