//! Semantic unit types for the imperial quantities of the Rothermel model
//!
//! Newtype wrappers keep fuel loads, depths, densities and speeds from being
//! mixed up when they are passed around as bare `f64`s.
//!
//! # Design Philosophy
//! - Every type wraps `f64`; the spread equation is evaluated in double precision
//! - Only the imperial conventions of the model are represented (ft, lb, Btu, min)
//! - Constructors do not validate; range checks happen once, in the evaluator,
//!   and are reported as errors rather than panics
//! - Total ordering via `Ord` (NaN handled as greater than all values)
//! - Serde support for configuration files
//!
//! # Usage
//! ```
//! use fire_spread_core::core_types::units::{Feet, PoundsPerCubicFoot, PoundsPerSquareFoot};
//!
//! let load = PoundsPerSquareFoot::new(0.2);
//! let depth = Feet::new(0.5);
//! let bulk: PoundsPerCubicFoot = load / depth;
//! assert!((*bulk - 0.4).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Div, Mul};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Declares an `f64` unit newtype with total ordering, `Deref` to the raw
/// value, conversions to and from `f64`, and a `Display` with the unit suffix.
macro_rules! imperial_unit {
    ($(#[$meta:meta])* $name:ident, $suffix:literal, $precision:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                f64_total_cmp(self.0, other.0)
            }
        }

        impl Deref for $name {
            type Target = f64;
            #[inline]
            fn deref(&self) -> &f64 {
                &self.0
            }
        }

        impl $name {
            /// Wrap a raw value.
            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }
        }

        impl From<f64> for $name {
            fn from(v: f64) -> Self {
                $name(v)
            }
        }

        impl From<$name> for f64 {
            fn from(v: $name) -> f64 {
                v.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!("{:.", $precision, "}", $suffix), self.0)
            }
        }
    };
}

// ============================================================================
// FUEL GEOMETRY
// ============================================================================

imperial_unit!(
    /// Surface-area-to-volume ratio of fuel particles (ft⁻¹)
    InverseFeet,
    " ft⁻¹",
    "0"
);

imperial_unit!(
    /// Length in feet (fuel bed depth)
    Feet,
    " ft",
    "3"
);

// ============================================================================
// MASS LOADINGS AND DENSITIES
// ============================================================================

imperial_unit!(
    /// Oven-dry mass per unit ground area (lb/ft²)
    PoundsPerSquareFoot,
    " lb/ft²",
    "4"
);

impl PoundsPerSquareFoot {
    /// Tons per acre to lb/ft² (2000 lb / 43560 ft²)
    const TONS_PER_ACRE: f64 = 2000.0 / 43560.0;

    /// Convert a fuel load quoted in tons per acre, the convention of published fuel models.
    #[inline]
    #[must_use]
    pub fn from_tons_per_acre(tons_per_acre: f64) -> Self {
        PoundsPerSquareFoot(tons_per_acre * Self::TONS_PER_ACRE)
    }
}

// net fuel load = fuel load × (1 - mineral content)
impl Mul<f64> for PoundsPerSquareFoot {
    type Output = PoundsPerSquareFoot;
    fn mul(self, rhs: f64) -> PoundsPerSquareFoot {
        PoundsPerSquareFoot(self.0 * rhs)
    }
}

// fuel load / depth = bulk density
impl Div<Feet> for PoundsPerSquareFoot {
    type Output = PoundsPerCubicFoot;
    fn div(self, rhs: Feet) -> PoundsPerCubicFoot {
        PoundsPerCubicFoot(self.0 / rhs.0)
    }
}

imperial_unit!(
    /// Mass per unit volume (lb/ft³), used for bulk and particle density
    PoundsPerCubicFoot,
    " lb/ft³",
    "4"
);

impl PoundsPerCubicFoot {
    /// Oven-dry wood particle density used by the standard fuel models
    pub const WOOD_PARTICLE: PoundsPerCubicFoot = PoundsPerCubicFoot(32.0);
}

// bulk density / particle density = packing ratio (dimensionless)
impl Div<PoundsPerCubicFoot> for PoundsPerCubicFoot {
    type Output = f64;
    fn div(self, rhs: PoundsPerCubicFoot) -> f64 {
        self.0 / rhs.0
    }
}

// ============================================================================
// ENERGY
// ============================================================================

imperial_unit!(
    /// Heat content per unit mass (Btu/lb)
    BtuPerPound,
    " Btu/lb",
    "1"
);

imperial_unit!(
    /// Heat release rate per unit area of fire front (Btu/ft²/min)
    BtuPerSquareFootPerMinute,
    " Btu/ft²/min",
    "1"
);

// ============================================================================
// SPEED
// ============================================================================

imperial_unit!(
    /// Speed in feet per minute (midflame wind, rate of spread)
    FeetPerMinute,
    " ft/min",
    "3"
);

// ============================================================================
// DIMENSIONLESS
// ============================================================================

imperial_unit!(
    /// Dimensionless fraction (moisture content, mineral content, slope tangent)
    ///
    /// Not restricted to [0, 1]: live fuel moisture and steep slope tangents
    /// both exceed one.
    Fraction,
    "",
    "4"
);

// ============================================================================
// TESTS
// ============================================================================
