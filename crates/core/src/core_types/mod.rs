//! Core types: imperial units and fuel-bed descriptions

pub mod fuel;
pub mod units;

pub use fuel::*;
pub use units::*;
