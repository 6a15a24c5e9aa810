// ff-core/src/units.rs

//! Unit names and their SI scale factors.
//!
//! Every factor converts one unit of the named quantity into the SI base
//! representation (metres, seconds, kilograms, newtons, pascals). Where uom
//! knows the unit the factor is taken from uom; pound-based units keep the
//! engineering value `1 lb = 0.453592 kg` and derive from it.

use std::fmt;

use uom::si::f64::{
    Acceleration as UomAcceleration, Force as UomForce, Length as UomLength,
    Pressure as UomPressure, Time as UomTime, Velocity as UomVelocity,
};

use crate::error::{FfError, FfResult};

pub const LB_KG: f64 = 0.453_592;

/// Quantity family of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Time,
    Length,
    Area,
    Volume,
    Speed,
    Acceleration,
    Mass,
    Force,
    Pressure,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Length => write!(f, "length"),
            Self::Area => write!(f, "area"),
            Self::Volume => write!(f, "volume"),
            Self::Speed => write!(f, "speed"),
            Self::Acceleration => write!(f, "acceleration"),
            Self::Mass => write!(f, "mass"),
            Self::Force => write!(f, "force"),
            Self::Pressure => write!(f, "pressure"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitDef {
    pub name: &'static str,
    pub dimension: Dimension,
    pub factor: f64,
}

/// All unit names known to [`lookup`].
pub const UNIT_NAMES: &[&str] = &[
    "sec", "minute", "h", "day", "sec2", "m", "mm", "cm", "km", "inch", "ft", "mile", "m2", "mm2",
    "cm2", "km2", "inch2", "ft2", "mile2", "m3", "inch3", "ft3", "cmps", "mps", "mph", "inchps",
    "ftps", "mps2", "inchps2", "ftps2", "g", "kg", "ton", "lb", "N", "kN", "lbf", "kip", "kips",
    "Pa", "kPa", "MPa", "GPa", "psi", "ksi", "Mpsi",
];

fn seconds(t: UomTime) -> f64 {
    t.get::<uom::si::time::second>()
}

fn meters(l: UomLength) -> f64 {
    l.get::<uom::si::length::meter>()
}

fn inch() -> f64 {
    meters(UomLength::new::<uom::si::length::inch>(1.0))
}

fn foot() -> f64 {
    meters(UomLength::new::<uom::si::length::foot>(1.0))
}

fn mile() -> f64 {
    meters(UomLength::new::<uom::si::length::mile>(1.0))
}

fn standard_gravity() -> f64 {
    use uom::si::acceleration::{meter_per_second_squared, standard_gravity};
    UomAcceleration::new::<standard_gravity>(1.0).get::<meter_per_second_squared>()
}

fn lbf() -> f64 {
    LB_KG * standard_gravity()
}

fn psi() -> f64 {
    lbf() / inch().powi(2)
}

/// Look up a unit by its short name (case sensitive: `mm` and `Mpsi` differ).
pub fn lookup(name: &str) -> Option<UnitDef> {
    use Dimension::*;

    let (dimension, factor) = match name {
        "sec" => (Time, 1.0),
        "minute" => (Time, seconds(UomTime::new::<uom::si::time::minute>(1.0))),
        "h" => (Time, seconds(UomTime::new::<uom::si::time::hour>(1.0))),
        "day" => (Time, seconds(UomTime::new::<uom::si::time::day>(1.0))),
        // Squared seconds only appear as a denominator; it is kept for completeness.
        "sec2" => (Time, 1.0),

        "m" => (Length, 1.0),
        "mm" => (Length, meters(UomLength::new::<uom::si::length::millimeter>(1.0))),
        "cm" => (Length, meters(UomLength::new::<uom::si::length::centimeter>(1.0))),
        "km" => (Length, meters(UomLength::new::<uom::si::length::kilometer>(1.0))),
        "inch" => (Length, inch()),
        "ft" => (Length, foot()),
        "mile" => (Length, mile()),

        "m2" => (Area, 1.0),
        "mm2" => (Area, 1.0e-6),
        "cm2" => (Area, 1.0e-4),
        "km2" => (Area, 1.0e6),
        "inch2" => (Area, inch().powi(2)),
        "ft2" => (Area, foot().powi(2)),
        "mile2" => (Area, mile().powi(2)),

        "m3" => (Volume, 1.0),
        "inch3" => (Volume, inch().powi(3)),
        "ft3" => (Volume, foot().powi(3)),

        "cmps" => (Speed, 0.01),
        "mps" => (Speed, 1.0),
        "mph" => (
            Speed,
            UomVelocity::new::<uom::si::velocity::mile_per_hour>(1.0)
                .get::<uom::si::velocity::meter_per_second>(),
        ),
        "inchps" => (Speed, inch()),
        "ftps" => (Speed, foot()),

        "mps2" => (Acceleration, 1.0),
        "inchps2" => (Acceleration, inch()),
        "ftps2" => (Acceleration, foot()),
        "g" => (Acceleration, standard_gravity()),

        "kg" => (Mass, 1.0),
        "ton" => (Mass, 1000.0),
        "lb" => (Mass, LB_KG),

        "N" => (Force, 1.0),
        "kN" => (
            Force,
            UomForce::new::<uom::si::force::kilonewton>(1.0).get::<uom::si::force::newton>(),
        ),
        "lbf" => (Force, lbf()),
        "kip" | "kips" => (Force, 1000.0 * lbf()),

        "Pa" => (Pressure, 1.0),
        "kPa" => (Pressure, pascals(UomPressure::new::<uom::si::pressure::kilopascal>(1.0))),
        "MPa" => (Pressure, pascals(UomPressure::new::<uom::si::pressure::megapascal>(1.0))),
        "GPa" => (Pressure, pascals(UomPressure::new::<uom::si::pressure::gigapascal>(1.0))),
        "psi" => (Pressure, psi()),
        "ksi" => (Pressure, 1.0e3 * psi()),
        "Mpsi" => (Pressure, 1.0e6 * psi()),

        _ => return None,
    };

    let name = UNIT_NAMES.iter().copied().find(|n| *n == name)?;
    Some(UnitDef {
        name,
        dimension,
        factor,
    })
}

fn pascals(p: UomPressure) -> f64 {
    p.get::<uom::si::pressure::pascal>()
}

/// Scale factor of `name` relative to its SI base unit.
pub fn scale_factor(name: &str) -> Option<f64> {
    lookup(name).map(|u| u.factor)
}

/// Look up `name` and require it to measure `expected`.
pub fn require(name: &str, expected: Dimension) -> FfResult<UnitDef> {
    let unit = lookup(name).ok_or_else(|| FfError::UnknownUnit {
        name: name.to_string(),
    })?;
    if unit.dimension != expected {
        return Err(FfError::WrongDimension {
            name: name.to_string(),
            expected,
            actual: unit.dimension,
        });
    }
    Ok(unit)
}

/// Convert a length expressed in `unit` to metres.
pub fn length_to_m(value: f64, unit: &str) -> FfResult<f64> {
    if !value.is_finite() {
        return Err(FfError::InvalidArg {
            what: "length must be finite",
        });
    }
    Ok(value * require(unit, Dimension::Length)?.factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn every_listed_name_resolves() {
        for name in UNIT_NAMES {
            assert!(lookup(name).is_some(), "missing unit {name}");
        }
    }

    #[test]
    fn length_factors() {
        assert!(close(scale_factor("inch").unwrap(), 0.0254));
        assert!(close(scale_factor("ft").unwrap(), 0.3048));
        assert!(close(scale_factor("mile").unwrap(), 1609.344));
        assert!(close(scale_factor("mm").unwrap(), 0.001));
    }

    #[test]
    fn pound_based_units_use_engineering_pound() {
        let lbf = scale_factor("lbf").unwrap();
        assert!(close(lbf, 0.453_592 * 9.806_65));
        assert!(close(scale_factor("kip").unwrap(), 1000.0 * lbf));
        assert!(close(scale_factor("psi").unwrap(), lbf / 0.0254_f64.powi(2)));
    }

    #[test]
    fn time_factors() {
        assert!(close(scale_factor("minute").unwrap(), 60.0));
        assert!(close(scale_factor("h").unwrap(), 3600.0));
        assert!(close(scale_factor("day").unwrap(), 86_400.0));
    }

    #[test]
    fn unknown_and_wrong_dimension() {
        assert!(scale_factor("furlong").is_none());
        assert!(matches!(
            length_to_m(1.0, "furlong"),
            Err(FfError::UnknownUnit { .. })
        ));
        assert!(matches!(
            length_to_m(1.0, "kPa"),
            Err(FfError::WrongDimension {
                expected: Dimension::Length,
                actual: Dimension::Pressure,
                ..
            })
        ));
    }

    #[test]
    fn converts_feet_to_meters() {
        assert!(close(length_to_m(10.0, "ft").unwrap(), 3.048));
        assert!(length_to_m(f64::NAN, "m").is_err());
    }
}
