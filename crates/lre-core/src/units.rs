// lre-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Force as UomForce, Length as UomLength, MassDensity as UomMassDensity,
    MassRate as UomMassRate, MolarMass as UomMolarMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Velocity as UomVelocity, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
pub type Force = UomForce;
pub type Length = UomLength;
pub type MassRate = UomMassRate;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Velocity = UomVelocity;
pub type Volume = UomVolume;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kgps(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn n(v: f64) -> Force {
    use uom::si::force::newton;
    Force::new::<newton>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn kg_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    MolarMass::new::<kilogram_per_mole>(v)
}

pub mod constants {
    /// Standard gravity [m/s²].
    pub const G0_MPS2: f64 = 9.806_65;

    /// Universal gas constant [J/(mol·K)].
    pub const R_UNIVERSAL: f64 = 8.314_462_618;
}
