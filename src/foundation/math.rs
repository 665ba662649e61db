use std::f64::consts::FRAC_PI_4;

/// Angle stored as a fraction of a full turn: `2^32` units per revolution.
///
/// Arithmetic wraps, so adding turns never needs normalising.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Turn(pub u32);

const TURN_UNITS: f64 = 4_294_967_296.0;
const OCTANT_SHIFT: u32 = 29;
const OCTANT_UNITS: u32 = 1 << OCTANT_SHIFT;
const OCTANT_MASK: u32 = OCTANT_UNITS - 1;

impl Turn {
    /// No rotation.
    pub const ZERO: Self = Self(0);
    /// A quarter turn (90 degrees).
    pub const QUARTER: Self = Self(1 << 30);
    /// A half turn (180 degrees).
    pub const HALF: Self = Self(1 << 31);

    /// Build from a fraction of a full turn; any real value wraps into `[0, 1)`.
    pub fn from_fraction(fraction: f64) -> Self {
        let wrapped = fraction.rem_euclid(1.0);
        Self(((wrapped * TURN_UNITS).round() as u64 & u64::from(u32::MAX)) as u32)
    }

    /// Build from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_fraction(degrees / 360.0)
    }

    /// Build from radians.
    pub fn from_radians(radians: f64) -> Self {
        Self::from_fraction(radians / std::f64::consts::TAU)
    }

    /// Angle in degrees, within `[0, 360)`.
    pub fn to_degrees(self) -> f64 {
        f64::from(self.0) / TURN_UNITS * 360.0
    }

    /// Which 45-degree octant the angle falls in (`0..8`).
    pub fn octant(self) -> u32 {
        self.0 >> OCTANT_SHIFT
    }

    /// Sine and cosine without trig tables or libm calls.
    ///
    /// The remainder inside the octant is fed to short Taylor polynomials on
    /// `[0, pi/4]`; octant symmetry maps the result onto the full circle.
    /// Multiples of 90 degrees come out exact.
    pub fn sin_cos(self) -> (f32, f32) {
        let rem = self.0 & OCTANT_MASK;
        let fwd = f64::from(rem) / f64::from(OCTANT_UNITS) * FRAC_PI_4;
        let back = f64::from(OCTANT_UNITS - rem) / f64::from(OCTANT_UNITS) * FRAC_PI_4;

        let (s, c) = match self.octant() {
            0 => (sin_poly(fwd), cos_poly(fwd)),
            1 => (cos_poly(back), sin_poly(back)),
            2 => (cos_poly(fwd), -sin_poly(fwd)),
            3 => (sin_poly(back), -cos_poly(back)),
            4 => (-sin_poly(fwd), -cos_poly(fwd)),
            5 => (-cos_poly(back), -sin_poly(back)),
            6 => (-cos_poly(fwd), sin_poly(fwd)),
            _ => (-sin_poly(back), cos_poly(back)),
        };
        (s as f32, c as f32)
    }
}

impl std::ops::Add for Turn {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl std::ops::Neg for Turn {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

// Valid on [0, pi/4].
fn sin_poly(r: f64) -> f64 {
    let r2 = r * r;
    r * (1.0 - r2 / 6.0 * (1.0 - r2 / 20.0 * (1.0 - r2 / 42.0)))
}

// Valid on [0, pi/4].
fn cos_poly(r: f64) -> f64 {
    let r2 = r * r;
    1.0 - r2 / 2.0 * (1.0 - r2 / 12.0 * (1.0 - r2 / 30.0 * (1.0 - r2 / 56.0)))
}

/// Rounds half away from zero and saturates into `u8`.
#[inline]
pub(crate) fn round_to_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Exact 50/50 mix, rounding halves up.
#[inline]
pub(crate) fn half_mix(s: u8, d: u8) -> u8 {
    ((u16::from(s) + u16::from(d) + 1) >> 1) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
