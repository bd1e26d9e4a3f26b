//! Exact number types used where a worksheet must print a precise result.
//!
//! `Fraction` keeps rationals in lowest terms; `Decimal` is a signed integer
//! coefficient scaled by a power of ten. Neither touches floating point.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Greatest common divisor, always non-negative. `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

// ---------------------------------------------------------------------------
// Fraction
// ---------------------------------------------------------------------------

/// A rational number in lowest terms with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

impl Fraction {
    /// Panics on a zero denominator; callers pick ranges that exclude it.
    pub fn new(numer: i64, denom: i64) -> Self {
        assert!(denom != 0, "fraction with zero denominator");
        let sign = if denom < 0 { -1 } else { 1 };
        let g = gcd(numer, denom).max(1);
        Fraction { numer: sign * numer / g, denom: sign * denom / g }
    }

    pub fn numer(self) -> i64 {
        self.numer
    }

    pub fn denom(self) -> i64 {
        self.denom
    }

    pub fn is_integer(self) -> bool {
        self.denom == 1
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.denom + rhs.numer * self.denom, self.denom * rhs.denom)
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.denom - rhs.numer * self.denom, self.denom * rhs.denom)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.numer * rhs.denom, self.denom * rhs.numer)
    }
}

// ---------------------------------------------------------------------------
// Decimal
// ---------------------------------------------------------------------------

/// `coefficient × 10^exponent`, kept unnormalised so trailing zeros of the
/// coefficient survive into the printed form (`1230 × 10^-4` is `0.1230`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    coefficient: i64,
    exponent: i32,
}

impl Decimal {
    pub fn new(coefficient: i64, exponent: i32) -> Self {
        Decimal { coefficient, exponent }
    }

    /// `mantissa / 10^places`.
    pub fn scaled(mantissa: i64, places: u32) -> Self {
        Decimal::new(mantissa, -(places as i32))
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        Decimal::new(self.coefficient * rhs.coefficient, self.exponent + rhs.exponent)
    }
}

/// Plain notation while the adjusted exponent stays at or above -6,
/// scientific (`1.1E-7`) below that or for positive exponents.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.coefficient < 0 { "-" } else { "" };
        let digits = self.coefficient.unsigned_abs().to_string();
        let n = digits.len() as i64;
        let exp = i64::from(self.exponent);
        let left = exp + n;

        let dot = if exp <= 0 && left > -6 { left } else { 1 };

        let (int_part, frac_part) = if dot <= 0 {
            ("0".to_string(), format!(".{}{}", "0".repeat((-dot) as usize), digits))
        } else if dot >= n {
            (format!("{}{}", digits, "0".repeat((dot - n) as usize)), String::new())
        } else {
            let (head, tail) = digits.split_at(dot as usize);
            (head.to_string(), format!(".{tail}"))
        };

        write!(f, "{sign}{int_part}{frac_part}")?;
        if left != dot {
            write!(f, "E{:+}", left - dot)?;
        }
        Ok(())
    }
}
