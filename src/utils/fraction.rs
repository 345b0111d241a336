use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::{Error, Result};

/// Exact non-negative rational, always held in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Fraction {
    pub const ZERO: Fraction = Fraction { numerator: 0, denominator: 1 };

    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    // Caller guarantees denominator != 0.
    fn reduced(numerator: u64, denominator: u64) -> Self {
        let g = gcd(numerator, denominator);
        Self {
            numerator: numerator / g,
            denominator: denominator / g,
        }
    }

    /// Const constructor for literals. Reduces to lowest terms.
    ///
    /// # Panics
    /// On a zero denominator (a compile error when used in a `const`).
    pub const fn from_parts(numerator: u64, denominator: u64) -> Self {
        assert!(denominator != 0, "fraction denominator must be non-zero");
        let g = gcd(numerator, denominator);
        Self {
            numerator: numerator / g,
            denominator: denominator / g,
        }
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Closest fraction whose denominator is at most `max_denominator`.
    ///
    /// Walks the continued-fraction convergents until the next one would overflow
    /// the bound, then picks between the last convergent and the best
    /// semiconvergent. On a tie the convergent wins.
    pub fn limit_denominator(&self, max_denominator: u64) -> Result<Self> {
        if max_denominator == 0 {
            return Err(Error::ZeroDenominator);
        }
        if self.denominator <= max_denominator {
            return Ok(*self);
        }

        let (mut p0, mut q0, mut p1, mut q1) = (0u64, 1u64, 1u64, 0u64);
        let (mut n, mut d) = (self.numerator, self.denominator);
        loop {
            let a = n / d;
            let q2 = q0 + a * q1;
            if q2 > max_denominator {
                break;
            }
            (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);
            (n, d) = (d, n - a * d);
        }

        let k = (max_denominator - q0) / q1;
        let semiconvergent = Self::reduced(p0 + k * p1, q0 + k * q1);
        let convergent = Self::reduced(p1, q1);

        if self.distance(&convergent) <= self.distance(&semiconvergent) {
            Ok(convergent)
        } else {
            Ok(semiconvergent)
        }
    }

    /// |self - other| as an unreduced (numerator, denominator) pair.
    fn distance(&self, other: &Self) -> Distance {
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        Distance {
            numerator: lhs.abs_diff(rhs),
            denominator: self.denominator as u128 * other.denominator as u128,
        }
    }
}

#[derive(PartialEq, Eq)]
struct Distance {
    numerator: u128,
    denominator: u128,
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.numerator as u128 * other.denominator as u128;
        let rhs = other.numerator as u128 * self.denominator as u128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        let g = gcd(self.denominator, rhs.denominator);
        let lcm = self.denominator / g * rhs.denominator;
        let numerator =
            self.numerator * (lcm / self.denominator) + rhs.numerator * (lcm / rhs.denominator);
        Fraction::reduced(numerator, lcm)
    }
}

impl Sum for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Self {
        iter.fold(Fraction::ZERO, |acc, f| acc + f)
    }
}

impl<'a> Sum<&'a Fraction> for Fraction {
    fn sum<I: Iterator<Item = &'a Fraction>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: u64, d: u64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn new_reduces_to_lowest_terms() {
        let f = frac(6, 9);
        assert_eq!((f.numerator(), f.denominator()), (2, 3));
        assert_eq!(frac(0, 18), Fraction::ZERO);
        assert!(matches!(Fraction::new(1, 0), Err(Error::ZeroDenominator)));
    }

    #[test]
    fn from_parts_reduces_like_new() {
        let half = Fraction::from_parts(2, 4);
        assert_eq!(half, frac(1, 2));
        assert_eq!(half.cmp(&frac(1, 2)), Ordering::Equal);
        assert_eq!((half.numerator(), half.denominator()), (1, 2));
        assert_eq!(half.limit_denominator(3).unwrap(), frac(1, 2));
        assert_eq!(Fraction::from_parts(0, 7), Fraction::ZERO);
    }

    #[test]
    #[should_panic(expected = "denominator must be non-zero")]
    fn from_parts_rejects_zero_denominator() {
        let _ = Fraction::from_parts(1, 0);
    }

    #[test]
    fn addition_and_sum() {
        assert_eq!(frac(1, 9) + frac(1, 18), frac(1, 6));
        let total: Fraction = [frac(1, 9); 6].iter().sum();
        assert_eq!(total, frac(2, 3));
    }

    #[test]
    fn ordering_uses_value() {
        assert!(frac(1, 18) < frac(1, 9));
        assert_eq!(frac(2, 4).cmp(&frac(1, 2)), Ordering::Equal);
    }

    #[test]
    fn display_drops_unit_denominator() {
        assert_eq!(frac(4, 3).to_string(), "4/3");
        assert_eq!(frac(9, 9).to_string(), "1");
        assert_eq!(Fraction::ZERO.to_string(), "0");
    }

    #[test]
    fn limit_denominator_known_cases() {
        // Already within bound: unchanged.
        assert_eq!(frac(2, 3).limit_denominator(9).unwrap(), frac(2, 3));
        // pi approximations.
        assert_eq!(frac(314_159, 100_000).limit_denominator(10).unwrap(), frac(22, 7));
        assert_eq!(frac(314_159, 100_000).limit_denominator(100).unwrap(), frac(311, 99));
        // Near 2/3 from a long float-like expansion.
        assert_eq!(
            frac(6_666_666_667, 10_000_000_000).limit_denominator(9).unwrap(),
            frac(2, 3)
        );
        assert_eq!(frac(1, 4).limit_denominator(1).unwrap(), frac(0, 1));
        // 1/2 is equidistant from 0 and 1; the convergent 0 wins.
        assert_eq!(frac(1, 2).limit_denominator(1).unwrap(), frac(0, 1));
        assert!(frac(1, 2).limit_denominator(0).is_err());
    }
}
