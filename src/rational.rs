use crate::Problem;
use num::{BigInt, Integer, One, Signed, Zero};

pub(crate) mod convert;

/// Ratio of two integers
///
/// This type is a fraction between two [`BigInt`] (the numerator and
/// denominator), stored canonically: always in lowest terms, with a strictly
/// positive denominator so that the sign lives entirely on the numerator.
/// Exactly one representation exists for each value, so equality and hashing
/// are structural.
///
/// Values are immutable. Every operation hands back a fresh canonical value
/// and leaves its operands untouched, so instances can be shared freely
/// across threads.
///
/// # Examples
///
/// Parsing a rational from a simple fraction
/// ```
/// use rationally::Rational;
/// let half: Rational = "9/18".parse().unwrap();
/// ```
///
/// Simple arithmetic
/// ```
/// use rationally::Rational;
/// let half = Rational::fraction(1, 2).unwrap();
/// let third = Rational::fraction(1, 3).unwrap();
/// let sum = half + third;
/// assert_eq!(sum.to_string(), "5/6");
/// ```

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Zero, the additive identity
    pub fn zero() -> Self {
        Self {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    /// One, the multiplicative identity
    pub fn one() -> Self {
        Self {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }

    /// The Rational corresponding to the provided [`i64`]
    pub fn new(n: i64) -> Self {
        Self::from_bigint(BigInt::from(n))
    }

    /// The Rational corresponding to the provided [`BigInt`]
    pub fn from_bigint(n: BigInt) -> Self {
        Self {
            numerator: n,
            denominator: BigInt::one(),
        }
    }

    /// The Rational corresponding to the provided [`i64`] numerator and
    /// denominator as a fraction
    ///
    /// A negative denominator is accepted, the sign moves to the numerator
    ///
    /// # Example
    ///
    /// ```
    /// use rationally::Rational;
    /// let half = Rational::fraction(-2, -4).unwrap();
    /// assert_eq!(half, Rational::fraction(1, 2).unwrap());
    /// ```
    pub fn fraction(n: i64, d: i64) -> Result<Self, Problem> {
        Self::from_bigint_fraction(BigInt::from(n), BigInt::from(d))
    }

    /// The Rational corresponding to the provided [`BigInt`] numerator and
    /// denominator as a fraction
    ///
    /// Fails with [`Problem::ZeroDenominator`] when the denominator is zero;
    /// any other pair is accepted and canonicalized
    pub fn from_bigint_fraction(numerator: BigInt, denominator: BigInt) -> Result<Self, Problem> {
        if denominator.is_zero() {
            return Err(Problem::ZeroDenominator);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    // Canonical form from any pair with a non-zero denominator: divide both
    // parts by their gcd, then multiply both by the denominator's sign.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        let divisor = numerator.gcd(&denominator);
        let numerator = numerator / &divisor;
        let denominator = denominator / divisor;
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// The inverse of this Rational
    ///
    /// Fails with [`Problem::DivideByZero`] since zero has no inverse
    ///
    /// # Example
    ///
    /// ```
    /// use rationally::Rational;
    /// let five = Rational::new(5);
    /// let a_fifth = Rational::fraction(1, 5).unwrap();
    /// assert_eq!(five.inverse().unwrap(), a_fifth);
    /// ```
    pub fn inverse(self) -> Result<Self, Problem> {
        if self.numerator.is_zero() {
            return Err(Problem::DivideByZero);
        }
        Ok(Self::reduced(self.denominator, self.numerator))
    }

    /// Divide by another Rational
    ///
    /// Division is the one fallible operator, so unlike `+`, `-` and `*` it
    /// is a named method returning a [`Result`]
    ///
    /// # Example
    ///
    /// ```
    /// use rationally::Rational;
    /// let half = Rational::fraction(1, 2).unwrap();
    /// let third = Rational::fraction(1, 3).unwrap();
    /// assert_eq!(half.divide(third).unwrap().to_string(), "3/2");
    /// ```
    pub fn divide(self, other: Self) -> Result<Self, Problem> {
        // A zero divisor shows up as a zero denominator in the raw result
        Self::from_bigint_fraction(
            self.numerator * other.denominator,
            self.denominator * other.numerator,
        )
        .map_err(|_| Problem::DivideByZero)
    }

    /// Checks if the value is an integer
    ///
    /// # Example
    ///
    /// ```
    /// use rationally::Rational;
    /// assert!(Rational::new(5).is_integer());
    /// assert!(Rational::fraction(16, 4).unwrap().is_integer());
    /// assert!(!Rational::fraction(5, 4).unwrap().is_integer());
    /// ```
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Checks if the value is zero
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// The canonical numerator, with the value's sign
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The canonical denominator, always strictly positive
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }
}

use core::fmt;

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl std::str::FromStr for Rational {
    type Err = Problem;

    /// Accepts `"N"` or `"N/D"` where each side is whatever [`BigInt`]'s
    /// decimal parser accepts, an optional `-` then decimal digits
    fn from_str(s: &str) -> Result<Self, Problem> {
        let integer = |text: &str| -> Result<BigInt, Problem> {
            text.parse().map_err(|_| Problem::BadRational(s.to_owned()))
        };
        match s.split_once('/') {
            None => Ok(Self::from_bigint(integer(s)?)),
            Some((_, rest)) if rest.contains('/') => Err(Problem::BadRational(s.to_owned())),
            Some((n, d)) => Self::from_bigint_fraction(integer(n)?, integer(d)?),
        }
    }
}

use core::ops::*;

impl Add for Rational {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let numerator = &self.numerator * &other.denominator + &other.numerator * &self.denominator;
        let denominator = self.denominator * other.denominator;
        Self::reduced(numerator, denominator)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + -other
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let numerator = self.numerator * other.numerator;
        let denominator = self.denominator * other.denominator;
        Self::reduced(numerator, denominator)
    }
}

impl Ord for Rational {
    /// Cross-multiplication, sound because both denominators are positive
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let left = &self.numerator * &other.denominator;
        let right = &other.numerator * &self.denominator;
        left.cmp(&right)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
