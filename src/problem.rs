// We need to refer to these types in the documentation
#[allow(unused_imports)]
use crate::Rational;

/// Problems when parsing or constructing a [`Rational`], or attempting
/// arithmetic with one

#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Problem {
    /// Tried to make a fraction with a zero denominator
    ZeroDenominator,
    /// The text wasn't an integer or a `/`-separated pair of integers,
    /// carries the offending input
    BadRational(String),
    /// Tried to divide by zero
    DivideByZero,
}

use std::fmt;

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::ZeroDenominator => f.write_str("denominator must be non-zero"),
            Problem::BadRational(text) => {
                write!(
                    f,
                    "expecting a rational in the form 'numerator/denominator' or 'numerator' but was: '{text}'"
                )
            }
            Problem::DivideByZero => f.write_str("attempted division by zero"),
        }
    }
}

impl std::error::Error for Problem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let bad = Problem::BadRational("5/a".to_owned());
        let text = format!("{bad}");
        assert!(text.contains("'5/a'"));
        let zero = format!("{}", Problem::ZeroDenominator);
        assert_eq!(zero, "denominator must be non-zero");
    }
}
