use crate::Rational;
use num::BigInt;

// Widening conversions from primitive integers. These are pure adapters,
// every fraction still goes through the canonicalizing constructor.

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Rational {
        Rational::from_bigint(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Rational {
        Rational::from_bigint(BigInt::from(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Rational {
        Rational::from_bigint(BigInt::from(n))
    }
}

impl From<i16> for Rational {
    fn from(n: i16) -> Rational {
        Rational::from_bigint(BigInt::from(n))
    }
}

impl From<i8> for Rational {
    fn from(n: i8) -> Rational {
        Rational::from_bigint(BigInt::from(n))
    }
}

impl From<u32> for Rational {
    fn from(n: u32) -> Rational {
        Rational::from_bigint(BigInt::from(n))
    }
}

impl From<u16> for Rational {
    fn from(n: u16) -> Rational {
        Rational::from_bigint(BigInt::from(n))
    }
}

impl From<u8> for Rational {
    fn from(n: u8) -> Rational {
        Rational::from_bigint(BigInt::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening() {
        let five: Rational = 5_i32.into();
        assert_eq!(five, Rational::new(5));
        let minus_two: Rational = (-2_i64).into();
        assert_eq!(minus_two, Rational::new(-2));
        let large: Rational = 4_000_000_000_u32.into();
        assert_eq!(large, Rational::new(4_000_000_000));
    }

    #[test]
    fn widening_narrow() {
        let five: Rational = 5_u8.into();
        assert_eq!(five, Rational::new(5));
        let byte_max: Rational = u8::MAX.into();
        assert_eq!(byte_max, Rational::new(255));
        let minus_one: Rational = (-1_i8).into();
        assert_eq!(minus_one, Rational::new(-1));
        let short_min: Rational = i16::MIN.into();
        assert_eq!(short_min, Rational::new(-32_768));
        let short_max: Rational = u16::MAX.into();
        assert_eq!(short_max, Rational::new(65_535));
    }

    #[test]
    fn from_bigint() {
        let n: BigInt = "912016490186296920119201192141970416029".parse().unwrap();
        let value: Rational = n.into();
        assert!(value.is_integer());
        assert_eq!(
            value.to_string(),
            "912016490186296920119201192141970416029"
        );
    }
}
