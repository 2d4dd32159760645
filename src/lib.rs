//! Big Ints \
//! This crate provides [`BigInt`]: arbitrary-precision signed integers with
//! addition, subtraction, multiplication, truncating division with remainder,
//! right shift, a restricted bitwise AND, comparisons, and conversions to and
//! from `i64` and to a decimal string.
//!
//! Misuse (division by zero, converting a value that does not fit in an
//! `i64`, shifting by a negative amount) is reported as a [`BigIntError`] by
//! the fallible methods; the operator forms panic with the same message.
//!
//! ```
//! use big_ints::BigInt;
//!
//! let (q, r) = BigInt::from(329).div_mod(&BigInt::from(87)).unwrap();
//! assert_eq!(q.to_str(), "3");
//! assert_eq!(r.to_str(), "68");
//! assert_eq!(BigInt::from(105).to_string(), "105");
//! ```

mod big_int;
mod big_int_cache;
mod big_int_constants;
mod error;

pub use big_int::BigInt;
pub use big_int_constants::{LIMB_BASE, LIMB_BITS};
pub use error::{BigIntError, Result};

#[cfg(test)]
mod tests {
    use crate::{BigInt, BigIntError};

    #[test]
    fn it_works() {
        let a = BigInt::from(10_000_000_000_000_i64);
        let b = BigInt::from(900_000_000_000_i64);
        assert_eq!((&a + &b).to_str(), "10900000000000");
        assert_eq!((&a - &b).to_str(), "9100000000000");
        assert_eq!((&a * &b).to_str(), "9000000000000000000000000");
        assert_eq!((&a / &b).to_str(), "11");
        assert_eq!((&a % &b).to_str(), "100000000000");
        assert_eq!((&a >> 10).to_str(), "9765625000");
    }

    #[test]
    fn errors_are_reported() {
        let a = BigInt::from(7);
        assert_eq!(a.div_mod(&BigInt::new()), Err(BigIntError::DivisionByZero));
        assert_eq!(a.checked_shr(-1), Err(BigIntError::NegativeShift { amount: -1 }));
        let wide = BigInt::from(i64::MAX) + BigInt::from(1);
        assert_eq!(wide.to_i64(), Err(BigIntError::ConversionOverflow));
        assert_eq!(i64::try_from(&(wide - BigInt::from(1))), Ok(i64::MAX));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = BigInt::from(1) / BigInt::new();
    }

    #[test]
    #[should_panic(expected = "cannot shift by a negative amount")]
    fn shift_operator_panics_on_negative_amount() {
        let mut a = BigInt::from(1);
        a >>= -3;
    }
}
