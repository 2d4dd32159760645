//! # BigInt
//! Arbitrary-precision signed integers stored as a signed limb count and a
//! little-endian vector of 30-bit limbs.
//!
//! Every operator leaves its operands untouched and returns a freshly
//! allocated value; the compound operators (`+=`, `>>=`, ...) replace the
//! receiver wholesale.
//! # Example
//! ```
//! use big_ints::BigInt;
//!
//! let a = BigInt::from(1_i64 << 62);
//! let b = BigInt::from(-3);
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! println!("a / b = {}", &a / &b);
//! println!("a % b = {}", &a % &b);
//! println!("a >> 10 = {}", &a >> 10);
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    Shr, ShrAssign,
    BitAnd, BitAndAssign,
    Neg,
};

use tracing::{debug, trace};

use crate::big_int_cache::*;
use crate::big_int_constants::*;
use crate::error::{BigIntError, Result};

pub(crate) const ZERO: BigInt = BigInt { len: 0, mag: Vec::new() };

macro_rules! bit_length_u32 {
    ($n: expr) => {
        (u32::BITS - $n.leading_zeros()) as usize
    };
}

/// Implements a binary operator for every owned/borrowed operand combination
/// on top of a `fn(&BigInt, &BigInt) -> BigInt` kernel.
macro_rules! forward_binop {
    ($imp: ident, $method: ident, $kernel: ident) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$kernel(self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$kernel(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                BigInt::$kernel(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                BigInt::$kernel(&self, &rhs)
            }
        }
    };
}

macro_rules! forward_assign_op {
    ($imp: ident, $method: ident, $kernel: ident) => {
        impl $imp<&BigInt> for BigInt {
            fn $method(&mut self, rhs: &BigInt) {
                *self = BigInt::$kernel(&*self, rhs);
            }
        }

        impl $imp<BigInt> for BigInt {
            fn $method(&mut self, rhs: BigInt) {
                *self = BigInt::$kernel(&*self, &rhs);
            }
        }
    };
}

/// Arbitrary-precision signed integer.
///
/// `len` is the signed limb count: its absolute value is `mag.len()` and its
/// sign is the sign of the value. Zero is `len == 0` with no limbs, and the
/// most significant limb of any other value is non-zero, so equal values
/// always share one representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    len: isize,
    mag: Vec<u32>,
}

// 杂项辅助函数
impl BigInt {
    /// 计算绝对值的比特数
    fn bit_length(&self) -> usize {
        match self.mag.last() {
            None => 0,
            Some(top) => (self.mag.len() - 1) * LIMB_BITS as usize + bit_length_u32!(top),
        }
    }
    fn bit(&self, index: usize) -> bool {
        let limb = self.mag[index / LIMB_BITS as usize];
        (limb >> (index % LIMB_BITS as usize)) & 1 == 1
    }
    fn is_negation_of(&self, other: &BigInt) -> bool {
        self.len == -other.len && self.mag == other.mag
    }

    pub fn is_negative(&self) -> bool {
        self.len < 0
    }
    /// `-1`, `0` or `1` according to the sign of the value.
    pub fn signum(&self) -> i8 {
        self.len.signum() as i8
    }
    pub fn abs(&self) -> BigInt {
        BigInt { len: self.len.abs(), mag: self.mag.clone() }
    }
}

// 实现构造
impl BigInt {
    /// Returns zero.
    pub fn new() -> Self {
        ZERO
    }
    pub fn zero() -> Self {
        ZERO
    }
    /// Takes ownership of already computed limbs.
    ///
    /// `mag` must hold exactly `|len|` limbs. The result is not normalized;
    /// callers run [`BigInt::normalize`] before handing it out.
    pub(crate) fn from_limbs(mag: Vec<u32>, len: isize) -> Self {
        debug_assert_eq!(mag.len(), len.unsigned_abs());
        BigInt { len, mag }
    }
    /// Drops the zero limbs at the top and fixes the signed length.
    pub(crate) fn normalize(mut self) -> Self {
        while self.mag.last() == Some(&0) {
            self.mag.pop();
        }
        let len = self.mag.len() as isize;
        self.len = if self.len < 0 { -len } else { len };
        self
    }
    /// One-limb value, built without going through the cache.
    pub(crate) fn small(val: u32, negative: bool) -> Self {
        debug_assert!(val < LIMB_BASE);
        if val == 0 {
            ZERO
        } else {
            BigInt::from_limbs(vec![val], if negative { -1 } else { 1 })
        }
    }
    fn value_of(val: u64, negative: bool) -> Self {
        if val == 0 {
            return ZERO;
        }
        if val <= MAX_CONSTANT as u64 {
            return if negative {
                NEG_CACHE[val as usize].clone()
            } else {
                POS_CACHE[val as usize].clone()
            };
        }
        let mut mag = Vec::with_capacity(MAX_I64_LIMBS);
        let mut rest = val;
        while rest > 0 {
            mag.push((rest & LIMB_MASK as u64) as u32);
            rest >>= LIMB_BITS;
        }
        let len = mag.len() as isize;
        BigInt::from_limbs(mag, if negative { -len } else { len })
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u64, val < 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, usize, u64);
impl_signed_to_big_int!(i8, i16, i32, isize, i64);

// 实现转换
impl BigInt {
    /// Converts back to an `i64`.
    ///
    /// Fails with [`BigIntError::ConversionOverflow`] when the value lies
    /// outside `i64::MIN..=i64::MAX`.
    pub fn to_i64(&self) -> Result<i64> {
        let limbs = self.mag.len();
        if limbs > MAX_I64_LIMBS
            || (limbs == MAX_I64_LIMBS && self.mag[limbs - 1] >= I64_TOP_LIMB_BOUND)
        {
            debug!(len = self.len, "value too wide for i64");
            return Err(BigIntError::ConversionOverflow);
        }

        let abs = self
            .mag
            .iter()
            .rev()
            .fold(0_u64, |acc, &limb| (acc << LIMB_BITS) | limb as u64);

        if self.len < 0 {
            if abs > i64::MIN.unsigned_abs() {
                debug!(abs, "value below i64::MIN");
                return Err(BigIntError::ConversionOverflow);
            }
            Ok((abs as i64).wrapping_neg())
        } else {
            i64::try_from(abs).map_err(|_| {
                debug!(abs, "value above i64::MAX");
                BigIntError::ConversionOverflow
            })
        }
    }
    /// `true` for every value but zero.
    pub fn to_bool(&self) -> bool {
        self.len != 0
    }
    /// Renders the value in decimal, with a leading `-` when negative.
    pub fn to_str(&self) -> String {
        let digits = self.magnitude_digits();
        if self.len < 0 {
            format!("-{}", digits)
        } else {
            digits
        }
    }
    /// Peels decimal digits off the magnitude, least significant first.
    fn magnitude_digits(&self) -> String {
        if !self.to_bool() {
            return String::from("0");
        }
        let ten = &POS_CACHE[DECIMAL_RADIX];
        let mut digits: Vec<u8> = Vec::new();
        let mut rest = self.abs();
        while rest.to_bool() {
            let (quotient, digit) = BigInt::div_mod_non_negative(&rest, ten);
            digits.push(b'0' + digit.mag.first().copied().unwrap_or(0) as u8);
            rest = quotient;
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: &BigInt) -> Result<i64> {
        val.to_i64()
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(val: BigInt) -> Result<i64> {
        val.to_i64()
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.len >= 0, "", &self.magnitude_digits())
    }
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let BigInt { len, mag } = self;
        BigInt { len: -len, mag }
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// 实现加法
impl BigInt {
    fn add_impl(a: &BigInt, b: &BigInt) -> BigInt {
        // keep the operand with the larger signed length on the left
        if a.len < b.len {
            return BigInt::add_impl(b, a);
        }
        if a.is_negation_of(b) {
            return ZERO;
        }
        if b.len == 0 {
            return a.clone();
        }
        if a.len == 0 {
            return b.clone();
        }

        if a.len < 0 {
            // both negative
            return -BigInt::add_impl(&-a, &-b);
        }
        if b.len > 0 {
            let mag = BigInt::add_mag(&a.mag, &b.mag);
            let len = mag.len() as isize;
            return BigInt::from_limbs(mag, len).normalize();
        }

        // a > 0 > b, the larger magnitude decides the sign
        match BigInt::compare_mag(&a.mag, &b.mag) {
            Ordering::Greater => {
                let mag = BigInt::sub_mag(&a.mag, &b.mag);
                let len = mag.len() as isize;
                BigInt::from_limbs(mag, len).normalize()
            }
            Ordering::Less => {
                let mag = BigInt::sub_mag(&b.mag, &a.mag);
                let len = mag.len() as isize;
                BigInt::from_limbs(mag, -len).normalize()
            }
            Ordering::Equal => ZERO,
        }
    }

    /// Limb-wise sum of two magnitudes. The result has one extra limb only
    /// when the final carry escapes the top limb.
    fn add_mag(x: &[u32], y: &[u32]) -> Vec<u32> {
        let (long, short) = if x.len() >= y.len() { (x, y) } else { (y, x) };
        let mut result = Vec::with_capacity(long.len() + 1);
        let mut carry = 0_u32;
        for (i, &limb) in long.iter().enumerate() {
            let sum = limb + short.get(i).copied().unwrap_or(0) + carry;
            result.push(sum & LIMB_MASK);
            carry = sum >> LIMB_BITS;
        }
        if carry != 0 {
            result.push(carry);
        }
        result
    }

    /// `big - little` on magnitudes, requires `big >= little`.
    fn sub_mag(big: &[u32], little: &[u32]) -> Vec<u32> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0_i64;
        for (i, &limb) in big.iter().enumerate() {
            let mut difference = limb as i64 - little.get(i).copied().unwrap_or(0) as i64 - borrow;
            if difference < 0 {
                difference += LIMB_BASE as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(difference as u32);
        }
        debug_assert_eq!(borrow, 0, "sub_mag called with big < little");
        result
    }

    fn sub_impl(a: &BigInt, b: &BigInt) -> BigInt {
        BigInt::add_impl(a, &-b)
    }

    /// Pre-increment: `self = self + 1`.
    pub fn inc(&mut self) -> &mut Self {
        *self = BigInt::add_impl(self, &POS_CACHE[1]);
        self
    }
}

forward_binop!(Add, add, add_impl);
forward_assign_op!(AddAssign, add_assign, add_impl);

// 实现减法
forward_binop!(Sub, sub, sub_impl);
forward_assign_op!(SubAssign, sub_assign, sub_impl);

// 实现乘法
impl BigInt {
    /// Binary double-and-add: `O(log b)` additions of `O(n)` limbs each.
    fn mul_impl(a: &BigInt, b: &BigInt) -> BigInt {
        if !a.to_bool() || !b.to_bool() {
            return ZERO;
        }
        if a.len < 0 {
            if b.len < 0 {
                return BigInt::mul_impl(&-a, &-b);
            }
            return -BigInt::mul_impl(&-a, b);
        }
        if b.len < 0 {
            return -BigInt::mul_impl(a, &-b);
        }

        let one = &POS_CACHE[1];
        let mut multiplicand = a.clone();
        // never negative here, so the restricted `&` reads its low bit
        let mut multiplier = b.clone();
        let mut result = ZERO;
        while multiplier.to_bool() {
            if (&multiplier & one).to_bool() {
                result += &multiplicand;
            }
            multiplicand = &multiplicand + &multiplicand;
            multiplier = multiplier.shr_bits(1);
        }
        result
    }
}

forward_binop!(Mul, mul, mul_impl);
forward_assign_op!(MulAssign, mul_assign, mul_impl);

// 实现除法和求余
impl BigInt {
    /// Combined division and remainder.
    ///
    /// The quotient is truncated toward zero and the remainder carries the
    /// sign of the dividend, so `q * divisor + r == self` and
    /// `|r| < |divisor|`, the same convention as the primitive integers.
    ///
    /// Fails with [`BigIntError::DivisionByZero`] when `divisor` is zero.
    pub fn div_mod(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if !divisor.to_bool() {
            debug!(dividend_len = self.len, "division by zero");
            return Err(BigIntError::DivisionByZero);
        }
        Ok(BigInt::div_mod_signed(self, divisor))
    }
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_mod(divisor).map(|(quotient, _)| quotient)
    }
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt> {
        self.div_mod(divisor).map(|(_, remainder)| remainder)
    }

    fn div_mod_signed(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
        match (a.len < 0, b.len < 0) {
            (true, true) => {
                let (q, r) = BigInt::div_mod_signed(&-a, &-b);
                (q, -r)
            }
            (true, false) => {
                let (q, r) = BigInt::div_mod_signed(&-a, b);
                (-q, -r)
            }
            (false, true) => {
                let (q, r) = BigInt::div_mod_signed(a, &-b);
                (-q, r)
            }
            (false, false) => BigInt::div_mod_non_negative(a, b),
        }
    }

    /// Requires `a >= 0` and `b > 0`.
    fn div_mod_non_negative(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
        if *b == POS_CACHE[1] {
            return (a.clone(), ZERO);
        }
        match a.cmp(b) {
            Ordering::Equal => return (POS_CACHE[1].clone(), ZERO),
            Ordering::Less => return (ZERO, a.clone()),
            Ordering::Greater => {}
        }
        if b.mag.len() == 1 {
            BigInt::divide_one_limb(a, b.mag[0])
        } else {
            BigInt::divide_binary(a, b)
        }
    }

    /// Short division by a single limb, most significant limb first.
    fn divide_one_limb(a: &BigInt, divisor: u32) -> (BigInt, BigInt) {
        let divisor = divisor as u64;
        let mut quotient = vec![0_u32; a.mag.len()];
        let mut remainder = 0_u64;
        for (q, &limb) in quotient.iter_mut().zip(&a.mag).rev() {
            let current = (remainder << LIMB_BITS) | limb as u64;
            *q = (current / divisor) as u32;
            remainder = current % divisor;
        }
        (
            BigInt::from_limbs(quotient, a.len).normalize(),
            BigInt::from(remainder),
        )
    }

    /// Restoring shift-and-subtract division over the bits of `a`.
    ///
    /// Gives the same quotient and remainder as subtracting `b` until the
    /// rest drops below it, in `O(bits(a))` subtractions instead of
    /// `O(a / b)`.
    fn divide_binary(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
        let bits = a.bit_length();
        trace!(bits, divisor_limbs = b.mag.len(), "binary long division");

        let one = &POS_CACHE[1];
        let mut quotient = vec![0_u32; a.mag.len()];
        let mut remainder = ZERO;
        for index in (0..bits).rev() {
            remainder = &remainder + &remainder;
            if a.bit(index) {
                remainder += one;
            }
            if remainder >= *b {
                remainder -= b;
                quotient[index / LIMB_BITS as usize] |= 1 << (index % LIMB_BITS as usize);
            }
        }
        (BigInt::from_limbs(quotient, a.len).normalize(), remainder)
    }

    fn div_or_panic(a: &BigInt, b: &BigInt) -> BigInt {
        unwrap_or_panic(a.checked_div(b))
    }
    fn rem_or_panic(a: &BigInt, b: &BigInt) -> BigInt {
        unwrap_or_panic(a.checked_rem(b))
    }
}

/// The `std::ops` impls cannot return a `Result`, so they panic with the
/// error message instead, like the primitive integer operators do.
fn unwrap_or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(val) => val,
        Err(err) => panic!("{}", err),
    }
}

forward_binop!(Div, div, div_or_panic);
forward_assign_op!(DivAssign, div_assign, div_or_panic);
forward_binop!(Rem, rem, rem_or_panic);
forward_assign_op!(RemAssign, rem_assign, rem_or_panic);

// 实现右移
impl BigInt {
    /// `self >> n`, shifting the magnitude only, so negative values round
    /// toward zero: `-5 >> 1 == -2`.
    ///
    /// Fails with [`BigIntError::NegativeShift`] when `n < 0`.
    pub fn checked_shr(&self, n: i64) -> Result<BigInt> {
        if n < 0 {
            debug!(amount = n, "negative shift amount");
            return Err(BigIntError::NegativeShift { amount: n });
        }
        Ok(self.shr_bits(n as u64))
    }

    fn shr_bits(&self, n: u64) -> BigInt {
        if self.len < 0 {
            return -(-self).shr_bits(n);
        }
        if n == 0 || self.len == 0 {
            return self.clone();
        }

        let limb_bits = LIMB_BITS as u64;
        let whole_limbs = n / limb_bits;
        if whole_limbs >= self.mag.len() as u64 {
            return ZERO;
        }
        if whole_limbs > 0 {
            trace!(whole_limbs, len = self.len, "dropping low limbs");
        }

        let bits = (n % limb_bits) as u32;
        let mut mag = self.mag[whole_limbs as usize..].to_vec();
        if bits != 0 {
            let low_mask = (1_u32 << bits) - 1;
            let mut carry = 0_u32;
            for limb in mag.iter_mut().rev() {
                let fallen = *limb & low_mask;
                *limb = (*limb >> bits) | (carry << (LIMB_BITS - bits));
                carry = fallen;
            }
        }
        let len = mag.len() as isize;
        BigInt::from_limbs(mag, len).normalize()
    }
}

impl Shr<i64> for BigInt {
    type Output = BigInt;

    fn shr(self, n: i64) -> Self::Output {
        unwrap_or_panic(self.checked_shr(n))
    }
}

impl Shr<i64> for &BigInt {
    type Output = BigInt;

    fn shr(self, n: i64) -> Self::Output {
        unwrap_or_panic(self.checked_shr(n))
    }
}

impl ShrAssign<i64> for BigInt {
    fn shr_assign(&mut self, n: i64) {
        *self = unwrap_or_panic(self.checked_shr(n));
    }
}

// 实现大小比较
impl BigInt {
    fn compare_mag(x: &[u32], y: &[u32]) -> Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.len.cmp(&other.len) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let ord = self.mag.iter().rev().cmp(other.mag.iter().rev());
        if self.len < 0 {
            ord.reverse()
        } else {
            ord
        }
    }
}

// 实现按位与
impl BigInt {
    /// Bitwise AND of two non-negative values.
    ///
    /// This is not a two's-complement AND: if either operand is negative the
    /// left operand is returned unchanged. It only serves to read the low bits
    /// of values known to be non-negative.
    fn bitand_impl(a: &BigInt, b: &BigInt) -> BigInt {
        let mut mag = a.mag.clone();
        if a.len >= 0 && b.len >= 0 {
            for (i, limb) in mag.iter_mut().enumerate() {
                *limb &= b.mag.get(i).copied().unwrap_or(0);
            }
        }
        BigInt::from_limbs(mag, a.len).normalize()
    }
}

forward_binop!(BitAnd, bitand, bitand_impl);
forward_assign_op!(BitAndAssign, bitand_assign, bitand_impl);

#[cfg(test)]
fn assert_normalized(val: &BigInt) {
    assert_eq!(val.mag.len(), val.len.unsigned_abs(), "{:?}", val);
    if let Some(top) = val.mag.last() {
        assert_ne!(*top, 0, "leading zero limb in {:?}", val);
    }
    assert!(val.mag.iter().all(|&limb| limb < LIMB_BASE), "{:?}", val);
}

#[test]
fn test_from() {
    let big = BigInt::from(0);
    assert_eq!(big.len, 0);
    assert!(big.mag.is_empty());

    let big = BigInt::from(-7);
    assert_eq!(big.len, -1);
    assert_eq!(big.mag, vec![7]);

    let big = BigInt::from(LIMB_BASE as i64);
    assert_eq!(big.len, 2);
    assert_eq!(big.mag, vec![0, 1]);

    let big = BigInt::from(i64::MIN);
    assert_eq!(big.len, -3);
    assert_eq!(big.mag, vec![0, 0, 8]);

    let big = BigInt::from(u64::MAX);
    assert_eq!(big.len, 3);
    assert_eq!(big.mag, vec![LIMB_MASK, LIMB_MASK, 15]);
}

#[test]
fn test_from_limbs_then_normalize() {
    let big = BigInt::from_limbs(vec![5, 0, 0], -3).normalize();
    assert_eq!(big.len, -1);
    assert_eq!(big.mag, vec![5]);

    let big = BigInt::from_limbs(vec![0, 0], 2).normalize();
    assert_eq!(big, ZERO);
}

#[test]
fn test_add_carry_and_borrow() {
    let nine = BigInt::from(LIMB_MASK as i64);
    let ten = &nine + &POS_CACHE[1];
    assert_eq!(ten.mag, vec![0, 1]);
    assert_normalized(&ten);

    let back = &ten - &POS_CACHE[1];
    assert_eq!(back.len, 1);
    assert_eq!(back.mag, vec![LIMB_MASK]);

    let hundred = BigInt::from(1_i64 << (2 * LIMB_BITS));
    let ninety_nine = &hundred + &NEG_CACHE[1];
    assert_eq!(ninety_nine.mag, vec![LIMB_MASK, LIMB_MASK]);
    assert_normalized(&ninety_nine);

    let zero = &ninety_nine - &ninety_nine;
    assert_eq!(zero.len, 0);
    assert_normalized(&zero);
}

#[test]
fn test_mixed_sign_add_trims() {
    let a = BigInt::from((1_i64 << 31) + 1);
    let b = BigInt::from(-(1_i64 << 31));
    let sum = &a + &b;
    assert_eq!(sum.len, 1);
    assert_eq!(sum.mag, vec![1]);

    let sum = &b + &BigInt::from(1_i64 << 30);
    assert_eq!(sum.len, -2);
    assert_eq!(sum.mag, vec![0, 1]);
}

#[test]
fn test_mul() {
    let a = BigInt::from(1_i64 << 40);
    let b = BigInt::from(-(1_i64 << 40));
    let product = &a * &b;
    assert_eq!(product.len, -3);
    assert_eq!(product.mag, vec![0, 0, 1 << 20]);
    assert_normalized(&product);
}

#[test]
fn test_div_one_limb() {
    let a = BigInt::from(1_i64 << 62);
    let (q, r) = a.div_mod(&BigInt::from(1000)).unwrap();
    assert_eq!(q.to_i64().unwrap(), (1_i64 << 62) / 1000);
    assert_eq!(r.to_i64().unwrap(), (1_i64 << 62) % 1000);
    assert_normalized(&q);
    assert_normalized(&r);
}

#[test]
fn test_div_binary() {
    let a = BigInt::from(i64::MAX);
    let b = BigInt::from(3_i64 << 40);
    let (q, r) = a.div_mod(&b).unwrap();
    assert_eq!(q.to_i64().unwrap(), i64::MAX / (3_i64 << 40));
    assert_eq!(r.to_i64().unwrap(), i64::MAX % (3_i64 << 40));
    assert_normalized(&q);
    assert_normalized(&r);
}

#[test]
fn test_shr_limbs() {
    let a = BigInt::from(i64::MAX);
    let shifted = &a >> 30;
    assert_eq!(shifted.len, 2);
    assert_eq!(shifted.mag, vec![LIMB_MASK, 7]);

    let shifted = &a >> 59;
    assert_eq!(shifted.mag, vec![15]);
    assert_normalized(&shifted);

    assert_eq!(&a >> 90, ZERO);
    assert_eq!(&a >> 63, ZERO);
}

#[test]
fn test_bitand() {
    let a = BigInt::from((1_i64 << 35) | 0b1011);
    let b = BigInt::from(0b110);
    let and = &a & &b;
    assert_eq!(and.len, 1);
    assert_eq!(and.mag, vec![0b10]);

    let negative = BigInt::from(-12);
    assert_eq!(&negative & &b, negative);
    assert_eq!(&b & &negative, b);
    assert_eq!(&BigInt::from(8) & &b, ZERO);
}

#[test]
fn test_to_i64_bounds() {
    assert_eq!(BigInt::from(i64::MAX).to_i64(), Ok(i64::MAX));
    assert_eq!(BigInt::from(i64::MIN).to_i64(), Ok(i64::MIN));
    assert_eq!(BigInt::from(u64::MAX).to_i64(), Err(BigIntError::ConversionOverflow));
    let just_past = BigInt::from_limbs(vec![0, 0, 8], 3);
    assert_eq!(just_past.to_i64(), Err(BigIntError::ConversionOverflow));
    let four_limbs = BigInt::from_limbs(vec![0, 0, 0, 1], -4);
    assert_eq!(four_limbs.to_i64(), Err(BigIntError::ConversionOverflow));
}

#[test]
fn test_to_string() {
    assert_eq!(BigInt::new().to_str(), "0");
    assert_eq!(BigInt::from(105).to_str(), "105");
    assert_eq!(BigInt::from(-1_000_000_007).to_str(), "-1000000007");
    assert_eq!(BigInt::from(i64::MIN).to_str(), i64::MIN.to_string());
    assert_eq!(format!("{:>6}", BigInt::from(-42)), "   -42");
    assert_eq!(format!("{:+}", BigInt::from(42)), "+42");
}
