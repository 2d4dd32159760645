use lazy_static::*;

use crate::BigInt;
use crate::big_int_constants::*;

lazy_static! {
    /// `0..=MAX_CONSTANT`, indexed by value.
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::small(n as u32, false));
    /// `0..=-MAX_CONSTANT`, indexed by absolute value.
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] =
        std::array::from_fn(|n| BigInt::small(n as u32, true));
}
