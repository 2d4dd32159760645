/// Number of bits held by one limb.
pub const LIMB_BITS: u32 = 30;

/// Radix of one limb, `2^LIMB_BITS`.
pub const LIMB_BASE: u32 = 1 << LIMB_BITS;

pub const LIMB_MASK: u32 = LIMB_BASE - 1;

/// Widest magnitude, in limbs, that may still convert to an `i64`.
pub const MAX_I64_LIMBS: usize = 3;

/// At `MAX_I64_LIMBS` limbs the top limb must stay below this bound for the
/// magnitude to fit in 64 bits.
pub const I64_TOP_LIMB_BOUND: u32 = 1 << (u64::BITS - LIMB_BITS * (MAX_I64_LIMBS as u32 - 1));

/// Largest absolute value kept in the small value cache.
pub const MAX_CONSTANT: usize = 16;

/// Radix used by the decimal rendering.
pub const DECIMAL_RADIX: usize = 10;
