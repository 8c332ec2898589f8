//! Wraparound arithmetic on the 10-stem and 12-branch cycles.
//!
//! Ring positions are 0-based and always reduced to the non-negative
//! representative (Euclidean remainder), so `wrap12(-1) == 11`.

use crate::error::BaseError;

/// Length of the stem cycle.
pub const STEM_CYCLE: i32 = 10;

/// Length of the branch cycle and of the palace ring.
pub const BRANCH_CYCLE: i32 = 12;

/// Reduce `index` into `[0, modulus)`.
///
/// Fails with [`BaseError::InvalidModulus`] when `modulus <= 0`.
pub fn wrap(index: i32, modulus: i32) -> Result<i32, BaseError> {
    if modulus <= 0 {
        return Err(BaseError::InvalidModulus(modulus));
    }
    Ok(index.rem_euclid(modulus))
}

/// Reduce onto the 12-position ring.
pub const fn wrap12(index: i32) -> usize {
    index.rem_euclid(BRANCH_CYCLE) as usize
}

/// Reduce onto the 10-stem cycle.
pub const fn wrap10(index: i32) -> usize {
    index.rem_euclid(STEM_CYCLE) as usize
}

/// Diametrically opposite ring position (`index + 6`).
pub const fn opposite(index: usize) -> usize {
    wrap12(index as i32 + BRANCH_CYCLE / 2)
}

/// Mirror ring position (`12 - index`), the counterpart-star axis.
pub const fn mirror(index: usize) -> usize {
    wrap12(BRANCH_CYCLE - index as i32)
}

/// Step `index` by a signed offset around the ring.
pub const fn jump(index: usize, offset: i32) -> usize {
    wrap12(index as i32 + offset)
}
