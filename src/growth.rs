/// Rule choosing the next capacity of a full [`GrowableArray`].
///
/// Any geometric rule keeps [`push_back`] amortized O(1). The policy is picked
/// once per array type, as its second type parameter:
///
/// ```
/// use platform_vec::{GrowableArray, OneAndHalf};
///
/// let mut array = GrowableArray::<u64, OneAndHalf>::with_policy();
/// for i in 0..4 {
///     array.push_back(i)?;
/// }
/// // 0 -> 1 -> 2 -> 4
/// assert_eq!(array.capacity(), 4);
/// # Ok::<(), platform_vec::Error>(())
/// ```
///
/// [`GrowableArray`]: crate::GrowableArray
/// [`push_back`]: crate::GrowableArray::push_back
pub trait GrowthPolicy {
    /// Capacity to move to when all `current` slots are in use.
    ///
    /// Must be strictly greater than `current`, `None` if it overflows `usize`.
    fn grow(current: usize) -> Option<usize>;
}

/// `2c + 1`: the `+1` moves an unallocated array off zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DoublePlusOne;

impl GrowthPolicy for DoublePlusOne {
    fn grow(current: usize) -> Option<usize> {
        current.checked_mul(2)?.checked_add(1)
    }
}

/// `c + c/2 + 1`: less slack per reallocation, more reallocations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OneAndHalf;

impl GrowthPolicy for OneAndHalf {
    fn grow(current: usize) -> Option<usize> {
        current.checked_add(current / 2)?.checked_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_plus_one() {
        let caps: Vec<_> = std::iter::successors(Some(0), |&c| DoublePlusOne::grow(c)).take(5).collect();
        assert_eq!(caps, [0, 1, 3, 7, 15]);
    }

    #[test]
    fn one_and_half() {
        let caps: Vec<_> = std::iter::successors(Some(0), |&c| OneAndHalf::grow(c)).take(6).collect();
        assert_eq!(caps, [0, 1, 2, 4, 7, 11]);
    }

    #[test]
    fn overflow() {
        assert_eq!(DoublePlusOne::grow(usize::MAX / 2 + 1), None);
        assert_eq!(OneAndHalf::grow(usize::MAX), None);
    }
}
