use crate::{Error, Result};

/// Integer types accepted as list positions and capacities.
///
/// Signed types are accepted on purpose: a negative position is reported as
/// [`Error::IndexOutOfRange`] rather than being unrepresentable, and a
/// negative capacity as [`Error::InvalidArgument`].
pub trait ListIndex: Copy {
    /// Widens the value without loss, keeping its sign.
    fn to_i128(self) -> i128;
}

macro_rules! impl_list_index {
    ($($t:ty),*) => {
        $(
            impl ListIndex for $t {
                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_list_index!(usize, u32, u64, isize, i32, i64);

/// Returns `index` as a `usize` if it addresses an element: `0 <= index < len`.
#[inline]
pub(crate) fn check_index(index: impl ListIndex, len: usize) -> Result<usize> {
    checked(index.to_i128(), len as i128, len)
}

/// Returns `index` as a `usize` if it is an insertion point: `0 <= index <= len`.
#[inline]
pub(crate) fn check_position(index: impl ListIndex, len: usize) -> Result<usize> {
    checked(index.to_i128(), len as i128 + 1, len)
}

#[inline]
fn checked(index: i128, bound: i128, len: usize) -> Result<usize> {
    if index < 0 || index >= bound {
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(index as usize)
}

/// Returns `capacity` as a `usize` if it is strictly positive.
#[inline]
pub(crate) fn check_capacity(capacity: impl ListIndex) -> Result<usize> {
    let capacity = capacity.to_i128();
    if capacity <= 0 {
        return Err(Error::InvalidArgument { capacity });
    }
    usize::try_from(capacity).map_err(|_| Error::InvalidArgument { capacity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_bounds() {
        assert_eq!(check_index(0_usize, 1), Ok(0));
        assert_eq!(check_index(4_i32, 5), Ok(4));
        assert_eq!(
            check_index(5_usize, 5),
            Err(Error::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            check_index(-1_i64, 5),
            Err(Error::IndexOutOfRange { index: -1, len: 5 })
        );
        assert!(check_index(0_u32, 0).is_err());
    }

    #[test]
    fn test_check_position_reports_real_len() {
        assert_eq!(check_position(0_usize, 0), Ok(0));
        assert_eq!(check_position(4_i32, 4), Ok(4));
        assert_eq!(
            check_position(5_i32, 4),
            Err(Error::IndexOutOfRange { index: 5, len: 4 })
        );
        assert_eq!(
            check_position(-1_i32, 0),
            Err(Error::IndexOutOfRange { index: -1, len: 0 })
        );
    }

    #[test]
    fn test_check_capacity() {
        assert_eq!(check_capacity(8_usize), Ok(8));
        assert_eq!(
            check_capacity(0_usize),
            Err(Error::InvalidArgument { capacity: 0 })
        );
        assert_eq!(
            check_capacity(-2_i32),
            Err(Error::InvalidArgument { capacity: -2 })
        );
    }

    #[test]
    fn test_extreme_values_keep_sign() {
        assert_eq!(usize::MAX.to_i128(), usize::MAX as i128);
        assert_eq!(i64::MIN.to_i128(), i64::MIN as i128);
        assert!(check_index(i64::MIN, usize::MAX).is_err());
    }
}
