//! Fatal contract violations.
//!
//! Every function here panics. They are kept out of line so the checks stay cheap on the
//! happy path.

use core::ptr::NonNull;

#[inline(always)]
pub(crate) fn check_null_iff_empty(location: Option<NonNull<u8>>, len: usize) {
    if location.is_none() != (len == 0) {
        null_iff_empty_violated(location.is_some(), len);
    }
}

#[inline(never)]
#[cold]
pub(crate) fn null_iff_empty_violated(has_location: bool, len: usize) -> ! {
    let location = if has_location { "non-null" } else { "null" };
    panic!(
        "view location must be null if and only if the length is zero (location is {}, length is {})",
        location, len
    )
}

#[inline(never)]
#[cold]
pub(crate) fn fixed_len_mismatch(expected: usize, actual: usize) -> ! {
    panic!(
        "view has fixed length {} but was constructed with length {}",
        expected, actual
    )
}

#[inline(never)]
#[cold]
pub(crate) fn index_out_of_bounds(index: usize, len: usize) -> ! {
    panic!(
        "view index out of bounds: the length is {} but the index is {}",
        len, index
    )
}
