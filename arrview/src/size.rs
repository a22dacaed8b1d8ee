#![warn(missing_docs)]
//! Compile-time size tags.
//!
//! Every view carries a size tag `S` which picks its storage layout. The choice is made once,
//! at the type level, so no view ever branches on its own flavor at run time.
//!
//! | Tag          | Stored fields        | Length        |
//! |--------------|----------------------|---------------|
//! | [`Dynamic`]  | location, length     | run time      |
//! | [`Fixed<N>`] | location             | `N` (nonzero) |
//! | [`Empty`]    | nothing              | `0`           |
//!
//! # Examples
//!
//! ```
//! use arrview::prelude::*;
//! assert_eq!(<Fixed<4> as ViewSize>::FIXED_LEN, Some(4));
//! assert_eq!(<Empty as ViewSize>::FIXED_LEN, Some(0));
//! assert_eq!(<Dynamic as ViewSize>::FIXED_LEN, None);
//! ```

use crate::contract::{check_null_iff_empty, fixed_len_mismatch, null_iff_empty_violated};
use core::ptr::NonNull;

/// A size tag: one of [`Dynamic`], [`Fixed<N>`] or [`Empty`].
///
/// This trait is sealed.
pub trait ViewSize: private::Sealed {
    /// The length every view with this tag has, or `None` if it is only known at run time.
    const FIXED_LEN: Option<usize>;
}

/// Size tags whose views may be empty: [`Dynamic`] and [`Empty`].
///
/// Only these tags have an [`empty()`][crate::ArrayView::empty] constructor. A
/// `Fixed<N>` view always has `N > 0` elements.
///
/// ```compile_fail
/// use arrview::prelude::*;
/// let v: ArrayView<u8, Fixed<3>> = ArrayView::empty();
/// ```
pub trait AllowsEmpty: ViewSize {}

/// The length of the view is stored alongside its location and known only at run time.
#[derive(Debug, Clone, Copy)]
pub struct Dynamic;

/// The view has exactly `N` elements, and `N` is not stored.
///
/// `N` must be nonzero; use [`Empty`] for the zero-length flavor. Building a
/// `Fixed<0>` view is a compile-time error.
///
/// ```compile_fail
/// use arrview::prelude::*;
/// let a: [u8; 0] = [];
/// let v: ArrayView<u8, Fixed<0>> = ArrayView::from_array(&a);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fixed<const N: usize>;

/// The view has no elements and no storage at all.
#[derive(Debug, Clone, Copy)]
pub struct Empty;

pub(crate) mod private {
    use core::ptr::NonNull;

    /// Storage for one size tag. Locations are type-erased to keep views covariant in `T`.
    pub trait Sealed {
        type Location: Copy;
        type Length: Copy;

        /// Checks the construction invariants and returns the fields to store.
        /// Panics on any violation.
        fn pack(location: Option<NonNull<u8>>, len: usize) -> (Self::Location, Self::Length);
        fn location(location: Self::Location) -> Option<NonNull<u8>>;
        fn length(len: Self::Length) -> usize;
    }
}

impl private::Sealed for Dynamic {
    type Location = Option<NonNull<u8>>;
    type Length = usize;

    #[inline(always)]
    fn pack(location: Option<NonNull<u8>>, len: usize) -> (Self::Location, Self::Length) {
        check_null_iff_empty(location, len);
        (location, len)
    }

    #[inline(always)]
    fn location(location: Self::Location) -> Option<NonNull<u8>> {
        location
    }

    #[inline(always)]
    fn length(len: usize) -> usize {
        len
    }
}

impl ViewSize for Dynamic {
    const FIXED_LEN: Option<usize> = None;
}

impl AllowsEmpty for Dynamic {}

impl<const N: usize> Fixed<N> {
    const NONZERO: () = assert!(N > 0, "Fixed<0> is not a view size, use Empty");
}

impl<const N: usize> private::Sealed for Fixed<N> {
    type Location = NonNull<u8>;
    type Length = ();

    #[inline(always)]
    fn pack(location: Option<NonNull<u8>>, len: usize) -> (Self::Location, Self::Length) {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO;
        if len != N {
            fixed_len_mismatch(N, len);
        }
        match location {
            Some(location) => (location, ()),
            None => null_iff_empty_violated(false, len),
        }
    }

    #[inline(always)]
    fn location(location: Self::Location) -> Option<NonNull<u8>> {
        Some(location)
    }

    #[inline(always)]
    fn length(_len: ()) -> usize {
        N
    }
}

impl<const N: usize> ViewSize for Fixed<N> {
    const FIXED_LEN: Option<usize> = Some(N);
}

impl private::Sealed for Empty {
    type Location = ();
    type Length = ();

    #[inline(always)]
    fn pack(location: Option<NonNull<u8>>, len: usize) -> (Self::Location, Self::Length) {
        if len != 0 {
            fixed_len_mismatch(0, len);
        }
        if location.is_some() {
            null_iff_empty_violated(true, 0);
        }
        ((), ())
    }

    #[inline(always)]
    fn location(_location: ()) -> Option<NonNull<u8>> {
        None
    }

    #[inline(always)]
    fn length(_len: ()) -> usize {
        0
    }
}

impl ViewSize for Empty {
    const FIXED_LEN: Option<usize> = Some(0);
}

impl AllowsEmpty for Empty {}

#[cfg(test)]
mod tests {
    use super::private::Sealed;
    use super::*;

    fn some_location() -> Option<NonNull<u8>> {
        Some(NonNull::dangling())
    }

    #[test]
    fn dynamic_accepts_matching_pairs() {
        let (loc, len) = Dynamic::pack(None, 0);
        assert_eq!(Dynamic::location(loc), None);
        assert_eq!(Dynamic::length(len), 0);

        let (loc, len) = Dynamic::pack(some_location(), 7);
        assert_eq!(Dynamic::location(loc), some_location());
        assert_eq!(Dynamic::length(len), 7);
    }

    #[test]
    #[should_panic(expected = "null if and only if")]
    fn dynamic_rejects_location_without_length() {
        Dynamic::pack(some_location(), 0);
    }

    #[test]
    #[should_panic(expected = "null if and only if")]
    fn dynamic_rejects_length_without_location() {
        Dynamic::pack(None, 3);
    }

    #[test]
    fn fixed_reports_its_constant() {
        let (loc, len) = Fixed::<3>::pack(some_location(), 3);
        assert_eq!(Fixed::<3>::location(loc), some_location());
        assert_eq!(Fixed::<3>::length(len), 3);
    }

    #[test]
    #[should_panic(expected = "fixed length 3")]
    fn fixed_rejects_other_lengths() {
        Fixed::<3>::pack(some_location(), 2);
    }

    #[test]
    #[should_panic(expected = "null if and only if")]
    fn fixed_rejects_null() {
        Fixed::<3>::pack(None, 3);
    }

    #[test]
    fn empty_is_always_none() {
        let (loc, len) = Empty::pack(None, 0);
        assert_eq!(Empty::location(loc), None);
        assert_eq!(Empty::length(len), 0);
    }

    #[test]
    #[should_panic(expected = "null if and only if")]
    fn empty_rejects_location() {
        Empty::pack(some_location(), 0);
    }

    #[test]
    #[should_panic(expected = "fixed length 0")]
    fn empty_rejects_length() {
        Empty::pack(None, 1);
    }
}
