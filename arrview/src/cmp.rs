//! Identity comparison.
//!
//! Two views are equal when they reference the same location with the same length. The
//! elements are never read: this is "same window", not "same contents".
//!
//! ```
//! use arrview::prelude::*;
//! let a = [1, 2, 3];
//! let b = [1, 2, 3];
//! assert_ne!(ArrayView::from_slice(&a), ArrayView::from_slice(&b));
//! assert_eq!(ArrayView::from_slice(&a), ArrayView::from_array(&a));
//! ```

use crate::size::ViewSize;
use crate::view::ArrayView;
use crate::view_mut::ArrayViewMut;

use core::hash::{Hash, Hasher};

macro_rules! impl_identity_eq {
    ($lhs:ident, $rhs:ident) => {
        impl<'a, 'b, T, S1: ViewSize, S2: ViewSize> PartialEq<$rhs<'b, T, S2>> for $lhs<'a, T, S1> {
            #[inline]
            fn eq(&self, other: &$rhs<'b, T, S2>) -> bool {
                self.location() == other.location() && self.len() == other.len()
            }
        }
    };
}

impl_identity_eq!(ArrayView, ArrayView);
impl_identity_eq!(ArrayView, ArrayViewMut);
impl_identity_eq!(ArrayViewMut, ArrayView);
impl_identity_eq!(ArrayViewMut, ArrayViewMut);

impl<T, S: ViewSize> Eq for ArrayView<'_, T, S> {}
impl<T, S: ViewSize> Eq for ArrayViewMut<'_, T, S> {}

impl<T, S: ViewSize> Hash for ArrayView<'_, T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location().hash(state);
        self.len().hash(state);
    }
}

impl<T, S: ViewSize> Hash for ArrayViewMut<'_, T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location().hash(state);
        self.len().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use core::hash::{Hash, Hasher};

    /// FNV-1a, enough to observe that equal views hash equally.
    struct Fnv(u64);

    impl Hasher for Fnv {
        fn finish(&self) -> u64 {
            self.0
        }

        fn write(&mut self, bytes: &[u8]) {
            for b in bytes {
                self.0 ^= u64::from(*b);
                self.0 = self.0.wrapping_mul(0x100_0000_01b3);
            }
        }
    }

    fn hash_of<H: Hash>(h: &H) -> u64 {
        let mut state = Fnv(0xcbf2_9ce4_8422_2325);
        h.hash(&mut state);
        state.finish()
    }

    #[test]
    fn equivalence_relation() {
        let a = [1u8, 2, 3, 4];
        let x = ArrayView::from_slice(&a[..2]);
        let y: ArrayView<u8> = ArrayView::from_array(&a).subview(0, 2);
        let z = unsafe { ArrayView::<u8, Fixed<2>>::from_raw_parts(a.as_ptr(), 2) };

        assert_eq!(x, x);
        assert_eq!(x, y);
        assert_eq!(y, x);
        assert_eq!(y, z);
        assert_eq!(x, z);
    }

    #[test]
    fn same_contents_different_storage() {
        let a = [5i32; 3];
        let b = [5i32; 3];
        assert_ne!(ArrayView::from_array(&a), ArrayView::from_array(&b));
    }

    #[test]
    fn same_location_different_length() {
        let a = [0u8; 3];
        let v = ArrayView::from_array(&a);
        assert_ne!(v.subview(0, 2), v);
        assert_ne!(v.subview(1, 2), v.subview(0, 2));
    }

    #[test]
    fn empties_are_equal_across_flavors() {
        assert_eq!(ArrayView::<u8, Empty>::empty(), ArrayView::<u8>::empty());
        assert_eq!(ArrayViewMut::<u8>::empty(), ArrayView::<u8, Empty>::empty());
    }

    #[test]
    fn hash_follows_identity() {
        let a = [1u64, 2, 3];
        let fixed = ArrayView::from_array(&a);
        let dynamic = ArrayView::from_slice(&a);
        assert_eq!(hash_of(&fixed), hash_of(&dynamic));
        assert_eq!(hash_of(&ArrayView::<u64>::empty()), hash_of(&ArrayView::<u64, Empty>::empty()));
    }
}
