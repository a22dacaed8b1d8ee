//! Conversions between view flavors.
//!
//! Conversions only go one way:
//!
//! * from mutable to read-only ([`ArrayViewMut`] → [`ArrayView`]),
//! * from fixed-size to variable-size (`Fixed<N>`/`Empty` → `Dynamic`),
//! * from a source object to a view, where a `Fixed<N>` view additionally requires a source
//!   whose length is always exactly `N`.
//!
//! Anything else, such as `Dynamic` → `Fixed<N>`, `Fixed<M>` → `Fixed<N>` or read-only →
//! mutable, has no conversion and does not compile:
//!
//! ```compile_fail
//! use arrview::prelude::*;
//! let a = [1, 2, 3];
//! let three = ArrayView::from_array(&a);
//! let four: ArrayView<i32, Fixed<4>> = three.into();
//! ```
//!
//! ```compile_fail
//! use arrview::prelude::*;
//! let a = [1, 2, 3];
//! let dynamic = ArrayView::from_slice(&a);
//! let fixed: ArrayView<i32, Fixed<3>> = dynamic.into();
//! ```
//!
//! # Examples
//!
//! ```
//! use arrview::prelude::*;
//! let mut storage = [1u8, 2, 3];
//!
//! let fixed_mut: ArrayViewMut<u8, Fixed<3>> = (&mut storage).into();
//! let fixed: ArrayView<u8, Fixed<3>> = fixed_mut.into();
//! let dynamic: ArrayView<u8> = fixed.into();
//! assert_eq!(dynamic.len(), 3);
//! ```

use crate::size::{Dynamic, Empty, Fixed, ViewSize};
use crate::source::{FixedViewSource, ViewSource, ViewSourceMut};
use crate::view::ArrayView;
use crate::view_mut::ArrayViewMut;

impl<'a, C> From<&'a C> for ArrayView<'a, C::Elem, Dynamic>
where
    C: ?Sized + ViewSource,
{
    #[inline]
    fn from(source: &'a C) -> Self {
        ArrayView::new(source)
    }
}

impl<'a, C> From<&'a mut C> for ArrayViewMut<'a, C::Elem, Dynamic>
where
    C: ?Sized + ViewSourceMut,
{
    #[inline]
    fn from(source: &'a mut C) -> Self {
        ArrayViewMut::new(source)
    }
}

impl<'a, C, const N: usize> From<&'a C> for ArrayView<'a, C::Elem, Fixed<N>>
where
    C: ?Sized + FixedViewSource<N>,
{
    #[inline]
    fn from(source: &'a C) -> Self {
        ArrayView::from_fixed(source)
    }
}

impl<'a, C, const N: usize> From<&'a mut C> for ArrayViewMut<'a, C::Elem, Fixed<N>>
where
    C: ?Sized + ViewSourceMut + FixedViewSource<N>,
{
    #[inline]
    fn from(source: &'a mut C) -> Self {
        ArrayViewMut::from_fixed(source)
    }
}

impl<'a, C> From<&'a C> for ArrayView<'a, C::Elem, Empty>
where
    C: ?Sized + FixedViewSource<0>,
{
    #[inline]
    fn from(_source: &'a C) -> Self {
        ArrayView::empty()
    }
}

impl<'a, C> From<&'a mut C> for ArrayViewMut<'a, C::Elem, Empty>
where
    C: ?Sized + ViewSourceMut + FixedViewSource<0>,
{
    #[inline]
    fn from(_source: &'a mut C) -> Self {
        ArrayViewMut::empty()
    }
}

impl<'a, T, S: ViewSize> From<ArrayViewMut<'a, T, S>> for ArrayView<'a, T, S> {
    #[inline]
    fn from(view: ArrayViewMut<'a, T, S>) -> Self {
        view.into_view()
    }
}

impl<'a, T, const N: usize> From<ArrayViewMut<'a, T, Fixed<N>>> for ArrayView<'a, T, Dynamic> {
    #[inline]
    fn from(view: ArrayViewMut<'a, T, Fixed<N>>) -> Self {
        view.into_view().into_dynamic()
    }
}

impl<'a, T> From<ArrayViewMut<'a, T, Empty>> for ArrayView<'a, T, Dynamic> {
    #[inline]
    fn from(_view: ArrayViewMut<'a, T, Empty>) -> Self {
        ArrayView::empty()
    }
}

impl<'a, T, const N: usize> From<ArrayView<'a, T, Fixed<N>>> for ArrayView<'a, T, Dynamic> {
    #[inline]
    fn from(view: ArrayView<'a, T, Fixed<N>>) -> Self {
        view.into_dynamic()
    }
}

impl<'a, T> From<ArrayView<'a, T, Empty>> for ArrayView<'a, T, Dynamic> {
    #[inline]
    fn from(_view: ArrayView<'a, T, Empty>) -> Self {
        ArrayView::empty()
    }
}

impl<'a, T, const N: usize> From<ArrayViewMut<'a, T, Fixed<N>>> for ArrayViewMut<'a, T, Dynamic> {
    #[inline]
    fn from(view: ArrayViewMut<'a, T, Fixed<N>>) -> Self {
        view.into_dynamic()
    }
}

impl<'a, T> From<ArrayViewMut<'a, T, Empty>> for ArrayViewMut<'a, T, Dynamic> {
    #[inline]
    fn from(_view: ArrayViewMut<'a, T, Empty>) -> Self {
        ArrayViewMut::empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn containers_into_dynamic() {
        let v = vec![1u8, 2, 3];
        let b: Box<[u8]> = vec![4u8, 5].into_boxed_slice();
        let s = String::from("hey");
        let a = [7u8; 6];

        let from_vec: ArrayView<u8> = (&v).into();
        let from_box: ArrayView<u8> = (&b).into();
        let from_string: ArrayView<u8> = (&s).into();
        let from_str: ArrayView<u8> = ArrayView::from("hey");
        let from_array: ArrayView<u8> = (&a).into();

        assert_eq!((from_vec.as_ptr(), from_vec.len()), (v.as_ptr(), 3));
        assert_eq!((from_box.as_ptr(), from_box.len()), (b.as_ptr(), 2));
        assert_eq!((from_string.as_ptr(), from_string.len()), (s.as_ptr(), 3));
        assert_eq!(&from_str[..], b"hey");
        assert_eq!((from_array.as_ptr(), from_array.len()), (a.as_ptr(), 6));
    }

    #[test]
    fn empty_container_gives_canonical_empty() {
        let v: alloc::vec::Vec<u32> = vec![];
        let view: ArrayView<u32> = (&v).into();
        assert_eq!(view, ArrayView::<u32>::empty());
        assert!(view.location().is_none());
    }

    #[test]
    fn zero_length_array_into_empty() {
        let mut a: [u16; 0] = [];
        let e: ArrayView<u16, Empty> = (&a).into();
        assert_eq!(e.len(), 0);
        assert_eq!(core::mem::size_of_val(&e), 0);
        let em: ArrayViewMut<u16, Empty> = (&mut a).into();
        let d: ArrayView<u16> = em.into();
        assert_eq!(d, ArrayView::<u16>::empty());
    }

    #[test]
    fn mutable_chain() {
        let mut v = vec![1i32, 2, 3];
        let ptr = v.as_ptr();
        let view_mut: ArrayViewMut<i32> = (&mut v).into();
        let view: ArrayView<i32> = view_mut.into();
        assert_eq!((view.as_ptr(), view.len()), (ptr, 3));
    }

    #[test]
    fn fixed_chain() {
        let mut a = [0u8; 4];
        let ptr = a.as_ptr();

        let fixed_mut: ArrayViewMut<u8, Fixed<4>> = (&mut a).into();
        let dynamic_mut: ArrayViewMut<u8> = fixed_mut.into();
        assert_eq!((dynamic_mut.as_ptr(), dynamic_mut.len()), (ptr, 4));

        let fixed_mut: ArrayViewMut<u8, Fixed<4>> = (&mut a).into();
        let dynamic: ArrayView<u8> = fixed_mut.into();
        assert_eq!((dynamic.as_ptr(), dynamic.len()), (ptr, 4));

        let fixed: ArrayView<u8, Fixed<4>> = (&a).into();
        let again: ArrayView<u8, Fixed<4>> = (&fixed).into();
        let dynamic: ArrayView<u8> = (&again).into();
        assert_eq!(fixed, again);
        assert_eq!(again, dynamic);
    }

    #[test]
    fn view_of_view_reborrows() {
        let mut a = [1, 2, 3];
        let mut outer = ArrayViewMut::from_array(&mut a);
        {
            let mut inner: ArrayViewMut<i32> = (&mut outer).into();
            inner[0] = 9;
        }
        assert_eq!(outer[0], 9);
    }
}
