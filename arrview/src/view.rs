#![warn(missing_docs)]
//! Shared views: [`ArrayView`].

use crate::contract::index_out_of_bounds;
use crate::size::{AllowsEmpty, Dynamic, Empty, Fixed, ViewSize};
use crate::source::{FixedViewSource, ViewSource};

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, Index, Range};
use core::ptr::{self, NonNull};

/// A non-owning, read-only window onto contiguous elements of type `T`.
///
/// The size tag `S` selects the storage layout: [`Dynamic`] (the default) stores a location
/// and a length, [`Fixed<N>`] stores only a location, and [`Empty`] stores
/// nothing. `ArrayView` is `Copy` and never allocates, copies or drops the elements.
///
/// The location is none if and only if the length is zero.
///
/// # Examples
///
/// ```
/// use arrview::prelude::*;
/// let storage = [10u8, 20, 30, 40, 50];
///
/// let fixed: ArrayView<u8, Fixed<5>> = ArrayView::from_array(&storage);
/// assert_eq!(fixed[1], 20);
///
/// let dynamic: ArrayView<u8> = fixed.into();
/// let middle = dynamic.subview(1, 3);
/// assert_eq!(&middle[..], &[20, 30, 40]);
/// assert_eq!(middle.iter().sum::<u8>(), 90);
/// ```
pub struct ArrayView<'a, T, S: ViewSize = Dynamic> {
    location: S::Location,
    length: S::Length,
    _elems: PhantomData<&'a T>,
}

impl<'a, T, S: ViewSize> ArrayView<'a, T, S> {
    /// Constructs a view from a raw location and length.
    ///
    /// # Panics
    ///
    /// The location must be null if and only if `len` is zero, and `len` must match a fixed
    /// size tag. Violations panic, also in release builds:
    ///
    /// ```should_panic
    /// use arrview::prelude::*;
    /// let x = 5u8;
    /// let _ = unsafe { ArrayView::<u8>::from_raw_parts(&x, 0) };
    /// ```
    ///
    /// # Safety
    ///
    /// If `len` is nonzero, `location` must be valid for reads of `len` elements for `'a`, and
    /// must not be written through anything else during `'a`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrview::prelude::*;
    /// let a = [1, 2, 3];
    /// let v = unsafe { ArrayView::<i32, Fixed<3>>::from_raw_parts(a.as_ptr(), 3) };
    /// assert_eq!(v[2], 3);
    /// let e = unsafe { ArrayView::<i32>::from_raw_parts(core::ptr::null(), 0) };
    /// assert!(e.is_empty());
    /// ```
    #[inline]
    pub unsafe fn from_raw_parts(location: *const T, len: usize) -> Self {
        Self::from_parts(NonNull::new(location as *mut T), len)
    }

    /// Safety: as `from_raw_parts`; panics on invariant violations.
    #[inline(always)]
    pub(crate) unsafe fn from_parts(location: Option<NonNull<T>>, len: usize) -> Self {
        let (location, length) = S::pack(location.map(NonNull::cast), len);
        ArrayView {
            location,
            length,
            _elems: PhantomData,
        }
    }

    /// Safety: `source` must uphold the `ViewSource` contract for `'a`.
    #[inline]
    pub(crate) unsafe fn from_source<C>(source: &'a C) -> Self
    where
        C: ?Sized + ViewSource<Elem = T>,
    {
        let len = source.length();
        let location = if len == 0 {
            None
        } else {
            NonNull::new(source.location() as *mut T)
        };
        Self::from_parts(location, len)
    }

    /// Address of the first element, or `None` if the view is empty.
    #[inline(always)]
    pub fn location(&self) -> Option<NonNull<T>> {
        S::location(self.location).map(NonNull::cast)
    }

    /// Address of the first element, or null if the view is empty.
    ///
    /// Unlike `<[T]>::as_ptr`, an empty view reports null rather than a dangling pointer.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        match self.location() {
            Some(location) => location.as_ptr(),
            None => ptr::null(),
        }
    }

    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        S::length(self.length)
    }

    /// Whether the view has no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the length is a compile-time constant.
    ///
    /// ```
    /// use arrview::prelude::*;
    /// let a = [0u8; 2];
    /// assert!(ArrayView::from_array(&a).is_fixed_size());
    /// assert!(!ArrayView::from_slice(&a[..]).is_fixed_size());
    /// ```
    #[inline(always)]
    pub fn is_fixed_size(&self) -> bool {
        S::FIXED_LEN.is_some()
    }

    /// The begin and end positions: the location and one past the last element.
    ///
    /// Both are null for an empty view.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        let start = self.as_ptr();
        start..start.wrapping_add(self.len())
    }

    /// The viewed elements as a slice, with the full lifetime `'a`.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        match self.location() {
            // Safety: construction guarantees `len` readable elements at `location` for `'a`.
            Some(location) => unsafe { core::slice::from_raw_parts(location.as_ptr(), self.len()) },
            None => &[],
        }
    }

    /// Reference to element `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    ///
    /// ```should_panic
    /// use arrview::prelude::*;
    /// let a = [1, 2, 3];
    /// ArrayView::from_array(&a).at(3);
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> &'a T {
        let len = self.len();
        match self.location() {
            // Safety: `index < len` and the view covers `len` elements.
            Some(location) if index < len => unsafe { &*location.as_ptr().add(index) },
            _ => index_out_of_bounds(index, len),
        }
    }

    /// Reference to element `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.as_slice().get(index)
    }

    /// Iterator over the elements.
    ///
    /// Views are `Copy`, so the same view can be traversed any number of times.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// A view of at most `size` elements starting at `offset`.
    ///
    /// If `offset` is past the end, or the result would have no elements, returns the empty
    /// view. This never panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrview::prelude::*;
    /// let a = [1, 2, 3, 4, 5];
    /// let v = ArrayView::from_array(&a);
    /// assert_eq!(&v.subview(2, 10)[..], &[3, 4, 5]);
    /// assert_eq!(v.subview(10, 1), ArrayView::<i32>::empty());
    /// ```
    #[inline]
    pub fn subview(&self, offset: usize, size: usize) -> ArrayView<'a, T> {
        let len = self.len();
        match self.location() {
            Some(location) if offset < len && size > 0 => unsafe {
                // Safety: `offset < len`, so the result stays inside this view.
                let start = NonNull::new_unchecked(location.as_ptr().add(offset));
                ArrayView::from_parts(Some(start), size.min(len - offset))
            },
            _ => ArrayView::empty(),
        }
    }

    /// A view of everything from `offset` to the end. Same as `subview(offset, self.len())`.
    #[inline]
    pub fn subview_from(&self, offset: usize) -> ArrayView<'a, T> {
        self.subview(offset, self.len())
    }

    /// Forgets the compile-time length.
    ///
    /// ```
    /// use arrview::prelude::*;
    /// let a = [1, 2];
    /// let fixed = ArrayView::from_array(&a);
    /// let dynamic = fixed.into_dynamic();
    /// assert_eq!(fixed, dynamic);
    /// ```
    #[inline]
    pub fn into_dynamic(self) -> ArrayView<'a, T> {
        // Safety: the same window, already validated.
        unsafe { ArrayView::from_parts(self.location(), self.len()) }
    }
}

impl<'a, T, S: AllowsEmpty> ArrayView<'a, T, S> {
    /// The canonical empty view: no location, length zero.
    ///
    /// Only available for size tags that allow emptiness.
    #[inline]
    pub fn empty() -> Self {
        // Safety: there is nothing to read.
        unsafe { Self::from_parts(None, 0) }
    }
}

impl<'a, T> ArrayView<'a, T> {
    /// A view over any [`ViewSource`].
    #[inline]
    pub fn new<C>(source: &'a C) -> Self
    where
        C: ?Sized + ViewSource<Elem = T>,
    {
        // Safety: guaranteed by the `ViewSource` implementation.
        unsafe { Self::from_source(source) }
    }

    /// A view over a slice. An empty slice gives the empty view.
    #[inline]
    pub fn from_slice(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> ArrayView<'a, T, Fixed<N>> {
    /// The length of every view of this type.
    pub const LEN: usize = N;

    /// A view over a whole array.
    #[inline]
    pub fn from_array(array: &'a [T; N]) -> Self {
        Self::from_fixed(array)
    }

    /// A view over any source whose length is always `N`.
    #[inline]
    pub fn from_fixed<C>(source: &'a C) -> Self
    where
        C: ?Sized + FixedViewSource<N, Elem = T>,
    {
        // Safety: guaranteed by the `ViewSource` implementation.
        unsafe { Self::from_source(source) }
    }

    /// The viewed elements as an array reference.
    #[inline]
    pub fn as_array(&self) -> &'a [T; N] {
        // Safety: a `Fixed<N>` view always covers exactly `N` elements.
        unsafe { &*(self.as_ptr() as *const [T; N]) }
    }
}

/// Builds a variable-size view over a slice.
///
/// ```
/// let a = [3, 1, 4];
/// let v = arrview::make_view(&a[..]);
/// assert_eq!(v.len(), 3);
/// ```
#[inline]
pub fn make_view<T>(slice: &[T]) -> ArrayView<'_, T> {
    ArrayView::from_slice(slice)
}

impl<T, S: ViewSize> Clone for ArrayView<'_, T, S> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S: ViewSize> Copy for ArrayView<'_, T, S> {}

impl<'a, T> ArrayView<'a, T, Empty> {
    /// The length of every view of this type.
    pub const LEN: usize = 0;
}

impl<T, S: AllowsEmpty> Default for ArrayView<'_, T, S> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, S: ViewSize> Deref for ArrayView<'_, T, S> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: ViewSize> AsRef<[T]> for ArrayView<'_, T, S> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: ViewSize> Index<usize> for ArrayView<'_, T, S> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {
        $(
            impl<T, S: ViewSize> Index<$range> for ArrayView<'_, T, S> {
                type Output = [T];

                #[inline(always)]
                fn index(&self, range: $range) -> &[T] {
                    &self.as_slice()[range]
                }
            }
        )*
    };
}

impl_range_index!(
    core::ops::Range<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull,
);

impl<'a, T, S: ViewSize> IntoIterator for ArrayView<'a, T, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: ViewSize> IntoIterator for &ArrayView<'a, T, S> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, S: ViewSize> fmt::Debug for ArrayView<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

// Important: use the semantics of `&'a [T]`.
unsafe impl<T: Sync, S: ViewSize> Send for ArrayView<'_, T, S> {}
unsafe impl<T: Sync, S: ViewSize> Sync for ArrayView<'_, T, S> {}

unsafe impl<T, S: ViewSize> ViewSource for ArrayView<'_, T, S> {
    type Elem = T;

    #[inline(always)]
    fn location(&self) -> *const T {
        self.as_ptr()
    }

    #[inline(always)]
    fn length(&self) -> usize {
        self.len()
    }
}

unsafe impl<T, const N: usize> FixedViewSource<N> for ArrayView<'_, T, Fixed<N>> {}
unsafe impl<T> FixedViewSource<0> for ArrayView<'_, T, Empty> {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::format;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn null_iff_empty_across_flavors() {
        let a = [1u32, 2, 3];
        let e: [u32; 0] = [];

        let fixed = ArrayView::from_array(&a);
        assert!(fixed.location().is_some());
        assert_eq!(fixed.len(), 3);

        let empty_fixed: ArrayView<u32, Empty> = ArrayView::from(&e);
        assert!(empty_fixed.location().is_none());
        assert_eq!(empty_fixed.len(), 0);

        let dynamic = ArrayView::from_slice(&a[..]);
        assert!(dynamic.location().is_some());
        let dynamic_empty = ArrayView::from_slice(&a[..0]);
        assert!(dynamic_empty.location().is_none());
        assert_eq!(dynamic_empty.len(), 0);
        assert!(dynamic_empty.as_ptr().is_null());
    }

    #[test]
    fn fixed_length_is_constant() {
        let a = [7i8; 4];
        let from_array = ArrayView::from_array(&a);
        let from_into: ArrayView<i8, Fixed<4>> = (&a).into();
        let from_raw = unsafe { ArrayView::<i8, Fixed<4>>::from_raw_parts(a.as_ptr(), 4) };
        let from_view = ArrayView::<i8, Fixed<4>>::from_fixed(&from_raw);
        for v in [from_array, from_into, from_raw, from_view] {
            assert_eq!(v.len(), 4);
            assert!(!v.is_empty());
        }
        assert_eq!(ArrayView::<i8, Fixed<4>>::LEN, 4);
    }

    #[test]
    fn empty_length_constant() {
        const N: usize = ArrayView::<'static, i8, Empty>::LEN;
        assert_eq!(N, 0);
        assert_eq!(ArrayView::<i8, Empty>::empty().len(), ArrayView::<i8, Empty>::LEN);
    }

    #[test]
    fn array_round_trip() {
        let a = [1.5f64, 2.5, 3.5];
        let v: ArrayView<f64> = (&a).into();
        assert_eq!(v.as_ptr(), a.as_ptr());
        assert_eq!(v.len(), a.len());
        assert_eq!(v.as_ptr_range(), a.as_ptr_range());
    }

    #[test]
    fn subview_clamps_and_degrades() {
        let a = [1, 2, 3, 4, 5];
        let v = ArrayView::from_slice(&a);

        let s = v.subview(2, 10);
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_ptr(), &a[2] as *const i32);
        assert_eq!(&s[..], &[3, 4, 5]);

        let out = v.subview(10, 1);
        assert_eq!(out.len(), 0);
        assert!(out.location().is_none());
        assert_eq!(out, ArrayView::<i32>::empty());

        assert_eq!(v.subview(5, 1), ArrayView::<i32>::empty());
        assert_eq!(v.subview(1, 0), ArrayView::<i32>::empty());
        assert_eq!(&v.subview_from(3)[..], &[4, 5]);
        assert_eq!(v.subview_from(0), v);
    }

    #[test]
    fn subview_of_fixed_is_dynamic() {
        let a = [9u8; 8];
        let fixed = ArrayView::from_array(&a);
        let sub: ArrayView<u8, Dynamic> = fixed.subview(4, 2);
        assert_eq!(sub.len(), 2);
        assert!(!sub.is_fixed_size());
    }

    #[test]
    fn subview_of_empty() {
        let e: ArrayView<u8, Empty> = ArrayView::empty();
        assert_eq!(e.subview(0, 3), ArrayView::<u8>::empty());
        assert_eq!(e.subview_from(0), ArrayView::<u8>::empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_at_len_panics() {
        let a = [1, 2, 3];
        let v = ArrayView::from_slice(&a);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_into_empty_panics() {
        let v = ArrayView::<u8>::empty();
        let _ = v[0];
    }

    #[test]
    fn get_is_checked() {
        let a = [1, 2];
        let v = ArrayView::from_slice(&a);
        assert_eq!(v.get(1), Some(&2));
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn iteration_restarts() {
        let a = [1, 2, 3];
        let v = ArrayView::from_slice(&a);
        let first: Vec<_> = v.into_iter().copied().collect();
        let second: Vec<_> = v.into_iter().copied().collect();
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);

        let mut total = 0;
        for x in &v {
            total += x;
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn empty_range_is_null() {
        let v = ArrayView::<u64>::default();
        let r = v.as_ptr_range();
        assert!(r.start.is_null());
        assert_eq!(r.start, r.end);
        assert_eq!(v.iter().count(), 0);
    }

    #[test]
    fn references_outlive_the_view() {
        let a = [10, 20];
        let elem = {
            let v = ArrayView::from_slice(&a);
            v.at(1)
        };
        assert_eq!(*elem, 20);
    }

    #[test]
    fn as_array_on_fixed() {
        let a = [1u8, 2, 3];
        let v = ArrayView::from_array(&a);
        assert_eq!(v.as_array(), &a);
    }

    #[test]
    fn debug_prints_elements() {
        let a = [1, 2, 3];
        assert_eq!(format!("{:?}", ArrayView::from_array(&a)), "[1, 2, 3]");
        assert_eq!(format!("{:?}", ArrayView::<u8>::empty()), "[]");
    }

    #[test]
    #[should_panic(expected = "null if and only if")]
    fn raw_non_null_with_zero_length_panics() {
        let x = 1u8;
        let _ = unsafe { ArrayView::<u8>::from_raw_parts(&x, 0) };
    }

    #[test]
    #[should_panic(expected = "null if and only if")]
    fn raw_null_with_length_panics() {
        let _ = unsafe { ArrayView::<u8>::from_raw_parts(core::ptr::null(), 2) };
    }

    #[test]
    #[should_panic(expected = "fixed length 2")]
    fn raw_fixed_with_wrong_length_panics() {
        let a = [1u8, 2, 3];
        let _ = unsafe { ArrayView::<u8, Fixed<2>>::from_raw_parts(a.as_ptr(), 3) };
    }

    #[test]
    fn send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ArrayView<i32>>();
        assert_sync::<ArrayView<i32, Fixed<2>>>();
        assert_sync::<ArrayView<i32, Empty>>();
    }
}
