#![warn(missing_docs)]
//! Mutable views: [`ArrayViewMut`].

use crate::contract::index_out_of_bounds;
use crate::size::{AllowsEmpty, Dynamic, Empty, Fixed, ViewSize};
use crate::source::{FixedViewSource, ViewSource, ViewSourceMut};
use crate::view::ArrayView;

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Deref, DerefMut, Index, IndexMut, Range};
use core::ptr::{self, NonNull};

/// A non-owning window onto contiguous elements of type `T`, with write access.
///
/// This is to [`ArrayView`] what `&mut [T]` is to `&[T]`: it is not `Copy`, and converts into
/// an `ArrayView` but never back. Storage layout is selected by the size tag `S` exactly as
/// for `ArrayView`.
///
/// # Examples
///
/// ```
/// use arrview::prelude::*;
/// let mut storage = vec![1, 2, 3, 4];
/// let mut view: ArrayViewMut<i32> = ArrayViewMut::new(&mut storage);
/// view[0] = 10;
/// for x in view.subview_mut(2, 2).iter_mut() {
///     *x *= -1;
/// }
/// let view: ArrayView<i32> = view.into();
/// assert_eq!(&view[..], &[10, 2, -3, -4]);
/// ```
///
/// Going back from a const view does not compile:
///
/// ```compile_fail
/// use arrview::prelude::*;
/// let storage = [1, 2, 3];
/// let view = ArrayView::from_slice(&storage);
/// let view_mut: ArrayViewMut<i32> = view.into();
/// ```
pub struct ArrayViewMut<'a, T, S: ViewSize = Dynamic> {
    location: S::Location,
    length: S::Length,
    _elems: PhantomData<&'a mut T>,
}

impl<'a, T, S: ViewSize> ArrayViewMut<'a, T, S> {
    /// Constructs a mutable view from a raw location and length.
    ///
    /// # Panics
    ///
    /// The location must be null if and only if `len` is zero, and `len` must match a fixed
    /// size tag.
    ///
    /// # Safety
    ///
    /// If `len` is nonzero, `location` must be valid for reads and writes of `len` elements
    /// for `'a`, and nothing else may access them during `'a`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arrview::prelude::*;
    /// let mut a = [0u8; 4];
    /// let mut v = unsafe { ArrayViewMut::<u8, Fixed<4>>::from_raw_parts_mut(a.as_mut_ptr(), 4) };
    /// v[3] = 9;
    /// assert_eq!(a, [0, 0, 0, 9]);
    /// ```
    #[inline]
    pub unsafe fn from_raw_parts_mut(location: *mut T, len: usize) -> Self {
        Self::from_parts(NonNull::new(location), len)
    }

    /// Safety: as `from_raw_parts_mut`; panics on invariant violations.
    #[inline(always)]
    pub(crate) unsafe fn from_parts(location: Option<NonNull<T>>, len: usize) -> Self {
        let (location, length) = S::pack(location.map(NonNull::cast), len);
        ArrayViewMut {
            location,
            length,
            _elems: PhantomData,
        }
    }

    /// Safety: `source` must uphold the `ViewSourceMut` contract for `'a`.
    #[inline]
    pub(crate) unsafe fn from_source_mut<C>(source: &'a mut C) -> Self
    where
        C: ?Sized + ViewSourceMut<Elem = T>,
    {
        let len = source.length();
        let location = if len == 0 {
            None
        } else {
            NonNull::new(source.location_mut())
        };
        Self::from_parts(location, len)
    }

    /// Address of the first element, or `None` if the view is empty.
    #[inline(always)]
    pub fn location(&self) -> Option<NonNull<T>> {
        S::location(self.location).map(NonNull::cast)
    }

    /// Address of the first element, or null if the view is empty.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.as_mut_ptr_unchecked()
    }

    /// Address of the first element for writing, or null if the view is empty.
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_ptr_unchecked()
    }

    #[inline(always)]
    fn as_mut_ptr_unchecked(&self) -> *mut T {
        match self.location() {
            Some(location) => location.as_ptr(),
            None => ptr::null_mut(),
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
    #[inline(always)]
    pub fn is_fixed_size(&self) -> bool {
        S::FIXED_LEN.is_some()
    }

    /// The begin and end positions. Both are null for an empty view.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        let start = self.as_ptr();
        start..start.wrapping_add(self.len())
    }

    /// The begin and end positions for writing. Both are null for an empty view.
    #[inline]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        let start = self.as_mut_ptr();
        start..start.wrapping_add(self.len())
    }

    /// The viewed elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.as_view().as_slice()
    }

    /// The viewed elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.reborrow().into_slice()
    }

    /// Consumes the view and returns the elements with the full lifetime `'a`.
    ///
    /// The returned slice does not borrow the view, only the underlying storage.
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        match self.location() {
            // Safety: construction guarantees `len` exclusively borrowed elements for `'a`,
            // and `self` is consumed.
            Some(location) => unsafe {
                core::slice::from_raw_parts_mut(location.as_ptr(), self.len())
            },
            None => &mut [],
        }
    }

    /// Reference to element `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[inline]
    pub fn at(&self, index: usize) -> &T {
        self.as_view().at(index)
    }

    /// Mutable reference to element `index`.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    ///
    /// ```should_panic
    /// use arrview::prelude::*;
    /// let mut a = [1, 2, 3];
    /// let mut v = ArrayViewMut::from_array(&mut a);
    /// *v.at_mut(3) = 4;
    /// ```
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.location() {
            // Safety: `index < len`, and `&mut self` gives exclusive access.
            Some(location) if index < len => unsafe { &mut *location.as_ptr().add(index) },
            _ => index_out_of_bounds(index, len),
        }
    }

    /// Reference to element `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable reference to element `index`, or `None` if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Iterator over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// A read-only view of the same window, borrowing this one.
    #[inline]
    pub fn as_view(&self) -> ArrayView<'_, T, S> {
        // Safety: the same, already validated window, shared for the borrow of `self`.
        unsafe { ArrayView::from_parts(self.location(), self.len()) }
    }

    /// Converts into a read-only view of the same window, keeping the lifetime `'a`.
    #[inline]
    pub fn into_view(self) -> ArrayView<'a, T, S> {
        // Safety: `self` is consumed, so the window is no longer writable.
        unsafe { ArrayView::from_parts(self.location(), self.len()) }
    }

    /// A shorter-lived mutable view of the same window.
    #[inline]
    pub fn reborrow(&mut self) -> ArrayViewMut<'_, T, S> {
        // Safety: exclusive for the borrow of `self`.
        unsafe { ArrayViewMut::from_parts(self.location(), self.len()) }
    }

    /// A read-only view of at most `size` elements starting at `offset`.
    ///
    /// Degrades to the empty view the same way as [`ArrayView::subview`].
    #[inline]
    pub fn subview(&self, offset: usize, size: usize) -> ArrayView<'_, T> {
        self.as_view().subview(offset, size)
    }

    /// A mutable view of at most `size` elements starting at `offset`, borrowing this one.
    #[inline]
    pub fn subview_mut(&mut self, offset: usize, size: usize) -> ArrayViewMut<'_, T> {
        self.reborrow().into_subview(offset, size)
    }

    /// Consumes the view and returns a mutable view of at most `size` elements starting at
    /// `offset`.
    ///
    /// ```
    /// use arrview::prelude::*;
    /// let mut a = [1, 2, 3, 4, 5];
    /// let tail = ArrayViewMut::from_array(&mut a).into_subview(3, 100);
    /// tail.into_slice().fill(0);
    /// assert_eq!(a, [1, 2, 3, 0, 0]);
    /// ```
    #[inline]
    pub fn into_subview(self, offset: usize, size: usize) -> ArrayViewMut<'a, T> {
        let sub = self.as_view().subview(offset, size);
        // Safety: `sub` lies inside this window, and `self` is consumed.
        unsafe { ArrayViewMut::from_parts(sub.location(), sub.len()) }
    }

    /// Forgets the compile-time length.
    #[inline]
    pub fn into_dynamic(self) -> ArrayViewMut<'a, T> {
        // Safety: the same window, already validated; `self` is consumed.
        unsafe { ArrayViewMut::from_parts(self.location(), self.len()) }
    }
}

impl<'a, T, S: AllowsEmpty> ArrayViewMut<'a, T, S> {
    /// The canonical empty view: no location, length zero.
    #[inline]
    pub fn empty() -> Self {
        // Safety: there is nothing to access.
        unsafe { Self::from_parts(None, 0) }
    }
}

impl<'a, T> ArrayViewMut<'a, T> {
    /// A mutable view over any [`ViewSourceMut`].
    #[inline]
    pub fn new<C>(source: &'a mut C) -> Self
    where
        C: ?Sized + ViewSourceMut<Elem = T>,
    {
        // Safety: guaranteed by the `ViewSourceMut` implementation.
        unsafe { Self::from_source_mut(source) }
    }

    /// A mutable view over a slice.
    #[inline]
    pub fn from_slice(slice: &'a mut [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> ArrayViewMut<'a, T, Fixed<N>> {
    /// The length of every view of this type.
    pub const LEN: usize = N;

    /// A mutable view over a whole array.
    #[inline]
    pub fn from_array(array: &'a mut [T; N]) -> Self {
        Self::from_fixed(array)
    }

    /// A mutable view over any source whose length is always `N`.
    #[inline]
    pub fn from_fixed<C>(source: &'a mut C) -> Self
    where
        C: ?Sized + ViewSourceMut + FixedViewSource<N, Elem = T>,
    {
        // Safety: guaranteed by the `ViewSourceMut` implementation.
        unsafe { Self::from_source_mut(source) }
    }

    /// Consumes the view and returns the elements as an array reference.
    #[inline]
    pub fn into_array(self) -> &'a mut [T; N] {
        // Safety: a `Fixed<N>` view always covers exactly `N` exclusively borrowed elements.
        unsafe { &mut *(self.as_mut_ptr_unchecked() as *mut [T; N]) }
    }
}

impl<'a, T> ArrayViewMut<'a, T, Empty> {
    /// The length of every view of this type.
    pub const LEN: usize = 0;
}

impl<T, S: AllowsEmpty> Default for ArrayViewMut<'_, T, S> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T, S: ViewSize> Deref for ArrayViewMut<'_, T, S> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: ViewSize> DerefMut for ArrayViewMut<'_, T, S> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, S: ViewSize> AsRef<[T]> for ArrayViewMut<'_, T, S> {
    #[inline(always)]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: ViewSize> AsMut<[T]> for ArrayViewMut<'_, T, S> {
    #[inline(always)]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, S: ViewSize> Index<usize> for ArrayViewMut<'_, T, S> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T, S: ViewSize> IndexMut<usize> for ArrayViewMut<'_, T, S> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

macro_rules! impl_range_index_mut {
    ($($range:ty),* $(,)?) => {
        $(
            impl<T, S: ViewSize> Index<$range> for ArrayViewMut<'_, T, S> {
                type Output = [T];

                #[inline(always)]
                fn index(&self, range: $range) -> &[T] {
                    &self.as_slice()[range]
                }
            }

            impl<T, S: ViewSize> IndexMut<$range> for ArrayViewMut<'_, T, S> {
                #[inline(always)]
                fn index_mut(&mut self, range: $range) -> &mut [T] {
                    &mut self.as_mut_slice()[range]
                }
            }
        )*
    };
}

impl_range_index_mut!(
    core::ops::Range<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull,
);

impl<'a, T, S: ViewSize> IntoIterator for ArrayViewMut<'a, T, S> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_slice().iter_mut()
    }
}

impl<'b, T, S: ViewSize> IntoIterator for &'b ArrayViewMut<'_, T, S> {
    type Item = &'b T;
    type IntoIter = core::slice::Iter<'b, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'b, T, S: ViewSize> IntoIterator for &'b mut ArrayViewMut<'_, T, S> {
    type Item = &'b mut T;
    type IntoIter = core::slice::IterMut<'b, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, S: ViewSize> fmt::Debug for ArrayViewMut<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt(f)
    }
}

// Important: use the semantics of `&'a mut [T]`.
unsafe impl<T: Send, S: ViewSize> Send for ArrayViewMut<'_, T, S> {}
unsafe impl<T: Sync, S: ViewSize> Sync for ArrayViewMut<'_, T, S> {}

unsafe impl<T, S: ViewSize> ViewSource for ArrayViewMut<'_, T, S> {
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

unsafe impl<T, S: ViewSize> ViewSourceMut for ArrayViewMut<'_, T, S> {
    #[inline(always)]
    fn location_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

unsafe impl<T, const N: usize> FixedViewSource<N> for ArrayViewMut<'_, T, Fixed<N>> {}
unsafe impl<T> FixedViewSource<0> for ArrayViewMut<'_, T, Empty> {}
