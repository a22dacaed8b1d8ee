#![warn(missing_docs)]
//! Capability traits for objects that a view can be built from.
//!
//! Anything that owns or borrows a contiguous run of elements can expose it by implementing
//! [`ViewSource`]: a location and a length. [`ViewSourceMut`] adds mutable access, and
//! [`FixedViewSource<N>`] promises a length that is always exactly `N`.
//!
//! With the `macro` feature, `#[derive(ViewSource)]` implements these traits for a struct by
//! delegating to one of its fields.
//!
//! # Examples
//!
//! ```
//! use arrview::prelude::*;
//! let v = vec![1u32, 2, 3];
//! let view: ArrayView<u32> = ArrayView::new(&v);
//! assert_eq!(view.location().map(|p| p.as_ptr() as *const u32), Some(v.as_ptr()));
//! assert_eq!(view.len(), 3);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

/// An object exposing `length()` contiguous elements starting at `location()`.
///
/// # Safety
///
/// Implementors must guarantee that, for as long as `&self` is borrowed:
/// * if `length()` is nonzero, `location()` is non-null, properly aligned, and valid for
///   reads of `length()` consecutive `Elem`s;
/// * no mutable access to those elements happens other than through
///   [`ViewSourceMut::location_mut`].
///
/// If `length()` is zero, `location()` may return anything; views normalize it to none.
pub unsafe trait ViewSource {
    /// Element type.
    type Elem;

    /// Address of the first element.
    fn location(&self) -> *const Self::Elem;

    /// Number of elements.
    fn length(&self) -> usize;
}

/// A [`ViewSource`] that can also hand out mutable access.
///
/// `str` and `String` are read-only sources, since arbitrary writes could break UTF-8:
///
/// ```compile_fail
/// use arrview::prelude::*;
/// let mut s = String::from("abc");
/// let bytes: ArrayViewMut<u8> = ArrayViewMut::new(&mut s);
/// ```
///
/// # Safety
///
/// In addition to the [`ViewSource`] requirements: for as long as `&mut self` is borrowed,
/// `location_mut()` must be valid for reads and writes of `length()` elements, and nothing
/// else may access them. It must return the same address as `location()`.
pub unsafe trait ViewSourceMut: ViewSource {
    /// Address of the first element, for writing.
    fn location_mut(&mut self) -> *mut Self::Elem;
}

/// A [`ViewSource`] whose `length()` is always `N`.
///
/// This is what allows conversion into a `Fixed<N>` view. Sources whose length is only known
/// at run time, such as slices and vectors, do not implement it.
///
/// ```compile_fail
/// use arrview::prelude::*;
/// let v = vec![1u8, 2, 3];
/// let fixed: ArrayView<u8, Fixed<3>> = ArrayView::from(&v);
/// ```
///
/// # Safety
///
/// `length()` must return `N` on every call.
pub unsafe trait FixedViewSource<const N: usize>: ViewSource {}

unsafe impl<T> ViewSource for [T] {
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

unsafe impl<T> ViewSourceMut for [T] {
    #[inline(always)]
    fn location_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

unsafe impl<T, const N: usize> ViewSource for [T; N] {
    type Elem = T;

    #[inline(always)]
    fn location(&self) -> *const T {
        self.as_ptr()
    }

    #[inline(always)]
    fn length(&self) -> usize {
        N
    }
}

unsafe impl<T, const N: usize> ViewSourceMut for [T; N] {
    #[inline(always)]
    fn location_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

unsafe impl<T, const N: usize> FixedViewSource<N> for [T; N] {}

unsafe impl<T> ViewSource for Vec<T> {
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

unsafe impl<T> ViewSourceMut for Vec<T> {
    #[inline(always)]
    fn location_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

unsafe impl<T> ViewSource for Box<[T]> {
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

unsafe impl<T> ViewSourceMut for Box<[T]> {
    #[inline(always)]
    fn location_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}

// Read-only: writing arbitrary bytes could break UTF-8.
unsafe impl ViewSource for str {
    type Elem = u8;

    #[inline(always)]
    fn location(&self) -> *const u8 {
        self.as_ptr()
    }

    #[inline(always)]
    fn length(&self) -> usize {
        self.len()
    }
}

unsafe impl ViewSource for String {
    type Elem = u8;

    #[inline(always)]
    fn location(&self) -> *const u8 {
        self.as_ptr()
    }

    #[inline(always)]
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "bumpalo")]
unsafe impl<'bump, T> ViewSource for bumpalo::collections::Vec<'bump, T> {
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

#[cfg(feature = "bumpalo")]
unsafe impl<'bump, T> ViewSourceMut for bumpalo::collections::Vec<'bump, T> {
    #[inline(always)]
    fn location_mut(&mut self) -> *mut T {
        self.as_mut_ptr()
    }
}
