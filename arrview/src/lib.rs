#![doc = crate::doc_macro::make_svgbobdoc!(
//! # `arrview`
//! Non-owning views over contiguous arrays, with the length optionally fixed at compile time.
//!
//! 1. [Summary](#summary)
//! 1. [Examples](#examples)
//! 1. [Memory footprint](#memory-footprint)
//! 1. [Conversions](#conversions)
//! 1. [Feature flags](#feature-flags)
//!
//! # Summary
//!
//! An [`ArrayView<T, S>`] behaves like `&[T]` and an [`ArrayViewMut<T, S>`] like `&mut [T]`:
//! they borrow a window of elements owned by something else. The size tag `S` chooses how
//! much the view stores about that window:
//!
//! * [`Dynamic`] (the default): location and length, both known at run time.
//! * [`Fixed<N>`]: only the location. The length is the constant `N > 0`.
//! * [`Empty`]: nothing at all. The view has length zero and no location.
//!
//! A view can be built from anything implementing [`ViewSource`]: slices, arrays, `Vec`,
//! `Box<[T]>`, `String`, other views, or your own containers. Views never allocate, never
//! copy elements, and are never null-but-nonempty.
//!
//! # Examples
//!
//! ```
//! use arrview::prelude::*;
//!
//! fn sum(xs: ArrayView<u32>) -> u32 {
//!     xs.iter().sum()
//! }
//!
//! let owned = vec![1u32, 2, 3, 4];
//! let array = [10u32, 20];
//!
//! assert_eq!(sum(ArrayView::new(&owned)), 10);
//! assert_eq!(sum((&array).into()), 30);
//! assert_eq!(sum(ArrayView::new(&owned).subview(1, 2)), 5);
//! assert_eq!(sum(ArrayView::empty()), 0);
//!
//! // A view whose length is part of its type:
//! let fixed: ArrayView<u32, Fixed<2>> = ArrayView::from_array(&array);
//! assert_eq!(fixed.as_array(), &[10, 20]);
//! assert_eq!(sum(fixed.into()), 30);
//!
//! // Mutable views write through to the storage they borrow:
//! let mut storage = [0u8; 4];
//! let mut view = ArrayViewMut::from_slice(&mut storage[1..]);
//! view[0] = 7;
//! *view.at_mut(2) = 9;
//! assert_eq!(storage, [0, 7, 0, 9]);
//! ```
//!
//! # Memory footprint
//!
//! Only the information the type does not already carry is stored:
//!
//! ```svgbob
//! "ArrayView<T>"                 "ArrayView<T, Fixed<4>>"      "ArrayView<T, Empty>"
//! +------------+----------+      +------------+                 (zero bytes)
//! | "location" | "length" |      | "location" |
//! +------------+----------+      +------------+
//!       |                              |
//!       v                              v
//!       +----+----+----+----+          +----+----+----+----+
//!       | T  | T  | T  |... |          | T  | T  | T  | T  |
//!       +----+----+----+----+          +----+----+----+----+
//! ```
//!
//! ```
//! use arrview::prelude::*;
//! use core::mem::size_of;
//! assert_eq!(size_of::<ArrayView<u64>>(), 2 * size_of::<usize>());
//! assert_eq!(size_of::<ArrayView<u64, Fixed<4>>>(), size_of::<usize>());
//! assert_eq!(size_of::<ArrayView<u64, Empty>>(), 0);
//! // The location is never null for a fixed view, so `Option` is free:
//! assert_eq!(size_of::<Option<ArrayView<u64, Fixed<4>>>>(), size_of::<usize>());
//! ```
//!
)]
//! # Conversions
//!
//! | From                           | To                        | How                                 |
//! |--------------------------------|---------------------------|-------------------------------------|
//! | `&C` where `C: ViewSource`     | `ArrayView<T>`            | [`ArrayView::new`], `From`          |
//! | `&mut C` where `C: ViewSourceMut` | `ArrayViewMut<T>`      | [`ArrayViewMut::new`], `From`       |
//! | `&C` where `C: FixedViewSource<N>` | `ArrayView<T, Fixed<N>>` | [`ArrayView::from_fixed`], `From` |
//! | `ArrayViewMut<T, S>`           | `ArrayView<T, S>`         | [`ArrayViewMut::into_view`], `From` |
//! | `ArrayView<T, Fixed<N>>`       | `ArrayView<T>`            | [`ArrayView::into_dynamic`], `From` |
//! | `ArrayView<T, Empty>`          | `ArrayView<T>`            | `From`                              |
//!
//! There is no conversion from `Dynamic` to `Fixed<N>`, between different
//! `Fixed` lengths, or from read-only to mutable. See [`convert`] for details.
//!
//! # Feature flags
//!
//! This crate has no *required* dependencies besides `static_assertions`. The following feature
//! flags exist, which can turn on some dependencies.
//!
//! * `bumpalo`. Lets a `bumpalo::collections::Vec` act as a [`ViewSource`]. Adds a dependency on `bumpalo`.
//! * `macro`. Enables [`#[derive(ViewSource)]`][crate::ViewSource] for your own containers. Adds a dependency on `arrview_macro`, `syn` and `quote`.
//! * `doc`. Renders the diagrams in this documentation. Adds a dependency on `svgbobdoc`.
//!

#![no_std]
extern crate alloc;

#[cfg(doc)]
extern crate std;

pub mod cmp;
pub mod convert;
pub mod prelude;
pub mod size;
pub mod source;
pub mod view;
pub mod view_mut;

mod contract;
mod doc_macro;

#[cfg(feature = "macro")]
pub use arrview_macro::ViewSource;
pub use size::{AllowsEmpty, Dynamic, Empty, Fixed, ViewSize};
pub use source::{FixedViewSource, ViewSource, ViewSourceMut};
pub use view::{make_view, ArrayView};
pub use view_mut::ArrayViewMut;

mod footprint {
    use super::*;
    use static_assertions::{assert_eq_size, assert_impl_all, assert_not_impl_any};

    assert_eq_size!(ArrayView<'static, i32>, [usize; 2]);
    assert_eq_size!(ArrayView<'static, i32, Fixed<17>>, usize);
    assert_eq_size!(ArrayView<'static, i32, Empty>, ());
    assert_eq_size!(ArrayViewMut<'static, i32>, [usize; 2]);
    assert_eq_size!(ArrayViewMut<'static, i32, Fixed<17>>, usize);
    assert_eq_size!(ArrayViewMut<'static, i32, Empty>, ());
    assert_eq_size!(Option<ArrayView<'static, i32, Fixed<17>>>, usize);

    assert_impl_all!(ArrayView<'static, i32>: Copy, Send, Sync);
    assert_impl_all!(ArrayViewMut<'static, i32>: Send, Sync);
    assert_not_impl_any!(ArrayViewMut<'static, i32>: Clone);
    assert_not_impl_any!(ArrayView<'static, core::cell::Cell<i32>>: Send, Sync);
}
