//! Single module with all `arrview` exports
//!
//! # Examples
//!
//! ```
//! use arrview::prelude::*;
//! let v: ArrayView<u8, Fixed<2>> = ArrayView::from_array(&[1, 2]);
//! assert!(v.is_fixed_size());
//! ```

pub use crate::size::{AllowsEmpty, Dynamic, Empty, Fixed, ViewSize};
pub use crate::source::{FixedViewSource, ViewSourceMut};
// Also brings in `#[derive(ViewSource)]` when the `macro` feature is on.
pub use crate::ViewSource;
pub use crate::view::{make_view, ArrayView};
pub use crate::view_mut::ArrayViewMut;
