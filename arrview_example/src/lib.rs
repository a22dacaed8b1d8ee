#![allow(dead_code)]
//! Containers that expose their elements to `arrview` through `#[derive(ViewSource)]`.
use arrview::prelude::*;

/// Audio samples and their rate. The samples can be written through a mutable view.
#[derive(ViewSource, Debug, Default)]
pub struct SampleBuffer {
    /// Samples per second.
    pub rate: u32,
    #[view_mut]
    /// Interleaved samples.
    pub samples: Vec<f32>,
}

/// A packet with a compile-time payload size.
#[derive(ViewSource)]
pub struct Frame<const N: usize> {
    /// Sequence number, not part of the view.
    pub seq: u64,
    #[view_mut]
    /// Payload.
    pub bytes: [u8; N],
}

/// A read-only text label, viewed as UTF-8 bytes.
#[derive(ViewSource)]
pub struct Label(#[view] pub String);

/// A window into someone else's elements, tagged with where it starts.
#[derive(ViewSource)]
pub struct Window<'a, T>
where
    T: Copy,
{
    /// Offset of the window within the original storage.
    pub origin: usize,
    #[view]
    /// The elements.
    pub elems: ArrayView<'a, T>,
}

impl<'a, T: Copy> Window<'a, T> {
    /// Splits `elems` into windows of at most `width` elements.
    ///
    /// A `width` of zero gives no windows.
    pub fn chunks(elems: ArrayView<'a, T>, width: usize) -> Vec<Self> {
        let mut out = Vec::new();
        if width == 0 {
            return out;
        }
        let mut origin = 0;
        while origin < elems.len() {
            out.push(Window {
                origin,
                elems: elems.subview(origin, width),
            });
            origin += width;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoffset::offset_of;
    use std::mem::size_of;

    #[test]
    fn sample_buffer_writes_through() {
        let mut buf = SampleBuffer {
            rate: 8000,
            samples: vec![0.0; 4],
        };
        {
            let mut view: ArrayViewMut<f32> = (&mut buf).into();
            for (i, s) in view.iter_mut().enumerate() {
                *s = i as f32 * 0.5;
            }
        }
        assert_eq!(buf.samples, [0.0, 0.5, 1.0, 1.5]);

        let view = ArrayView::new(&buf);
        assert_eq!(view.as_ptr(), buf.samples.as_ptr());
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn empty_buffer_gives_empty_view() {
        let buf = SampleBuffer::default();
        let view = ArrayView::new(&buf);
        assert!(view.is_empty());
        assert_eq!(view, ArrayView::<f32>::empty());
    }

    #[test]
    fn frame_is_a_fixed_source() {
        let mut frame = Frame::<4> {
            seq: 9,
            bytes: [1, 2, 3, 4],
        };
        let fixed: ArrayView<u8, Fixed<4>> = ArrayView::from_fixed(&frame);
        assert_eq!(fixed.as_array(), &[1, 2, 3, 4]);
        assert_eq!(size_of::<ArrayView<u8, Fixed<4>>>(), size_of::<usize>());

        let fixed_mut: ArrayViewMut<u8, Fixed<4>> = (&mut frame).into();
        fixed_mut.into_array().reverse();
        assert_eq!(frame.bytes, [4, 3, 2, 1]);
        assert_eq!(frame.seq, 9);
    }

    fn payload_len<const N: usize>(frame: &Frame<N>) -> usize {
        ArrayView::<u8, Fixed<N>>::from_fixed(frame).len()
    }

    #[test]
    fn frame_length_follows_const_parameter() {
        assert_eq!(payload_len(&Frame { seq: 0, bytes: [0u8; 2] }), 2);
        assert_eq!(payload_len(&Frame { seq: 1, bytes: [0u8; 16] }), 16);
        assert_eq!(ArrayView::<u8, Fixed<16>>::LEN, 16);
    }

    #[test]
    fn label_views_bytes() {
        let label = Label(String::from("naïve"));
        let view: ArrayView<u8> = ArrayView::new(&label);
        assert_eq!(view.len(), 6);
        assert_eq!(std::str::from_utf8(view.as_slice()), Ok("naïve"));
    }

    #[test]
    fn windows_chain_views() {
        let data: Vec<u16> = (0..10).collect();
        let windows = Window::chunks(ArrayView::new(&data), 4);
        assert_eq!(windows.len(), 3);
        assert_eq!(windows[2].origin, 8);

        let last: ArrayView<u16> = ArrayView::new(&windows[2]);
        assert_eq!(last.as_slice(), &[8, 9]);
        assert_eq!(last.as_ptr(), data[8..].as_ptr());
    }

    #[test]
    fn zero_width_gives_no_windows() {
        let data = [1u8, 2, 3];
        assert!(Window::chunks(ArrayView::from_slice(&data), 0).is_empty());
        assert!(Window::chunks(ArrayView::<u8>::empty(), 2).is_empty());
    }

    #[repr(C)]
    struct Record<'a> {
        fixed: ArrayView<'a, u32, Fixed<4>>,
        dynamic: ArrayView<'a, u32>,
        empty: ArrayView<'a, u32, Empty>,
        tag: u8,
    }

    #[test]
    fn embedded_view_layout() {
        let word = size_of::<usize>();
        assert_eq!(0, offset_of!(Record, fixed));
        assert_eq!(word, offset_of!(Record, dynamic));
        assert_eq!(3 * word, offset_of!(Record, empty));
        assert_eq!(3 * word, offset_of!(Record, tag));
        assert_eq!(4 * word, size_of::<Record>());
    }

    #[test]
    fn accepted_usages_compile() {
        let t = trybuild::TestCases::new();
        t.pass("shouldpass/*.rs");
    }

    #[test]
    fn compile_errors_are_good() {
        let t = trybuild::TestCases::new();
        t.compile_fail("shouldfail/*.rs");
    }
}
