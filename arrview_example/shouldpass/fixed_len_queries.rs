use arrview::prelude::*;

const FRAME: usize = ArrayView::<'static, u8, Fixed<7>>::LEN;

fn describe<S: ViewSize>() -> Option<usize> {
    S::FIXED_LEN
}

fn main() {
    assert_eq!(FRAME, 7);
    assert_eq!(describe::<Fixed<7>>(), Some(7));
    assert_eq!(describe::<Empty>(), Some(0));
    assert_eq!(describe::<Dynamic>(), None);

    let a = [0u8; 7];
    let view = ArrayView::from_array(&a);
    assert!(view.is_fixed_size());
    assert!(!view.into_dynamic().is_fixed_size());
}
