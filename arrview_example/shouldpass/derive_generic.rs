use arrview::prelude::*;

#[derive(ViewSource)]
struct Tagged<T: Clone, const N: usize> {
    name: &'static str,
    #[view_mut]
    items: [T; N],
}

#[derive(ViewSource)]
struct Stack<T>(u8, #[view] Vec<T>) where T: Default;

fn first<S: ViewSource<Elem = u32>>(s: &S) -> Option<u32> {
    ArrayView::new(s).get(0).copied()
}

fn main() {
    let mut t = Tagged { name: "t", items: [7u32, 8] };
    let view: ArrayView<u32, Fixed<2>> = ArrayView::from_fixed(&t);
    assert_eq!(view.as_array(), &[7, 8]);
    ArrayViewMut::<u32, Fixed<2>>::from_fixed(&mut t)[1] = 9;
    assert_eq!(t.items, [7, 9]);
    assert_eq!(first(&t), Some(7));

    let s = Stack(0, vec![3u32]);
    assert_eq!(first(&s), Some(3));
    assert_eq!(first(&Stack::<u32>(1, vec![])), None);
}
