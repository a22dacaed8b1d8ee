use arrview::prelude::*;

fn total(xs: ArrayView<i64>) -> i64 {
    xs.iter().sum()
}

fn main() {
    let mut storage = [1i64, 2, 3];

    let fixed_mut: ArrayViewMut<i64, Fixed<3>> = (&mut storage).into();
    let fixed: ArrayView<i64, Fixed<3>> = fixed_mut.into();
    assert_eq!(total(fixed.into()), 6);

    let dynamic_mut: ArrayViewMut<i64> = ArrayViewMut::from_array(&mut storage).into();
    assert_eq!(total(dynamic_mut.into()), 6);

    let none: [i64; 0] = [];
    let empty: ArrayView<i64, Empty> = (&none).into();
    assert_eq!(total(empty.into()), 0);

    let v = vec![4i64, 5];
    assert_eq!(total((&v).into()), 9);
    assert_eq!(total(make_view(&v[1..])), 5);
}
