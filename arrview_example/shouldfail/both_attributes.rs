use arrview::ViewSource;

#[derive(ViewSource)]
struct BothAttributes {
    #[view]
    #[view_mut]
    data: Vec<u8>,
}

fn main() {}
