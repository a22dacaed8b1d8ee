use arrview::ViewSource;

#[derive(ViewSource)]
struct TwoViewFields {
    #[view]
    first: Vec<u8>,
    #[view]
    second: Vec<u8>,
}

fn main() {}
