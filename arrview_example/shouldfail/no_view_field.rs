use arrview::ViewSource;

#[derive(ViewSource)]
struct NoViewField {
    data: Vec<u8>,
}

fn main() {}
