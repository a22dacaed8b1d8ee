use arrview::ViewSource;

#[derive(ViewSource)]
enum NotAStruct {
    A(Vec<u8>),
}

fn main() {}
