use arrview::ViewSource;

#[derive(ViewSource)]
struct WithArguments {
    #[view(len = 3)]
    data: Vec<u8>,
}

fn main() {}
