//! Crate docs carry svgbob diagrams. With the `doc` feature they are rendered to SVG;
//! otherwise the doc lines are concatenated unchanged.

#[cfg(feature = "doc")]
macro_rules! make_svgbobdoc {
    ($($doc:tt)*) => {
        svgbobdoc::transform!($($doc)*)
    };
}

#[cfg(not(feature = "doc"))]
macro_rules! make_svgbobdoc {
    ($( #![doc = $line:literal] )*) => {
        core::concat!($( $line, '\n' ),*)
    };
}

pub(crate) use make_svgbobdoc;
