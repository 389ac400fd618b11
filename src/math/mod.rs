mod color;

pub use color::{hex_to_rgb, to_rgba8, Rgb};
