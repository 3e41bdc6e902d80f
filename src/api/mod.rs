pub mod color;

pub use color::{handle_dominant_color, ColorRequest, ColorResponse, __path_handle_dominant_color};
