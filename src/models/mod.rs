pub mod config;
pub mod palette;

pub use config::AppConfig;
pub use palette::{Palette, Rgb, Swatch, SwatchRole};
