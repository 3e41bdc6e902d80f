pub mod image_fetcher;
pub mod palette_extractor;

pub use image_fetcher::{HttpImageFetcher, ImageFetcher};
pub use palette_extractor::{PaletteExtractor, VibrantExtractor};
