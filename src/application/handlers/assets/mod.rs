//! Asset handlers

mod convert_images;

pub use convert_images::{ConvertImagesCommand, ConvertImagesHandler, ImageConversionError};
