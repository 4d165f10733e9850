//! Image encoding adapters

mod webp_converter;

pub use webp_converter::WebpConverter;
