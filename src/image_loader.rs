use egui::ColorImage;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::path::Path;

/// Decodes a static image file into pixels ready for upload as a texture.
pub fn load_color_image(path: &Path) -> Result<ColorImage, String> {
    let bytes =
        fs::read(path).map_err(|err| format!("Failed to read {}: {err}", path.display()))?;

    let format = image::guess_format(&bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map_err(|err| format!("Failed to determine format for {}: {err}", path.display()))?;

    let image = image::load_from_memory_with_format(&bytes, format)
        .map_err(|err| format!("Failed to decode {}: {err}", path.display()))?;
    Ok(color_image_from_dynamic(image))
}

fn color_image_from_dynamic(image: DynamicImage) -> ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
