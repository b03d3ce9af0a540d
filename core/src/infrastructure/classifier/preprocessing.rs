use image::{DynamicImage, ImageFormat, imageops::FilterType};
use tract_onnx::prelude::tract_ndarray::Array4;

use crate::domain::{
    classification::value_objects::{INPUT_SIZE, Normalization, TensorLayout},
    common::entities::app_errors::CoreError,
};

/// Shape and scaling of the model input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelInput {
    pub width: u32,
    pub height: u32,
    pub normalization: Normalization,
    pub layout: TensorLayout,
}

impl Default for ModelInput {
    fn default() -> Self {
        Self {
            width: INPUT_SIZE,
            height: INPUT_SIZE,
            normalization: Normalization::ImageNet,
            layout: TensorLayout::Nchw,
        }
    }
}

impl ModelInput {
    pub fn shape(&self) -> [usize; 4] {
        let (width, height) = (self.width as usize, self.height as usize);
        match self.layout {
            TensorLayout::Nchw => [1, 3, height, width],
            TensorLayout::Nhwc => [1, height, width, 3],
        }
    }
}

/// Decodes JPEG or PNG bytes. Other formats are rejected even when the
/// `image` crate could read them.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, CoreError> {
    let format = image::guess_format(bytes)
        .map_err(|_| CoreError::ImageDecode("unrecognized image format".to_string()))?;

    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(CoreError::ImageDecode(format!(
            "unsupported image format {:?}, expected JPEG or PNG",
            format
        )));
    }

    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| CoreError::ImageDecode(e.to_string()))
}

/// Resizes to the input resolution with a bicubic filter, normalizes each
/// channel and adds the leading batch dimension.
pub fn image_to_array(image: &DynamicImage, input: &ModelInput) -> Array4<f32> {
    let rgb = image
        .resize_exact(input.width, input.height, FilterType::CatmullRom)
        .to_rgb8();
    let (width, height) = (input.width as usize, input.height as usize);
    let normalization = input.normalization;

    match input.layout {
        TensorLayout::Nchw => Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
            normalization.apply(c, rgb.get_pixel(x as u32, y as u32)[c])
        }),
        TensorLayout::Nhwc => Array4::from_shape_fn((1, height, width, 3), |(_, y, x, c)| {
            normalization.apply(c, rgb.get_pixel(x as u32, y as u32)[c])
        }),
    }
}
