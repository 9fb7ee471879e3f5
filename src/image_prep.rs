//! 업로드용 이미지 준비
//!
//! 전송량을 줄이기 위해 긴 변을 `max_dimension`에 맞춰 축소한 뒤
//! JPEG로 다시 인코딩한다.

use crate::error::{Result, ScanError};
use base64::Engine;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;

/// 업로드 준비가 끝난 이미지
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub original_width: u32,
    pub original_height: u32,
}

impl PreparedImage {
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.jpeg)
    }
}

/// 축소 후 크기 계산
///
/// 긴 변이 `max_dimension`이 되고 짧은 변은 비율대로 잘라 버림한다.
/// 원본이 더 작아도 `max_dimension`에 맞춘다.
pub fn scaled_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (max_dimension, max_dimension);
    }

    let (w, h) = if height > width {
        let w = (max_dimension as f32 * width as f32 / height as f32) as u32;
        (w, max_dimension)
    } else if width > height {
        let h = (max_dimension as f32 * height as f32 / width as f32) as u32;
        (max_dimension, h)
    } else {
        (max_dimension, max_dimension)
    };

    (w.max(1), h.max(1))
}

/// 파일에서 이미지를 읽어 업로드용으로 변환
pub fn prepare_image(path: &Path, max_dimension: u32, jpeg_quality: u8) -> Result<PreparedImage> {
    if !path.exists() {
        return Err(ScanError::FileNotFound(path.display().to_string()));
    }

    let img = image::open(path)
        .map_err(|e| ScanError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    prepare_dynamic(&img, max_dimension, jpeg_quality)
}

/// 메모리 상의 이미지 바이트를 업로드용으로 변환
pub fn prepare_bytes(bytes: &[u8], max_dimension: u32, jpeg_quality: u8) -> Result<PreparedImage> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ScanError::ImageLoad(e.to_string()))?;
    prepare_dynamic(&img, max_dimension, jpeg_quality)
}

fn prepare_dynamic(img: &DynamicImage, max_dimension: u32, jpeg_quality: u8) -> Result<PreparedImage> {
    let (original_width, original_height) = (img.width(), img.height());
    let (width, height) = scaled_dimensions(original_width, original_height, max_dimension);

    tracing::debug!(
        original_width,
        original_height,
        width,
        height,
        "이미지 축소"
    );

    let resized = img.resize_exact(width, height, FilterType::Nearest);
    let rgb = resized.to_rgb8();

    let mut jpeg = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, jpeg_quality);
    encoder
        .encode_image(&rgb)
        .map_err(|e| ScanError::ImageLoad(format!("JPEG 인코딩 실패: {}", e)))?;

    Ok(PreparedImage {
        jpeg,
        width,
        height,
        original_width,
        original_height,
    })
}
