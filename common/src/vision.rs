//! Cloud Vision `images:annotate` 요청/응답 모델
//!
//! 문자 인식(`TEXT_DETECTION`)에 필요한 필드만 정의한다.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 요청할 기능
pub const TEXT_DETECTION: &str = "TEXT_DETECTION";

/// 텍스트 주석이 없을 때 분류기에 넘기는 텍스트
pub const NO_TEXT_PLACEHOLDER: &str = "nothing";

// =============================================
// 요청
// =============================================

#[derive(Debug, Clone, Serialize)]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Image {
    /// Base64 인코딩된 이미지
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub max_results: u32,
}

impl BatchAnnotateImagesRequest {
    /// 이미지 한 장에 대한 문자 인식 요청
    pub fn text_detection(base64_content: String, max_results: u32) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: Image { content: base64_content },
                features: vec![Feature {
                    feature_type: TEXT_DETECTION.to_string(),
                    max_results,
                }],
            }],
        }
    }
}

// =============================================
// 응답
// =============================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchAnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    /// 첫 번째 요소가 전체 텍스트, 이후는 단어 단위
    #[serde(default)]
    pub text_annotations: Option<Vec<EntityAnnotation>>,
    #[serde(default)]
    pub error: Option<Status>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bounding_poly: Option<BoundingPoly>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundingPoly {
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// 이미지 단위 오류
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl BatchAnnotateImagesResponse {
    /// 첫 번째 응답의 오류
    pub fn first_error(&self) -> Option<&Status> {
        self.responses.first().and_then(|r| r.error.as_ref())
    }
}

/// 응답 JSON 파싱
pub fn parse_vision_response(json: &str) -> Result<BatchAnnotateImagesResponse> {
    serde_json::from_str(json)
        .map_err(|e| Error::Parse(format!("Vision 응답 파싱 오류: {}", e)))
}

/// 첫 번째 응답의 첫 번째 텍스트 블록(전체 텍스트)
pub fn first_text_block(response: &BatchAnnotateImagesResponse) -> Option<&str> {
    response
        .responses
        .first()
        .and_then(|r| r.text_annotations.as_ref())
        .and_then(|annotations| annotations.first())
        .map(|a| a.description.as_str())
}
