//! Cloud Vision 문자 인식 클라이언트
//!
//! 이미지 한 장을 `TEXT_DETECTION`으로 요청하고 첫 번째 텍스트 블록을 돌려준다.

use crate::config::Config;
use crate::error::{Result, ScanError};
use crate::image_prep::PreparedImage;
use ingredient_scan_common::{first_text_block, parse_vision_response, BatchAnnotateImagesRequest};
use std::time::Duration;

pub struct VisionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    max_results: u32,
}

impl VisionClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;
        Self::with_endpoint(&config.endpoint, api_key, config.max_results, config.timeout_seconds)
    }

    pub fn with_endpoint(
        endpoint: &str,
        api_key: String,
        max_results: u32,
        timeout_seconds: u64,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ScanError::ApiCall(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
            api_key,
            max_results,
        })
    }

    /// 요청 본문
    pub fn build_request(&self, image: &PreparedImage) -> BatchAnnotateImagesRequest {
        BatchAnnotateImagesRequest::text_detection(image.to_base64(), self.max_results)
    }

    /// 문자 인식 실행
    ///
    /// 텍스트가 검출되지 않으면 `Ok(None)`.
    pub async fn detect_text(&self, image: &PreparedImage) -> Result<Option<String>> {
        let body = self.build_request(image);

        tracing::debug!(
            bytes = image.jpeg.len(),
            width = image.width,
            height = image.height,
            "Cloud Vision 요청 전송"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ScanError::ApiCall(format!("요청 실패: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ScanError::ApiCall(format!("응답 읽기 실패: {}", e)))?;

        if !status.is_success() {
            return Err(ScanError::ApiCall(format!("status {}: {}", status, text)));
        }

        parse_detected_text(&text)
    }
}

/// 응답 본문에서 첫 번째 텍스트 블록을 꺼낸다
pub fn parse_detected_text(body: &str) -> Result<Option<String>> {
    let parsed = parse_vision_response(body).map_err(|e| ScanError::ApiParse(e.to_string()))?;

    if let Some(error) = parsed.first_error() {
        return Err(ScanError::ApiCall(format!(
            "이미지 처리 실패 (code {}): {}",
            error.code, error.message
        )));
    }

    Ok(first_text_block(&parsed).map(str::to_string))
}
