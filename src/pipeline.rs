//! 스캔 파이프라인
//!
//! 이미지 → 축소/인코딩 → 문자 인식(또는 캐시) → 토큰화 → 분류 → 리포트

use crate::cache::{compute_file_hash, CacheFile};
use crate::config::Config;
use crate::error::Result;
use crate::image_prep::{prepare_image, PreparedImage};
use crate::ocr::VisionClient;
use crate::scanner::ImageInfo;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use ingredient_scan_common::{
    format_result, normalize, Category, Classifier, NO_TEXT_PLACEHOLDER, OCR_FAILURE_MESSAGE,
};
use serde::{Deserialize, Serialize};

/// 이미지에서 텍스트를 인식하는 쪽
#[async_trait]
pub trait TextDetector: Send + Sync {
    async fn detect_text(&self, image: &PreparedImage) -> Result<Option<String>>;
}

#[async_trait]
impl TextDetector for VisionClient {
    async fn detect_text(&self, image: &PreparedImage) -> Result<Option<String>> {
        VisionClient::detect_text(self, image).await
    }
}

/// 이미지(또는 텍스트) 한 건의 판별 결과
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub file_name: String,

    #[serde(default)]
    pub file_path: String,

    /// 인식된 원문
    #[serde(default)]
    pub detected_text: String,

    /// OCR 실패 시 None
    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default)]
    pub label: String,

    #[serde(default)]
    pub matched_term: Option<String>,

    /// 화면 표시 메시지
    pub message: String,

    #[serde(default)]
    pub error: Option<String>,

    pub scanned_at: String,
}

impl ScanReport {
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// 스캔 설정
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub max_dimension: u32,
    pub jpeg_quality: u8,
    pub show_progress: bool,
}

impl ScanOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_dimension: config.max_dimension,
            jpeg_quality: config.jpeg_quality,
            show_progress: true,
        }
    }
}

fn now() -> String {
    chrono::Local::now().to_rfc3339()
}

/// 인식 텍스트로 리포트 생성
///
/// 텍스트가 없으면 `"nothing"`을 분류한다 (결과는 항상 최저 단계).
pub fn report_from_text(
    file_name: &str,
    file_path: &str,
    text: Option<&str>,
    classifier: &Classifier,
) -> ScanReport {
    let normalized = normalize(text.unwrap_or(NO_TEXT_PLACEHOLDER));
    let classification = classifier.classify_detailed(&normalized);

    tracing::debug!(
        file_name,
        category = ?classification.category,
        matched_term = ?classification.matched_term,
        "분류 완료"
    );

    ScanReport {
        file_name: file_name.to_string(),
        file_path: file_path.to_string(),
        detected_text: text.unwrap_or_default().to_string(),
        category: Some(classification.category),
        label: classification.category.label().to_string(),
        matched_term: classification.matched_term,
        message: format_result(classification.category),
        error: None,
        scanned_at: now(),
    }
}

/// OCR 실패 리포트. 분류 대신 고정 메시지를 담는다.
pub fn failed_report(image: &ImageInfo, error: &str) -> ScanReport {
    ScanReport {
        file_name: image.file_name.clone(),
        file_path: image.path.display().to_string(),
        detected_text: String::new(),
        category: None,
        label: String::new(),
        matched_term: None,
        message: OCR_FAILURE_MESSAGE.to_string(),
        error: Some(error.to_string()),
        scanned_at: now(),
    }
}

/// 텍스트를 직접 분류
///
/// `raw`이면 토큰화하지 않고 그대로 검사한다.
pub fn classify_text(text: &str, classifier: &Classifier, raw: bool) -> ScanReport {
    if raw {
        let classification = classifier.classify_detailed(text);
        ScanReport {
            file_name: "-".to_string(),
            file_path: String::new(),
            detected_text: text.to_string(),
            category: Some(classification.category),
            label: classification.category.label().to_string(),
            matched_term: classification.matched_term,
            message: format_result(classification.category),
            error: None,
            scanned_at: now(),
        }
    } else {
        report_from_text("-", "", Some(text), classifier)
    }
}

async fn recognize(
    image: &ImageInfo,
    detector: &dyn TextDetector,
    options: &ScanOptions,
) -> Result<Option<String>> {
    let prepared = prepare_image(&image.path, options.max_dimension, options.jpeg_quality)?;
    detector.detect_text(&prepared).await
}

/// 이미지 목록을 순서대로 판별
///
/// 한 장의 실패는 로그로 남기고 실패 리포트로 기록할 뿐 전체를 중단하지 않는다.
pub async fn scan_images(
    images: &[ImageInfo],
    detector: &dyn TextDetector,
    classifier: &Classifier,
    mut cache: Option<&mut CacheFile>,
    options: &ScanOptions,
) -> Vec<ScanReport> {
    let progress = if options.show_progress && images.len() > 1 {
        let bar = ProgressBar::new(images.len() as u64);
        if let Ok(style) = ProgressStyle::with_template("  [{bar:30}] {pos}/{len} {msg}") {
            bar.set_style(style.progress_chars("=> "));
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut reports = Vec::with_capacity(images.len());

    for image in images {
        progress.set_message(image.file_name.clone());

        let hashed = match &cache {
            Some(_) => match compute_file_hash(&image.path) {
                Ok(h) => Some(h),
                Err(e) => {
                    tracing::warn!("해시 계산 실패 {}: {}", image.file_name, e);
                    None
                }
            },
            None => None,
        };

        let cached_text = match (&cache, &hashed) {
            (Some(c), Some((hash, _))) => c.get(hash).map(|entry| entry.text.clone()),
            _ => None,
        };

        let text = match cached_text {
            Some(text) => {
                tracing::debug!("캐시 사용: {}", image.file_name);
                Ok(text)
            }
            None => recognize(image, detector, options).await,
        };

        let report = match text {
            Ok(text) => {
                if let (Some(c), Some((hash, size))) = (cache.as_deref_mut(), hashed) {
                    c.insert(hash, image.file_name.clone(), size, text.clone());
                }
                report_from_text(
                    &image.file_name,
                    &image.path.display().to_string(),
                    text.as_deref(),
                    classifier,
                )
            }
            Err(e) => {
                tracing::error!("문자 인식 실패 {}: {}", image.file_name, e);
                failed_report(image, &e.to_string())
            }
        };

        reports.push(report);
        progress.inc(1);
    }

    progress.finish_and_clear();
    reports
}
