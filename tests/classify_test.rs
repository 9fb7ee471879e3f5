//! 판별 시나리오 테스트
//!
//! 내장 단어 목록과 파이프라인을 통한 분류 결과를 검증

use ingredient_scan::pipeline::{classify_text, report_from_text};
use ingredient_scan::{load_classifier, resolve_word_list_dir};
use ingredient_scan::config::Config;
use ingredient_scan_common::{classify, format_result, normalize, Category, Classifier};
use std::path::Path;
use tempfile::tempdir;

/// 돼지고기 → 논비건
#[test]
fn test_pork_is_meat() {
    assert_eq!(classify("돼지고기 100g"), Category::Meat);
    assert_eq!(format_result(classify("돼지고기 100g")), "[논비건] 용 음식입니다");
}

/// 우유만 있으면 락토
#[test]
fn test_milk_only_is_dairy() {
    assert_eq!(classify("우유 첨가"), Category::Dairy);
}

/// 목록에 없는 원재료 → 비건
#[test]
fn test_no_terms_is_vegan() {
    assert_eq!(classify("물, 설탕"), Category::NoneDetected);
    assert_eq!(classify(""), Category::NoneDetected);
}

/// 여러 분류가 섞여 있으면 가장 제한이 강한 분류
#[test]
fn test_most_restrictive_wins() {
    let label = "원재료명: 밀가루(미국산), 설탕, 우유, 달걀, 멸치액젓, 닭고기, 돼지고기";
    assert_eq!(classify(label), Category::Meat);
    assert_eq!(classify("밀가루, 설탕, 우유, 달걀, 멸치액젓"), Category::Fish);
    assert_eq!(classify("밀가루, 설탕, 우유, 달걀"), Category::Egg);
}

/// 토큰화된 OCR 텍스트로도 같은 결과
#[test]
fn test_ocr_pipeline_scenarios() {
    let classifier = Classifier::builtin();
    let cases = [
        ("돼지고기 100g", Category::Meat),
        ("원재료: 밀가루, 설탕, 닭고기", Category::Poultry),
        ("멸치육수(국산)", Category::Fish),
        ("우유 첨가", Category::Dairy),
        ("물, 설탕", Category::NoneDetected),
    ];

    for (text, expected) in cases {
        let report = report_from_text("label.jpg", "", Some(text), classifier);
        assert_eq!(report.category, Some(expected), "입력: {}", text);
        assert_eq!(report.message, format_result(expected));
    }
}

/// 같은 입력은 항상 같은 결과
#[test]
fn test_deterministic() {
    let text = normalize("정제수, 우유, 달걀\n멸치");
    let first = Classifier::builtin().classify_detailed(&text);
    let second = Classifier::builtin().classify_detailed(&text);
    assert_eq!(first, second);
}

/// 외부 단어 목록 디렉토리 사용
#[test]
fn test_custom_word_list_dir() {
    let dir = tempdir().expect("임시 폴더 생성 실패");
    std::fs::write(dir.path().join("dairy.txt"), "# 테스트\n치즈\n").unwrap();

    let classifier = load_classifier(Some(dir.path())).expect("목록 로드 실패");
    assert_eq!(classify_text("체다 치즈", &classifier, false).category, Some(Category::Dairy));
    // 나머지 분류는 내장 목록
    assert_eq!(classify_text("돼지고기", &classifier, false).category, Some(Category::Meat));
}

/// 명령행 인자가 설정보다 우선
#[test]
fn test_resolve_word_list_dir() {
    let config = Config {
        word_list_dir: Some("/from/config".into()),
        ..Default::default()
    };
    assert_eq!(
        resolve_word_list_dir(Some(Path::new("/from/cli")), &config),
        Some(Path::new("/from/cli"))
    );
    assert_eq!(resolve_word_list_dir(None, &config), Some(Path::new("/from/config")));
    assert_eq!(resolve_word_list_dir(None, &Config::default()), None);
}
