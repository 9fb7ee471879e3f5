pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod image_prep;
pub mod ocr;
pub mod pipeline;
pub mod scanner;

use config::Config;
use error::Result;
use ingredient_scan_common::{Classifier, WordLists};
use std::path::Path;

/// 분류기 준비
///
/// 디렉토리가 지정되면 그 목록을, 아니면 내장 목록을 사용한다.
pub fn load_classifier(word_list_dir: Option<&Path>) -> Result<Classifier> {
    match word_list_dir {
        Some(dir) => {
            let lists = WordLists::from_dir(dir)?;
            for list in lists.iter() {
                tracing::info!(
                    category = ?list.category(),
                    terms = list.len(),
                    source = %list.source(),
                    "단어 목록 로드"
                );
            }
            Ok(Classifier::new(lists))
        }
        None => Ok(Classifier::builtin().clone()),
    }
}

/// 명령행 인자 → 설정 순으로 단어 목록 디렉토리를 결정
pub fn resolve_word_list_dir<'a>(cli_dir: Option<&'a Path>, config: &'a Config) -> Option<&'a Path> {
    cli_dir.or(config.word_list_dir.as_deref())
}
