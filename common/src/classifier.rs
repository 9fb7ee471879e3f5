//! 원재료 분류기
//!
//! OCR 텍스트에 각 분류의 단어가 부분 문자열로 포함되어 있는지를
//! 우선순위 순서(육류 → 가금류 → 어패류 → 알류 → 유제품)로 검사하고,
//! 처음 일치한 분류를 반환한다. 어느 목록에도 일치하지 않으면 비건.
//!
//! 토큰 단위가 아닌 단순 포함 검사이므로 짧은 단어가 다른 단어 안에서
//! 일치할 수 있다 (예: "연어알"은 어패류 "연어"에 먼저 걸린다).

use crate::category::Category;
use crate::word_list::WordLists;
use serde::{Deserialize, Serialize};

lazy_static::lazy_static! {
    static ref BUILTIN: Classifier = Classifier::new(WordLists::builtin());
}

/// 분류 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub category: Category,
    /// 분류를 결정한 단어 (일치 없음이면 None)
    #[serde(default)]
    pub matched_term: Option<String>,
}

impl Classification {
    fn none_detected() -> Self {
        Self {
            category: Category::NoneDetected,
            matched_term: None,
        }
    }
}

/// 단어 목록 기반 분류기
#[derive(Debug, Clone)]
pub struct Classifier {
    lists: WordLists,
}

impl Classifier {
    pub fn new(lists: WordLists) -> Self {
        Self { lists }
    }

    /// 내장 단어 목록을 사용하는 공유 인스턴스
    pub fn builtin() -> &'static Classifier {
        &BUILTIN
    }

    pub fn word_lists(&self) -> &WordLists {
        &self.lists
    }

    /// 텍스트를 분류
    pub fn classify(&self, text: &str) -> Category {
        self.classify_detailed(text).category
    }

    /// 일치한 단어까지 함께 반환
    pub fn classify_detailed(&self, text: &str) -> Classification {
        if text.is_empty() {
            return Classification::none_detected();
        }

        for list in self.lists.iter() {
            if let Some(term) = list.contains_in(text) {
                return Classification {
                    category: list.category(),
                    matched_term: Some(term.to_string()),
                };
            }
        }

        Classification::none_detected()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(WordLists::builtin())
    }
}

/// 내장 단어 목록으로 분류
pub fn classify(text: &str) -> Category {
    Classifier::builtin().classify(text)
}
