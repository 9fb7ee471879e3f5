//! 식단 분류 단계
//!
//! 검출된 원재료 중 가장 제한이 강한 단계를 나타낸다.
//! 선언 순서가 곧 검사 우선순위다.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 식단 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 육류 (논비건)
    Meat,
    /// 가금류 (세미)
    Poultry,
    /// 어패류 (페스코)
    Fish,
    /// 알류 (락토오보)
    Egg,
    /// 유제품 (락토)
    Dairy,
    /// 해당 없음 (비건)
    NoneDetected,
}

impl Category {
    /// 단어 목록을 가진 분류. 이 순서대로 검사한다.
    pub const PRIORITY: [Category; 5] = [
        Category::Meat,
        Category::Poultry,
        Category::Fish,
        Category::Egg,
        Category::Dairy,
    ];

    /// 화면 표시용 이름
    pub fn label(&self) -> &'static str {
        match self {
            Category::Meat => "논비건",
            Category::Poultry => "세미",
            Category::Fish => "페스코",
            Category::Egg => "락토오보",
            Category::Dairy => "락토",
            Category::NoneDetected => "비건",
        }
    }

    /// 단어 목록 데이터 파일 이름 (확장자 제외)
    pub fn file_stem(&self) -> Option<&'static str> {
        match self {
            Category::Meat => Some("meat"),
            Category::Poultry => Some("poultry"),
            Category::Fish => Some("fish"),
            Category::Egg => Some("egg"),
            Category::Dairy => Some("dairy"),
            Category::NoneDetected => None,
        }
    }

    pub fn is_lowest(&self) -> bool {
        matches!(self, Category::NoneDetected)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "meat" | "논비건" => Ok(Category::Meat),
            "poultry" | "chicken" | "세미" => Ok(Category::Poultry),
            "fish" | "seafood" | "페스코" => Ok(Category::Fish),
            "egg" | "락토오보" => Ok(Category::Egg),
            "dairy" | "milk" | "락토" => Ok(Category::Dairy),
            "none" | "vegan" | "비건" => Ok(Category::NoneDetected),
            _ => Err(Error::Parse(format!("알 수 없는 분류: {}", s))),
        }
    }
}
