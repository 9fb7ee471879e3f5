//! 원재료 단어 목록
//!
//! 분류별로 하나의 데이터 파일(`data/<stem>.txt`)을 둔다.
//! 파일 형식:
//! - 한 줄에 단어 하나 (앞뒤 공백 제거)
//! - 빈 줄과 `#`으로 시작하는 줄은 무시
//! - 쉼표가 포함된 줄은 쉼표로도 분할

use crate::category::Category;
use crate::error::Result;
use std::collections::HashSet;

const MEAT_DATA: &str = include_str!("../data/meat.txt");
const POULTRY_DATA: &str = include_str!("../data/poultry.txt");
const FISH_DATA: &str = include_str!("../data/fish.txt");
const EGG_DATA: &str = include_str!("../data/egg.txt");
const DAIRY_DATA: &str = include_str!("../data/dairy.txt");

/// 단어 목록의 출처
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    /// 바이너리에 포함된 기본 목록
    Builtin,
    /// 외부 데이터 파일
    File(std::path::PathBuf),
    /// 코드에서 직접 생성
    Inline,
}

impl std::fmt::Display for ListSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListSource::Builtin => write!(f, "내장"),
            ListSource::File(path) => write!(f, "{}", path.display()),
            ListSource::Inline => write!(f, "인라인"),
        }
    }
}

/// 하나의 분류에 속하는 단어 집합
///
/// 중복과 빈 문자열은 저장하지 않는다. 빈 문자열은 모든 텍스트에 포함되므로
/// 남겨두면 해당 분류가 항상 일치해 버린다.
#[derive(Debug, Clone)]
pub struct WordList {
    category: Category,
    terms: Vec<String>,
    source: ListSource,
}

impl WordList {
    pub fn new<I, S>(category: Category, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self {
            category,
            terms: Vec::new(),
            source: ListSource::Inline,
        };
        list.extend(terms);
        list
    }

    /// 데이터 파일 내용을 파싱
    pub fn parse(category: Category, text: &str) -> Self {
        let terms = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .flat_map(|line| line.split(','))
            .map(str::trim);

        Self::new(category, terms)
    }

    /// 내장 목록
    ///
    /// `NoneDetected`는 목록이 없으므로 빈 목록을 반환한다.
    pub fn builtin(category: Category) -> Self {
        let data = match category {
            Category::Meat => MEAT_DATA,
            Category::Poultry => POULTRY_DATA,
            Category::Fish => FISH_DATA,
            Category::Egg => EGG_DATA,
            Category::Dairy => DAIRY_DATA,
            Category::NoneDetected => "",
        };
        Self::parse(category, data).with_source(ListSource::Builtin)
    }

    /// 데이터 파일에서 읽기（비WASM 환경만）
    #[cfg(not(feature = "wasm"))]
    pub fn from_file(category: Category, path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(category, &content).with_source(ListSource::File(path.to_path_buf())))
    }

    pub fn with_source(mut self, source: ListSource) -> Self {
        self.source = source;
        self
    }

    /// 단어 추가 (빈 문자열·중복 제외, 먼저 나온 순서 유지)
    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = self.terms.iter().cloned().collect();
        for term in terms {
            let term = term.into();
            if term.is_empty() || seen.contains(&term) {
                continue;
            }
            seen.insert(term.clone());
            self.terms.push(term);
        }
    }

    /// `text` 안에 부분 문자열로 포함된 첫 번째 단어 (목록 순서 기준)
    pub fn contains_in(&self, text: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|term| text.contains(term.as_str()))
            .map(String::as_str)
    }

    /// 단어가 목록에 그대로 들어 있는지
    pub fn has_term(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn source(&self) -> &ListSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// 데이터 파일 형식으로 직렬화
    pub fn to_data_string(&self) -> String {
        let mut out = format!("# {} 원재료 목록\n", self.category.label());
        for term in &self.terms {
            out.push_str(term);
            out.push('\n');
        }
        out
    }
}

/// 우선순위 순서로 정렬된 분류별 단어 목록
#[derive(Debug, Clone)]
pub struct WordLists {
    lists: Vec<WordList>,
}

impl WordLists {
    /// 내장 목록 전체
    pub fn builtin() -> Self {
        Self {
            lists: Category::PRIORITY.iter().map(|&c| WordList::builtin(c)).collect(),
        }
    }

    /// 임의 순서의 목록들로 구성
    ///
    /// 같은 분류의 목록은 합치고, 빠진 분류는 빈 목록으로 채운다.
    /// `NoneDetected` 목록은 검사 대상이 아니므로 버린다.
    pub fn from_lists(lists: impl IntoIterator<Item = WordList>) -> Self {
        let mut ordered: Vec<WordList> = Category::PRIORITY
            .iter()
            .map(|&c| WordList::new(c, Vec::<String>::new()))
            .collect();

        for list in lists {
            if let Some(slot) = ordered.iter_mut().find(|l| l.category == list.category) {
                if slot.is_empty() {
                    *slot = list;
                } else {
                    slot.extend(list.terms);
                }
            }
        }

        Self { lists: ordered }
    }

    /// 디렉토리에서 `<stem>.txt`를 읽기（비WASM 환경만）
    ///
    /// 파일이 없는 분류는 내장 목록을 사용한다. 출처는 `WordList::source`로 확인.
    #[cfg(not(feature = "wasm"))]
    pub fn from_dir(dir: &std::path::Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(crate::error::Error::Config(format!(
                "단어 목록 디렉토리가 없습니다: {}",
                dir.display()
            )));
        }

        let mut lists = Vec::with_capacity(Category::PRIORITY.len());
        for category in Category::PRIORITY {
            let Some(stem) = category.file_stem() else { continue };
            let path = dir.join(format!("{}.txt", stem));
            if path.is_file() {
                lists.push(WordList::from_file(category, &path)?);
            } else {
                lists.push(WordList::builtin(category));
            }
        }

        Ok(Self { lists })
    }

    /// 데이터 파일로 내보내기（비WASM 환경만）
    #[cfg(not(feature = "wasm"))]
    pub fn write_dir(&self, dir: &std::path::Path) -> Result<Vec<std::path::PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for list in &self.lists {
            let Some(stem) = list.category.file_stem() else { continue };
            let path = dir.join(format!("{}.txt", stem));
            std::fs::write(&path, list.to_data_string())?;
            written.push(path);
        }
        Ok(written)
    }

    pub fn get(&self, category: Category) -> Option<&WordList> {
        self.lists.iter().find(|l| l.category == category)
    }

    /// 우선순위 순서로 순회
    pub fn iter(&self) -> impl Iterator<Item = &WordList> {
        self.lists.iter()
    }

    /// 단어를 그대로 포함하는 분류 목록
    pub fn categories_with_term(&self, term: &str) -> Vec<Category> {
        self.lists
            .iter()
            .filter(|l| l.has_term(term))
            .map(|l| l.category)
            .collect()
    }

    pub fn total_terms(&self) -> usize {
        self.lists.iter().map(WordList::len).sum()
    }
}

impl Default for WordLists {
    fn default() -> Self {
        Self::builtin()
    }
}
