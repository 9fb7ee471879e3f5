//! OCR 텍스트 토큰화
//!
//! 인식된 텍스트를 구분자(`,` `:` `(` `)` 줄바꿈, 공백 문자)로 나누고
//! 토큰마다 줄바꿈을 붙여 다시 합친다. 분류는 이 정규화된 텍스트에 대해 수행한다.
//! 구분자가 줄바꿈으로 바뀌므로 공백을 포함한 단어("PORK OIL" 등)는
//! 정규화된 텍스트에서 일치하지 않는다.

use regex::Regex;

lazy_static::lazy_static! {
    static ref SEPARATOR: Regex = Regex::new(r"[,:()\n\s]").unwrap();
}

/// 구분자로 분할
///
/// 연속된 구분자 사이의 빈 토큰은 유지하고, 끝에 붙은 빈 토큰만 제거한다.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = SEPARATOR.split(text).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// 토큰마다 줄바꿈을 붙여 합친 텍스트
pub fn normalize(text: &str) -> String {
    let mut message = String::with_capacity(text.len() + 1);
    for token in tokenize(text) {
        message.push_str(token);
        message.push('\n');
    }
    message
}
