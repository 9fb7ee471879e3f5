//! Ingredient Scan Common Library
//!
//! CLI와 다른 프런트엔드가 공유하는 분류 로직과 타입

pub mod category;
pub mod classifier;
pub mod error;
pub mod formatter;
pub mod tokenizer;
pub mod vision;
pub mod word_list;

pub use category::Category;
pub use classifier::{classify, Classification, Classifier};
pub use error::{Error, Result};
pub use formatter::{format_result, LOADING_MESSAGE, OCR_FAILURE_MESSAGE};
pub use tokenizer::{normalize, tokenize};
pub use vision::{
    first_text_block, parse_vision_response, BatchAnnotateImagesRequest,
    BatchAnnotateImagesResponse, NO_TEXT_PLACEHOLDER,
};
pub use word_list::{ListSource, WordList, WordLists};
