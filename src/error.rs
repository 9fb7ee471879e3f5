use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("설정 오류: {0}")]
    Config(String),

    #[error("API 키가 설정되지 않았습니다. `ingredient-scan config --set-api-key YOUR_KEY` 로 설정하세요")]
    MissingApiKey,

    #[error("파일을 찾을 수 없습니다: {0}")]
    FileNotFound(String),

    #[error("폴더를 찾을 수 없습니다: {0}")]
    FolderNotFound(String),

    #[error("이미지 읽기 오류: {0}")]
    ImageLoad(String),

    #[error("API 호출 오류: {0}")]
    ApiCall(String),

    #[error("API 응답 파싱 실패: {0}")]
    ApiParse(String),

    #[error("JSON 해석 오류: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO 오류: {0}")]
    Io(#[from] std::io::Error),

    #[error("이미지를 찾을 수 없습니다: {0}")]
    NoImagesFound(String),

    #[error(transparent)]
    Common(#[from] ingredient_scan_common::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
