use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const API_KEY_ENV: &str = "GOOGLE_VISION_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub endpoint: String,
    /// 업로드 전 축소할 긴 변의 픽셀 수
    pub max_dimension: u32,
    pub max_results: u32,
    pub jpeg_quality: u8,
    pub timeout_seconds: u64,
    /// 외부 단어 목록 디렉토리 (없으면 내장 목록)
    pub word_list_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.into(),
            max_dimension: 1200,
            max_results: 10,
            jpeg_quality: 90,
            timeout_seconds: 60,
            word_list_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScanError::Config("홈 디렉토리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("ingredient-scan").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 환경 변수 우선
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ScanError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn set_word_list_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.word_list_dir = Some(dir);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_dimension, 1200);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.jpeg_quality, 90);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.word_list_dir.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"max_dimension": 800}"#).unwrap();
        assert_eq!(config.max_dimension, 800);
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            api_key: Some("key-123".into()),
            word_list_dir: Some(PathBuf::from("/data/lists")),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("key-123"));
        assert_eq!(loaded.word_list_dir, Some(PathBuf::from("/data/lists")));
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(loaded.max_dimension, 1200);
    }
}
