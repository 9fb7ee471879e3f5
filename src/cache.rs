//! OCR 결과 캐시
//!
//! 이미지 내용의 SHA-256 해시를 키로 인식 텍스트를 저장해
//! 같은 이미지의 재요청을 건너뛴다. 분류 결과는 저장하지 않는다
//! (단어 목록이 바뀌면 결과도 달라지므로).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".ocr-cache.json";

/// 캐시 파일 구조
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// 버전 (호환성 확인용)
    version: u32,
    /// 파일 해시 → 인식 텍스트
    entries: HashMap<String, CacheEntry>,
}

/// 캐시 항목
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub file_name: String,
    pub file_size: u64,
    /// None이면 텍스트가 검출되지 않은 이미지
    pub text: Option<String>,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// 캐시 파일 읽기. 없거나 손상됐으면 빈 캐시.
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("캐시 파일을 열 수 없습니다: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_reader::<_, CacheFile>(BufReader::new(file)) {
            Ok(cache) if cache.version == Self::CURRENT_VERSION => cache,
            Ok(_) => {
                tracing::warn!("캐시 버전 불일치, 다시 생성합니다");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("캐시 파일이 손상되었습니다: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// 캐시 파일 삭제. 파일이 없었으면 `Ok(false)`.
    pub fn clear(folder: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(folder);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn get(&self, hash: &str) -> Option<&CacheEntry> {
        self.entries.get(hash)
    }

    pub fn insert(&mut self, hash: String, file_name: String, file_size: u64, text: Option<String>) {
        self.entries.insert(hash, CacheEntry {
            file_name,
            file_size,
            text,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// 파일 내용의 SHA-256 (16진수)
pub fn compute_file_hash(path: &Path) -> Result<(String, u64)> {
    let bytes = std::fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok((hex::encode(digest), bytes.len() as u64))
}
