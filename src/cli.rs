use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ingredient-scan")]
#[command(about = "식품 원재료 사진으로 채식 단계를 판별하는 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 단어 목록 디렉토리 (설정값보다 우선)
    #[arg(long, global = true)]
    pub word_lists: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 사진(파일 또는 폴더)을 OCR로 읽어 판별
    Scan {
        /// 이미지 파일 또는 폴더 경로
        #[arg(required = true)]
        path: PathBuf,

        /// 결과 JSON 파일
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 하위 폴더도 재귀적으로 스캔
        #[arg(short = 'r', long)]
        recursive: bool,

        /// OCR 캐시 사용 (같은 이미지 재요청 생략)
        #[arg(long)]
        use_cache: bool,
    },

    /// 텍스트를 직접 판별 (인자, 파일, 표준 입력)
    Classify {
        /// 판별할 텍스트 (생략 시 --file 또는 표준 입력)
        text: Option<String>,

        /// 텍스트 파일
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// 토큰화 없이 원문 그대로 검사
        #[arg(long)]
        raw: bool,
    },

    /// 단어 목록 확인/내보내기
    Lists {
        /// 데이터 파일로 내보낼 디렉토리
        #[arg(long)]
        export: Option<PathBuf>,

        /// 단어가 들어 있는 분류 확인
        #[arg(long)]
        check: Option<String>,
    },

    /// 설정 표시/편집
    Config {
        /// API 키 설정
        #[arg(long)]
        set_api_key: Option<String>,

        /// 단어 목록 디렉토리 설정
        #[arg(long)]
        set_word_lists: Option<PathBuf>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },

    /// 캐시 관리
    Cache {
        /// 캐시 삭제
        #[arg(long)]
        clear: bool,

        /// 대상 폴더 (생략 시 현재 폴더)
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// 캐시 정보 표시
        #[arg(long)]
        info: bool,
    },
}
