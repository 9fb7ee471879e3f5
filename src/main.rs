use clap::Parser;
use ingredient_scan::{cache, cli, config, error, ocr, pipeline, scanner};
use ingredient_scan::{load_classifier, resolve_word_list_dir};
use ingredient_scan_common::{Category, WordLists, LOADING_MESSAGE};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::io::Read;

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("ingredient_scan=debug,ingredient_scan_common=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;

    match cli.command {
        Commands::Scan { path, output, recursive, use_cache } => {
            println!("🥗 ingredient-scan - 원재료 판별\n");

            let word_list_dir = resolve_word_list_dir(cli.word_lists.as_deref(), &config);
            let classifier = load_classifier(word_list_dir)?;

            // 1. 이미지 스캔
            println!("[1/2] 사진을 찾는 중...");
            let images = scanner::scan_path(&path, recursive)?;
            if images.is_empty() {
                return Err(error::ScanError::NoImagesFound(path.display().to_string()));
            }
            println!("✔ {}장의 사진을 찾았습니다\n", images.len());

            // 2. OCR + 판별
            println!("[2/2] {}{}", LOADING_MESSAGE, if use_cache { " (캐시 사용)" } else { "" });
            let client = ocr::VisionClient::new(&config)?;
            let cache_dir = if path.is_dir() {
                path.clone()
            } else {
                path.parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| ".".into())
            };
            let mut ocr_cache = use_cache.then(|| cache::CacheFile::load(&cache_dir));

            let options = pipeline::ScanOptions::from_config(&config);
            let reports = pipeline::scan_images(
                &images,
                &client,
                &classifier,
                ocr_cache.as_mut(),
                &options,
            )
            .await;

            if let Some(c) = &ocr_cache {
                if let Err(e) = c.save(&cache_dir) {
                    tracing::warn!("캐시 저장 실패: {}", e);
                }
            }

            println!();
            for report in &reports {
                if images.len() > 1 {
                    println!("{}: {}", report.file_name, report.message);
                } else {
                    println!("{}", report.message);
                }
                if cli.verbose {
                    if let Some(term) = &report.matched_term {
                        println!("  일치한 원재료: {}", term);
                    }
                }
            }

            if let Some(output) = output {
                let json = serde_json::to_string_pretty(&reports)?;
                std::fs::write(&output, json)?;
                println!("\n✔ 결과 저장: {}", output.display());
            }

            let failed = reports.iter().filter(|r| r.is_failed()).count();
            if failed > 0 {
                println!("\n⚠ {}장은 인식에 실패했습니다", failed);
            }
        }

        Commands::Classify { text, file, raw } => {
            let word_list_dir = resolve_word_list_dir(cli.word_lists.as_deref(), &config);
            let classifier = load_classifier(word_list_dir)?;

            let input = match (text, file) {
                (Some(text), _) => text,
                (None, Some(file)) => {
                    if !file.exists() {
                        return Err(error::ScanError::FileNotFound(file.display().to_string()));
                    }
                    std::fs::read_to_string(&file)?
                }
                (None, None) => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let report = pipeline::classify_text(&input, &classifier, raw);
            println!("{}", report.message);
            if cli.verbose {
                if let Some(term) = &report.matched_term {
                    println!("  일치한 원재료: {}", term);
                }
            }
        }

        Commands::Lists { export, check } => {
            let word_list_dir = resolve_word_list_dir(cli.word_lists.as_deref(), &config);
            let classifier = load_classifier(word_list_dir)?;
            let lists: &WordLists = classifier.word_lists();

            println!("단어 목록 (검사 순서):");
            for list in lists.iter() {
                println!(
                    "  {:<8} {:>5}개  ({})",
                    list.category().label(),
                    list.len(),
                    list.source()
                );
            }
            println!("  합계     {:>5}개", lists.total_terms());

            if let Some(term) = check {
                let categories = lists.categories_with_term(&term);
                if categories.is_empty() {
                    println!("\n'{}' 은(는) 어느 목록에도 없습니다", term);
                } else {
                    let labels: Vec<&str> = categories.iter().map(Category::label).collect();
                    println!("\n'{}' 포함 목록: {}", term, labels.join(", "));
                }
            }

            if let Some(dir) = export {
                let written = lists.write_dir(&dir)?;
                println!("\n✔ {}개 파일을 내보냈습니다: {}", written.len(), dir.display());
            }
        }

        Commands::Config { set_api_key, set_word_lists, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API 키를 설정했습니다");
            }

            if let Some(dir) = set_word_lists {
                config.set_word_list_dir(dir)?;
                println!("✔ 단어 목록 디렉토리를 설정했습니다");
            }

            if show {
                println!("설정:");
                println!("  엔드포인트: {}", config.endpoint);
                println!("  최대 이미지 크기: {}px", config.max_dimension);
                println!("  JPEG 품질: {}", config.jpeg_quality);
                println!("  최대 결과 수: {}", config.max_results);
                println!("  타임아웃: {}초", config.timeout_seconds);
                println!(
                    "  단어 목록: {}",
                    config
                        .word_list_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "내장".into())
                );
                println!("  API 키: {}", if config.get_api_key().is_ok() { "설정됨" } else { "미설정" });
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| std::path::PathBuf::from("."));
            let cache_path = cache::CacheFile::cache_path(&target);

            if info || !clear {
                if cache_path.exists() {
                    let ocr_cache = cache::CacheFile::load(&target);
                    println!("캐시 정보:");
                    println!("  경로: {}", cache_path.display());
                    println!("  항목 수: {}", ocr_cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  크기: {} bytes", meta.len());
                    }
                } else {
                    println!("캐시 파일이 없습니다: {}", cache_path.display());
                }
            }

            if clear {
                match cache::CacheFile::clear(&target) {
                    Ok(true) => println!("✔ 캐시를 삭제했습니다: {}", cache_path.display()),
                    Ok(false) => println!("캐시 파일이 없습니다"),
                    Err(e) => println!("캐시 삭제 오류: {}", e),
                }
            }
        }
    }

    Ok(())
}
