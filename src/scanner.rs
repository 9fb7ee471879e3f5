use crate::error::{Result, ScanError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "gif"];

fn is_image_extension(ext: &str) -> bool {
    let lower = ext.to_lowercase();
    IMAGE_EXTENSIONS.contains(&lower.as_str())
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| is_image_extension(&ext.to_string_lossy()))
        .unwrap_or(false)
}

fn image_info(path: &Path) -> ImageInfo {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    ImageInfo {
        path: path.to_path_buf(),
        file_name,
    }
}

/// 파일 또는 폴더에서 이미지 목록을 만든다
///
/// 파일이면 그 파일 하나, 폴더면 직하의 이미지(`recursive`이면 하위 폴더 포함)를
/// 파일 이름순으로 반환한다.
pub fn scan_path(path: &Path, recursive: bool) -> Result<Vec<ImageInfo>> {
    if !path.exists() {
        return Err(ScanError::FolderNotFound(path.display().to_string()));
    }

    if path.is_file() {
        if !is_image_file(path) {
            return Err(ScanError::ImageLoad(format!(
                "지원하지 않는 이미지 형식입니다: {}",
                path.display()
            )));
        }
        return Ok(vec![image_info(path)]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut images: Vec<ImageInfo> = WalkDir::new(path)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_image_file(e.path()))
        .map(|e| image_info(e.path()))
        .collect();

    // 파일 이름순 정렬
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name).then_with(|| a.path.cmp(&b.path)));

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("png"));
        assert!(is_image_extension("WebP"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("pdf"));
    }

    #[test]
    fn test_scan_path_not_found() {
        let result = scan_path(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(ScanError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("label.JPG");
        File::create(&file).unwrap();

        let result = scan_path(&file, false).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].file_name, "label.JPG");
    }

    #[test]
    fn test_scan_single_non_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        File::create(&file).unwrap();

        assert!(matches!(scan_path(&file, false), Err(ScanError::ImageLoad(_))));
    }

    #[test]
    fn test_scan_folder_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("c.jpg")).unwrap();
        File::create(dir.path().join("a.png")).unwrap();
        File::create(dir.path().join("b.JPEG")).unwrap();
        File::create(dir.path().join("readme.txt")).unwrap();

        let result = scan_path(dir.path(), false).unwrap();
        let names: Vec<&str> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.JPEG", "c.jpg"]);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        File::create(dir.path().join("top.jpg")).unwrap();
        File::create(sub.join("nested.jpg")).unwrap();

        assert_eq!(scan_path(dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_path(dir.path(), true).unwrap().len(), 2);
    }
}
