//! 결과 메시지 생성

use crate::category::Category;

/// OCR 요청이 실패했을 때 분류 대신 표시하는 고정 메시지
pub const OCR_FAILURE_MESSAGE: &str = "Cloud Vision API request failed. Check logs for details.";

/// 처리 중 표시 메시지
pub const LOADING_MESSAGE: &str = "이미지를 분석하는 중입니다...";

/// 분류 결과를 `"[<라벨>] 용 음식입니다"` 형식으로 변환
pub fn format_result(category: Category) -> String {
    format!("[{}] 용 음식입니다", category.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(Category::Meat), "[논비건] 용 음식입니다");
        assert_eq!(format_result(Category::Poultry), "[세미] 용 음식입니다");
        assert_eq!(format_result(Category::Fish), "[페스코] 용 음식입니다");
        assert_eq!(format_result(Category::Egg), "[락토오보] 용 음식입니다");
        assert_eq!(format_result(Category::Dairy), "[락토] 용 음식입니다");
        assert_eq!(format_result(Category::NoneDetected), "[비건] 용 음식입니다");
    }
}
