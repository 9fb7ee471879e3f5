//! 분류 속성 테스트
//!
//! 임의의 텍스트에 대해 우선순위와 결정성을 검증

use ingredient_scan_common::{Category, Classifier, WordList, WordLists};
use proptest::prelude::*;

/// 어느 목록과도 겹치지 않는 문자만으로 만든 텍스트
fn filler() -> impl Strategy<Value = String> {
    "[a-z0-9 ,:()\n]{0,40}"
}

fn classifier() -> Classifier {
    Classifier::new(WordLists::from_lists(vec![
        WordList::new(Category::Meat, vec!["소고기", "돼지고기"]),
        WordList::new(Category::Poultry, vec!["닭", "오리"]),
        WordList::new(Category::Fish, vec!["멸치", "새우"]),
        WordList::new(Category::Egg, vec!["달걀", "계란"]),
        WordList::new(Category::Dairy, vec!["우유", "연유"]),
    ]))
}

fn term_of(category: Category) -> impl Strategy<Value = String> {
    let terms: Vec<String> = classifier()
        .word_lists()
        .get(category)
        .map(|l| l.terms().to_vec())
        .unwrap_or_default();
    proptest::sample::select(terms)
}

proptest! {
    #[test]
    fn meat_term_always_wins(
        prefix in filler(),
        suffix in filler(),
        meat in term_of(Category::Meat),
        others in proptest::collection::vec(
            prop_oneof![
                term_of(Category::Poultry),
                term_of(Category::Fish),
                term_of(Category::Egg),
                term_of(Category::Dairy),
            ],
            0..4,
        ),
    ) {
        let text = format!("{}{}{}{}", prefix, others.join(","), meat, suffix);
        prop_assert_eq!(classifier().classify(&text), Category::Meat);
    }

    #[test]
    fn fish_without_meat_or_poultry(
        prefix in filler(),
        fish in term_of(Category::Fish),
        lower in proptest::collection::vec(
            prop_oneof![term_of(Category::Egg), term_of(Category::Dairy)],
            0..3,
        ),
    ) {
        let text = format!("{}{}\n{}", prefix, lower.join(" "), fish);
        prop_assert_eq!(classifier().classify(&text), Category::Fish);
    }

    #[test]
    fn dairy_only(prefix in filler(), dairy in term_of(Category::Dairy), suffix in filler()) {
        let text = format!("{}{}{}", prefix, dairy, suffix);
        prop_assert_eq!(classifier().classify(&text), Category::Dairy);
    }

    #[test]
    fn no_terms_is_lowest(text in filler()) {
        prop_assert_eq!(classifier().classify(&text), Category::NoneDetected);
    }

    #[test]
    fn deterministic(text in "\\PC{0,60}") {
        let c = classifier();
        prop_assert_eq!(c.classify_detailed(&text), c.classify_detailed(&text));

        let builtin = Classifier::builtin();
        prop_assert_eq!(builtin.classify(&text), builtin.classify(&text));
    }
}
