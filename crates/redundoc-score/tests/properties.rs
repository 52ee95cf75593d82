use proptest::prelude::*;
use redundoc_score::{SimilarityThreshold, compare};

#[test]
fn test_display_snapshot() {
    insta::assert_snapshot!(compare("postnummer", "postnr").to_string(), @r#""postnummer"-"postnr": 6/10"#);
}

#[test]
fn test_similarity_serializes_operands_and_distance() {
    let json = serde_json::to_value(compare("name", "game")).unwrap();
    insta::assert_json_snapshot!(json, @r#"
    {
      "distance": 1,
      "left": "name",
      "right": "game"
    }
    "#);
}

#[test]
fn test_lenient_and_strict_bars() {
    let similarity = compare("name", "nome");
    assert!(SimilarityThreshold::LENIENT.is_too_similar(&similarity));
    assert!(!SimilarityThreshold::STRICT.is_too_similar(&similarity));
}

proptest! {
    #[test]
    fn test_ratio_is_symmetric(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        prop_assert_eq!(compare(&a, &b).ratio(), compare(&b, &a).ratio());
    }

    #[test]
    fn test_identity_scores_one(a in "\\PC{0,24}") {
        prop_assert_eq!(compare(&a, &a).ratio(), 1.0);
    }

    #[test]
    fn test_ratio_is_bounded(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        let ratio = compare(&a, &b).ratio();
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn test_distance_never_exceeds_longest(a in "[a-z ]{0,24}", b in "[a-z ]{0,24}") {
        let similarity = compare(&a, &b);
        prop_assert!(similarity.distance() <= similarity.longest());
    }
}
