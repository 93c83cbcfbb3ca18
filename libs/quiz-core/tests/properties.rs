//! Property and end-to-end tests for normalization, similarity, dedup and
//! the paste parser.

use proptest::prelude::*;
use quiz_core::{
    dedupe, jaccard, normalize, parse_with_id_base, tokenize, QuestionKind, QuestionRecord,
    TokenSet,
};

const VIETNAMESE_TEXT: &str = r#"[a-zA-Z0-9àáâãèéêìíòóôõùúýăđĩũơưạảấầẩẫậắằẳẵặẹẻẽếềểễệỉịọỏốồổỗộớờởỡợụủứừửữựỳỵỷỹĐ .,?!:;'"()/\\\t-]{0,40}"#;

fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("(alpha|beta|gamma|delta|epsilon|zeta|eta|theta)", 1..6)
}

fn token_set() -> impl Strategy<Value = TokenSet> {
    prop::collection::hash_set("[a-z]{2,6}", 0..8)
}

fn question_list() -> impl Strategy<Value = Vec<QuestionRecord>> {
    prop::collection::vec(words(), 0..12).prop_map(|prompts| {
        prompts
            .into_iter()
            .enumerate()
            .map(|(i, w)| QuestionRecord::short_answer(i as i64 + 1, w.join(" "), ""))
            .collect()
    })
}

fn ids(records: &[QuestionRecord]) -> Vec<i64> {
    records.iter().map(|q| q.id).collect()
}

proptest! {
    #[test]
    fn test_normalize_is_idempotent(s in VIETNAMESE_TEXT) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_never_has_edge_or_double_spaces(s in VIETNAMESE_TEXT) {
        let n = normalize(&s);
        prop_assert!(!n.starts_with(' ') && !n.ends_with(' '));
        prop_assert!(!n.contains("  "));
    }

    #[test]
    fn test_tokens_longer_than_one_char(s in VIETNAMESE_TEXT) {
        prop_assert!(tokenize(&s).iter().all(|t| t.chars().count() > 1));
    }

    #[test]
    fn test_jaccard_bounded(a in token_set(), b in token_set()) {
        let sim = jaccard(&a, &b);
        prop_assert!((0.0..=1.0).contains(&sim), "similarity out of range: {}", sim);
    }

    #[test]
    fn test_jaccard_self_is_one(a in prop::collection::hash_set("[a-z]{2,6}", 1..8)) {
        prop_assert_eq!(jaccard(&a, &a), 1.0);
    }

    #[test]
    fn test_dedupe_output_is_ordered_subsequence(records in question_list(), t in 0.0f64..=1.0) {
        let outcome = dedupe(records.clone(), t);
        let input_ids = ids(&records);
        let mut cursor = input_ids.iter();
        for id in ids(&outcome.kept) {
            prop_assert!(cursor.any(|x| *x == id), "id {} out of order", id);
        }
        prop_assert_eq!(outcome.removed, records.len() - outcome.kept.len());
    }

    #[test]
    fn test_dedupe_is_deterministic(records in question_list(), t in 0.0f64..=1.0) {
        let first = dedupe(records.clone(), t);
        let second = dedupe(records, t);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_dedupe_pair_is_monotonic(a in words(), b in words(), lo in 0.0f64..=1.0, hi in 0.0f64..=1.0) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let records = vec![
            QuestionRecord::short_answer(1, a.join(" "), ""),
            QuestionRecord::short_answer(2, b.join(" "), ""),
        ];
        let removed_lo = dedupe(records.clone(), lo).removed;
        let removed_hi = dedupe(records, hi).removed;
        prop_assert!(removed_hi <= removed_lo);
    }

    #[test]
    fn test_dedupe_output_has_no_near_duplicates(records in question_list(), t in 0.0f64..=1.0) {
        let kept = dedupe(records, t).kept;
        // A second pass over an already-filtered list removes nothing.
        prop_assert_eq!(dedupe(kept.clone(), t).kept, kept);
    }
}

#[test]
fn test_threshold_sweep_on_realistic_corpus() {
    let prompts = [
        "What is the capital of France?",
        "what is the capital of france??",
        "Capital of France",
        "What is the capital of Germany?",
        "Which river flows through Paris?",
        "Which river runs through Paris, France?",
        "Who wrote the novel Les Misérables?",
        "Who wrote Les Miserables",
        "Name the largest ocean on Earth.",
    ];
    let records: Vec<QuestionRecord> = prompts
        .iter()
        .enumerate()
        .map(|(i, p)| QuestionRecord::short_answer(i as i64 + 1, *p, ""))
        .collect();

    let removed: Vec<usize> = [0.3, 0.5, 0.65, 0.8, 1.0]
        .iter()
        .map(|t| dedupe(records.clone(), *t).removed)
        .collect();
    assert!(
        removed.windows(2).all(|w| w[1] <= w[0]),
        "removed counts not monotonic: {:?}",
        removed
    );

    // Containment alone catches the case variant and the fragment.
    assert!(removed[4] >= 2);
}

#[test]
fn test_paste_then_dedupe() {
    let pasted = "Thủ đô của Việt Nam là gì?\n\
                  A. Hồ Chí Minh\n\
                  *B. Hà Nội\n\
                  C. Đà Nẵng\n\
                  thu do cua viet nam la gi\n\
                  A. Ho Chi Minh\n\
                  B. Ha Noi\n\
                  C. Da Nang\n\
                  Đáp án: B\n\
                  Giải thích ownership trong Rust\n\
                  Đáp án ngắn: mỗi giá trị có một chủ sở hữu";
    let parsed = parse_with_id_base(pasted, 1);
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed[0].kind, QuestionKind::MultipleChoice);
    assert_eq!(parsed[1].correct_choice_index, Some(1));
    assert_eq!(parsed[2].kind, QuestionKind::ShortAnswer);

    let outcome = dedupe(parsed, 0.65);
    assert_eq!(ids(&outcome.kept), vec![1, 3]);
    assert_eq!(outcome.removed, 1);
}
