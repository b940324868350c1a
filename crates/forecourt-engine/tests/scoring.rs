use std::collections::BTreeMap;

use forecourt_core::AnswerSet;
use forecourt_engine::error::ScoringError;
use forecourt_engine::scoring::{
    compute_module_score, compute_module_scores, compute_overall_score, validate_weights,
};
use forecourt_questionnaire::{all_question_ids, get_module, module_weights};

fn answers(pairs: &[(&str, u8)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(id, rating)| (id.to_string(), *rating))
        .collect()
}

#[test]
fn unanswered_module_scores_none_not_zero() {
    let module = get_module("parts-inventory").unwrap();
    assert_eq!(compute_module_score(module.questions(), &answers(&[])), None);
}

#[test]
fn module_score_is_scaled_average() {
    let module = get_module("parts-inventory").unwrap();
    // Two answered out of eight: average 4.0 → 80. Unanswered questions do
    // not drag the average down.
    let score = compute_module_score(
        module.questions(),
        &answers(&[("pts-1", 3), ("pts-2", 5)]),
    );
    assert_eq!(score, Some(80));
}

#[test]
fn module_score_rounds_half_up() {
    let module = get_module("used-vehicle-sales").unwrap();
    // Eight ratings summing to 29: average 3.625 → 72.5 → 73.
    let score = compute_module_score(
        module.questions(),
        &answers(&[
            ("uvs-1", 4),
            ("uvs-2", 4),
            ("uvs-3", 4),
            ("uvs-4", 4),
            ("uvs-5", 4),
            ("uvs-6", 3),
            ("uvs-7", 3),
            ("uvs-8", 3),
        ]),
    );
    assert_eq!(score, Some(73));
}

#[test]
fn out_of_scale_rating_is_treated_as_unanswered() {
    let module = get_module("parts-inventory").unwrap();
    let score = compute_module_score(
        module.questions(),
        &answers(&[("pts-1", 9), ("pts-2", 4)]),
    );
    assert_eq!(score, Some(80));
}

#[test]
fn one_unanswered_question_is_excluded_from_the_average() {
    // nvs-1 unanswered, the other nine new-vehicle-sales questions at 5:
    // the module scores 100 over the nine answered questions.
    let module = get_module("new-vehicle-sales").unwrap();
    let pairs: Vec<(String, u8)> = module
        .questions()
        .iter()
        .filter(|q| q.id != "nvs-1")
        .map(|q| (q.id.clone(), 5))
        .collect();
    let answer_set: AnswerSet = pairs.into_iter().collect();

    assert_eq!(compute_module_score(module.questions(), &answer_set), Some(100));
}

#[test]
fn overall_score_is_order_independent() {
    let weights = module_weights();

    let forward: BTreeMap<String, u8> = [
        ("new-vehicle-sales".to_string(), 80),
        ("used-vehicle-sales".to_string(), 60),
        ("aftersales-service".to_string(), 90),
    ]
    .into();
    let reversed: BTreeMap<String, u8> = [
        ("aftersales-service".to_string(), 90),
        ("used-vehicle-sales".to_string(), 60),
        ("new-vehicle-sales".to_string(), 80),
    ]
    .into();

    let a = compute_overall_score(&forward, &weights);
    let b = compute_overall_score(&reversed, &weights);
    assert_eq!(a.value.to_bits(), b.value.to_bits());
}

#[test]
fn undefined_modules_are_excluded_without_renormalizing() {
    let weights = module_weights();
    let scores: BTreeMap<String, u8> = [("parts-inventory".to_string(), 40)].into();

    let overall = compute_overall_score(&scores, &weights);
    assert!(!overall.data_incomplete);
    assert!((overall.value - 40.0 * 0.15).abs() <= 1e-9);
}

#[test]
fn all_modules_undefined_reports_data_incomplete() {
    let weights = module_weights();
    let overall = compute_overall_score(&BTreeMap::new(), &weights);
    assert_eq!(overall.value, 0.0);
    assert!(overall.data_incomplete);
}

#[test]
fn fully_answered_at_five_scores_one_hundred_overall() {
    let answer_set: AnswerSet = all_question_ids().into_iter().map(|id| (id, 5)).collect();
    let scores = compute_module_scores(&answer_set);
    assert_eq!(scores.len(), 5);
    assert!(scores.values().all(|&s| s == 100));

    let overall = compute_overall_score(&scores, &module_weights());
    assert!((overall.value - 100.0).abs() <= 1e-9);
    assert!(!overall.data_incomplete);
}

#[test]
fn live_weight_table_passes_validation() {
    assert!(validate_weights(&module_weights()).is_ok());
}

#[test]
fn weight_validation_rejects_bad_sums() {
    let weights: BTreeMap<String, f64> = [
        ("a".to_string(), 0.5),
        ("b".to_string(), 0.4),
    ]
    .into();
    assert!(matches!(
        validate_weights(&weights),
        Err(ScoringError::WeightSum { .. })
    ));
}

#[test]
fn weight_validation_rejects_out_of_range_values() {
    let weights: BTreeMap<String, f64> = [
        ("a".to_string(), 0.0),
        ("b".to_string(), 1.0),
    ]
    .into();
    assert!(matches!(
        validate_weights(&weights),
        Err(ScoringError::WeightOutOfRange { .. })
    ));
}
