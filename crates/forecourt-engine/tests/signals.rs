use std::collections::BTreeMap;

use forecourt_core::models::{Severity, SignalCode};
use forecourt_engine::aggregator::derive_signals;

fn scores(pairs: &[(&str, u8)]) -> BTreeMap<String, u8> {
    pairs
        .iter()
        .map(|(key, score)| (key.to_string(), *score))
        .collect()
}

#[test]
fn module_at_threshold_yields_no_signals() {
    let analysis = derive_signals(&scores(&[("parts-inventory", 70)]));
    assert!(analysis.signals.is_empty());
}

#[test]
fn module_below_threshold_yields_signals() {
    let analysis = derive_signals(&scores(&[("parts-inventory", 69)]));
    assert!(!analysis.signals.is_empty());
    assert!(analysis.signals.iter().all(|s| s.severity == Severity::Medium));
}

#[test]
fn severity_escalates_below_fifty() {
    let medium = derive_signals(&scores(&[("parts-inventory", 50)]));
    assert!(medium.signals.iter().all(|s| s.severity == Severity::Medium));

    let high = derive_signals(&scores(&[("parts-inventory", 49)]));
    assert!(high.signals.iter().all(|s| s.severity == Severity::High));
}

#[test]
fn undefined_modules_contribute_nothing() {
    let analysis = derive_signals(&BTreeMap::new());
    assert!(analysis.signals.is_empty());
    assert!(analysis.unmapped_questions.is_empty());
}

#[test]
fn weighted_rule_registers_the_secondary_signal() {
    // pts-1 maps StockAgeingRisk with a weighted DataQualityLow secondary.
    let analysis = derive_signals(&scores(&[("parts-inventory", 40)]));
    let data_quality = analysis
        .signals
        .iter()
        .find(|s| s.code == SignalCode::DataQualityLow)
        .expect("secondary signal missing");
    assert!(data_quality.triggering_question_ids.contains(&"pts-1".to_string()));
    // The primary also fires for the same question.
    let stock = analysis
        .signals
        .iter()
        .find(|s| s.code == SignalCode::StockAgeingRisk)
        .unwrap();
    assert!(stock.triggering_question_ids.contains(&"pts-1".to_string()));
}

#[test]
fn standard_rule_ignores_the_secondary_signal() {
    // nvs-4 declares a CustomerFollowupWeak secondary under the standard
    // rule; it must not nominate that signal.
    let analysis = derive_signals(&scores(&[("new-vehicle-sales", 40)]));
    let followup = analysis
        .signals
        .iter()
        .find(|s| s.code == SignalCode::CustomerFollowupWeak)
        .expect("nvs-10 primary should still fire");
    assert!(!followup.triggering_question_ids.contains(&"nvs-4".to_string()));
    assert!(followup.triggering_question_ids.contains(&"nvs-10".to_string()));
}

#[test]
fn triggering_ids_are_grouped_per_signal_and_module() {
    // pts-4 and pts-7 both nominate GovernanceWeak for parts-inventory.
    let analysis = derive_signals(&scores(&[("parts-inventory", 45)]));
    let governance = analysis
        .signals
        .iter()
        .find(|s| s.code == SignalCode::GovernanceWeak)
        .unwrap();
    assert_eq!(governance.module_key, "parts-inventory");
    assert!(governance.triggering_question_ids.contains(&"pts-4".to_string()));
    assert!(governance.triggering_question_ids.contains(&"pts-7".to_string()));
}

#[test]
fn signals_sort_by_severity_then_code() {
    // parts-inventory HIGH, customer-experience MEDIUM.
    let analysis = derive_signals(&scores(&[
        ("parts-inventory", 40),
        ("customer-experience", 60),
    ]));

    let first_medium = analysis
        .signals
        .iter()
        .position(|s| s.severity == Severity::Medium)
        .expect("medium signals expected");
    assert!(
        analysis.signals[..first_medium]
            .iter()
            .all(|s| s.severity == Severity::High),
        "all HIGH signals must precede MEDIUM ones"
    );

    for window in analysis.signals.windows(2) {
        if window[0].severity == window[1].severity {
            assert!(window[0].code.as_str() <= window[1].code.as_str());
        }
    }
}

#[test]
fn derivation_is_deterministic() {
    let input = scores(&[("parts-inventory", 40), ("used-vehicle-sales", 55)]);
    let a = derive_signals(&input);
    let b = derive_signals(&input);
    let a_json = serde_json::to_string(&a.signals).unwrap();
    let b_json = serde_json::to_string(&b.signals).unwrap();
    assert_eq!(a_json, b_json);
}

#[test]
fn rationale_names_the_module() {
    let analysis = derive_signals(&scores(&[("parts-inventory", 40)]));
    for signal in &analysis.signals {
        assert!(
            signal.rationale.contains("Parts & Inventory"),
            "rationale should name the module: {}",
            signal.rationale
        );
    }
}
