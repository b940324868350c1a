use jiff::civil::date;
use uuid::Uuid;

use forecourt_core::models::{ActionStatus, OwnerRole, Priority, Severity, SignalCode};
use forecourt_engine::aggregator::Signal;
use forecourt_engine::error::EngineError;
use forecourt_engine::generator::generate_actions;
use forecourt_engine::playbook::SignalToActionEntry;

fn signal(code: SignalCode, module_key: &str, severity: Severity, question_ids: &[&str]) -> Signal {
    Signal {
        code,
        severity,
        module_key: module_key.to_string(),
        triggering_question_ids: question_ids.iter().map(|s| s.to_string()).collect(),
        rationale: format!("{}. Flagged in {module_key}.", code.description()),
    }
}

fn ids() -> (Option<Uuid>, Option<Uuid>) {
    (Some(Uuid::new_v4()), Some(Uuid::new_v4()))
}

#[test]
fn missing_organization_fails_closed() {
    let (_, assessment) = ids();
    let result = generate_actions(None, assessment, date(2026, 3, 1), &[], &[]);
    assert!(matches!(result, Err(EngineError::MissingContext)));
}

#[test]
fn nil_assessment_id_fails_closed() {
    let (org, _) = ids();
    let result = generate_actions(org, Some(Uuid::nil()), date(2026, 3, 1), &[], &[]);
    assert!(matches!(result, Err(EngineError::MissingContext)));
}

#[test]
fn no_signals_generates_no_actions() {
    let (org, assessment) = ids();
    let outcome = generate_actions(org, assessment, date(2026, 3, 1), &[], &[]).unwrap();
    assert!(outcome.actions.is_empty());
    assert!(outcome.skipped_signals.is_empty());
}

#[test]
fn action_fields_come_from_the_template() {
    let (org, assessment) = ids();
    let signals = [signal(
        SignalCode::GovernanceWeak,
        "parts-inventory",
        Severity::High,
        &["pts-4", "pts-7"],
    )];

    let outcome = generate_actions(org, assessment, date(2026, 3, 1), &signals, &[]).unwrap();
    assert_eq!(outcome.actions.len(), 2);

    let first = &outcome.actions[0];
    assert_eq!(first.template_id, "act-gov-01");
    assert_eq!(first.signal_code, SignalCode::GovernanceWeak);
    assert_eq!(first.title, "Stand up a weekly KPI cockpit");
    assert!(first.description.starts_with("Triggered because: GOVERNANCE_WEAK."));
    assert_eq!(first.owner_role, OwnerRole::GeneralManager);
    assert_eq!(first.priority, Priority::High);
    assert_eq!(first.status, ActionStatus::Open);
    // 30-day default timeframe from the completion date.
    assert_eq!(first.due_date, date(2026, 3, 31));
}

#[test]
fn per_signal_cap_holds_even_with_many_triggering_questions() {
    let (org, assessment) = ids();
    let signals = [signal(
        SignalCode::GovernanceWeak,
        "parts-inventory",
        Severity::High,
        &["pts-4", "pts-7", "nvs-9", "uvs-7", "svc-8"],
    )];

    let outcome = generate_actions(org, assessment, date(2026, 3, 1), &signals, &[]).unwrap();
    let governance_count = outcome
        .actions
        .iter()
        .filter(|a| a.signal_code == SignalCode::GovernanceWeak)
        .count();
    assert!(governance_count <= 2);
}

#[test]
fn cap_window_truncates_entries_with_more_templates_than_cap() {
    let entry = SignalToActionEntry {
        signal_code: SignalCode::GovernanceWeak,
        template_ids: &["act-gov-01", "act-gov-02", "act-prc-01", "act-prc-02", "act-dat-01"],
        max_actions_per_assessment: 2,
    };
    assert_eq!(entry.capped_template_ids(), ["act-gov-01", "act-gov-02"]);
}

#[test]
fn cap_window_never_exceeds_the_declared_templates() {
    let entry = SignalToActionEntry {
        signal_code: SignalCode::RetentionRisk,
        template_ids: &["act-ret-01"],
        max_actions_per_assessment: 3,
    };
    assert_eq!(entry.capped_template_ids(), ["act-ret-01"]);
}

#[test]
fn rerun_is_a_no_op_against_existing_actions() {
    let (org, assessment) = ids();
    let signals = [
        signal(SignalCode::GovernanceWeak, "parts-inventory", Severity::High, &["pts-4"]),
        signal(SignalCode::StockAgeingRisk, "used-vehicle-sales", Severity::Medium, &["uvs-1"]),
    ];

    let first = generate_actions(org, assessment, date(2026, 3, 1), &signals, &[]).unwrap();
    assert!(!first.actions.is_empty());

    let second =
        generate_actions(org, assessment, date(2026, 3, 1), &signals, &first.actions).unwrap();
    assert!(second.actions.is_empty(), "re-run must only insert what is missing");
}

#[test]
fn rerun_fills_in_only_the_missing_templates() {
    let (org, assessment) = ids();
    let signals = [signal(
        SignalCode::GovernanceWeak,
        "parts-inventory",
        Severity::High,
        &["pts-4"],
    )];

    let first = generate_actions(org, assessment, date(2026, 3, 1), &signals, &[]).unwrap();
    // Only the first of the two governance actions survives downstream.
    // The re-run must insert the absent template without recreating the
    // existing one.
    let partial = vec![first.actions[0].clone()];

    let second = generate_actions(org, assessment, date(2026, 3, 1), &signals, &partial).unwrap();
    assert_eq!(second.actions.len(), 1);
    assert_eq!(second.actions[0].template_id, first.actions[1].template_id);
}

#[test]
fn existing_actions_for_other_assessments_are_ignored() {
    let (org, assessment) = ids();
    let signals = [signal(
        SignalCode::GovernanceWeak,
        "parts-inventory",
        Severity::High,
        &["pts-4"],
    )];

    let other = generate_actions(org, Some(Uuid::new_v4()), date(2026, 2, 1), &signals, &[])
        .unwrap()
        .actions;

    let outcome = generate_actions(org, assessment, date(2026, 3, 1), &signals, &other).unwrap();
    assert_eq!(outcome.actions.len(), 2);
}

#[test]
fn dedup_is_global_across_signals() {
    // The same code firing in two modules resolves to the same templates;
    // only the first encountered instantiates them.
    let (org, assessment) = ids();
    let signals = [
        signal(SignalCode::GovernanceWeak, "parts-inventory", Severity::High, &["pts-4"]),
        signal(SignalCode::GovernanceWeak, "used-vehicle-sales", Severity::Medium, &["uvs-7"]),
    ];

    let outcome = generate_actions(org, assessment, date(2026, 3, 1), &signals, &[]).unwrap();
    assert_eq!(outcome.actions.len(), 2);
    let ids: Vec<&str> = outcome.actions.iter().map(|a| a.template_id.as_str()).collect();
    assert_eq!(ids, vec!["act-gov-01", "act-gov-02"]);
}

#[test]
fn signal_without_playbook_entry_is_skipped_not_an_error() {
    let (org, assessment) = ids();
    let signals = [signal(SignalCode::None, "parts-inventory", Severity::Medium, &["pts-1"])];

    let outcome = generate_actions(org, assessment, date(2026, 3, 1), &signals, &[]).unwrap();
    assert!(outcome.actions.is_empty());
    assert_eq!(outcome.skipped_signals, vec![SignalCode::None]);
}

#[test]
fn tenant_identity_is_stamped_on_every_action() {
    let (org, assessment) = ids();
    let signals = [signal(
        SignalCode::RetentionRisk,
        "customer-experience",
        Severity::Medium,
        &["cx-2"],
    )];

    let outcome = generate_actions(org, assessment, date(2026, 3, 1), &signals, &[]).unwrap();
    for action in &outcome.actions {
        assert_eq!(Some(action.organization_id), org);
        assert_eq!(Some(action.assessment_id), assessment);
    }
}
