use jiff::civil::date;
use uuid::Uuid;

use forecourt_core::error::CoreError;
use forecourt_core::models::AssessmentContext;

#[test]
fn from_raw_parses_valid_identifiers() {
    let org = Uuid::new_v4();
    let assessment = Uuid::new_v4();

    let ctx = AssessmentContext::from_raw(
        &org.to_string(),
        &assessment.to_string(),
        date(2026, 3, 1),
    )
    .unwrap();

    assert_eq!(ctx.organization_id, org);
    assert_eq!(ctx.assessment_id, assessment);
    assert_eq!(ctx.completed_on, date(2026, 3, 1));
}

#[test]
fn from_raw_tolerates_surrounding_whitespace() {
    let org = Uuid::new_v4();
    let assessment = Uuid::new_v4();

    let ctx = AssessmentContext::from_raw(
        &format!("  {org} "),
        &assessment.to_string(),
        date(2026, 3, 1),
    )
    .unwrap();
    assert_eq!(ctx.organization_id, org);
}

#[test]
fn from_raw_rejects_malformed_uuids() {
    let result = AssessmentContext::from_raw("dealer-42", &Uuid::new_v4().to_string(), date(2026, 3, 1));
    assert!(matches!(result, Err(CoreError::InvalidUuid(_))));
}

#[test]
fn from_raw_rejects_nil_identity() {
    let result = AssessmentContext::from_raw(
        &Uuid::nil().to_string(),
        &Uuid::new_v4().to_string(),
        date(2026, 3, 1),
    );
    assert!(matches!(
        result,
        Err(CoreError::MissingIdentity("organization_id"))
    ));
}

#[test]
fn resolve_rejects_absent_or_nil_identity() {
    let org = Some(Uuid::new_v4());
    assert!(AssessmentContext::resolve(org, None, date(2026, 3, 1)).is_none());
    assert!(AssessmentContext::resolve(org, Some(Uuid::nil()), date(2026, 3, 1)).is_none());
    assert!(AssessmentContext::resolve(org, Some(Uuid::new_v4()), date(2026, 3, 1)).is_some());
}
