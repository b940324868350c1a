//! Static question→signal mapping.
//!
//! One row per live question assigns a primary (and optionally secondary)
//! signal code plus the rule deciding whether the secondary counts. The
//! category→signal table is the fallback for questions without a row.
//! Gaps in either table degrade to `SignalCode::None` at runtime; coverage
//! is enforced by tests, not by aborting an analysis.

use serde::Serialize;
use ts_rs::TS;

use forecourt_core::models::SignalCode;

/// Whether a mapping row's secondary signal participates in aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityRule {
    /// Only the primary signal is registered; the secondary is ignored.
    Standard,
    /// The secondary signal is registered as a second, independent candidate.
    Weighted,
}

/// One row of the question→signal table.
#[derive(Debug, Clone, Copy)]
pub struct SignalMapping {
    pub question_id: &'static str,
    pub module_key: &'static str,
    pub primary: SignalCode,
    pub secondary: Option<SignalCode>,
    pub severity_rule: SeverityRule,
}

/// Case-insensitive category→signal fallback table.
const CATEGORY_SIGNALS: &[(&str, SignalCode)] = &[
    ("lead-management", SignalCode::LeadHandlingGap),
    ("process", SignalCode::ProcessNotStandardised),
    ("pricing", SignalCode::PricingDisciplineWeak),
    ("stock-control", SignalCode::StockAgeingRisk),
    ("data-quality", SignalCode::DataQualityLow),
    ("follow-up", SignalCode::CustomerFollowupWeak),
    ("training", SignalCode::StaffCapabilityGap),
    ("digital", SignalCode::DigitalAdoptionLow),
    ("governance", SignalCode::GovernanceWeak),
    ("capacity", SignalCode::CapacityPlanningWeak),
    ("retention", SignalCode::RetentionRisk),
];

/// Resolve a question category to its signal code, case-insensitively.
/// Unknown categories resolve to `None` — an explicit fallback, never an
/// error.
pub fn resolve_category_signal(category: &str) -> SignalCode {
    let needle = category.trim().to_ascii_lowercase();
    CATEGORY_SIGNALS
        .iter()
        .find(|(key, _)| *key == needle)
        .map(|(_, code)| *code)
        .unwrap_or(SignalCode::None)
}

const MAPPINGS: &[SignalMapping] = &[
    // new-vehicle-sales
    SignalMapping {
        question_id: "nvs-1",
        module_key: "new-vehicle-sales",
        primary: SignalCode::LeadHandlingGap,
        secondary: Some(SignalCode::DataQualityLow),
        severity_rule: SeverityRule::Weighted,
    },
    SignalMapping {
        question_id: "nvs-2",
        module_key: "new-vehicle-sales",
        primary: SignalCode::LeadHandlingGap,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "nvs-3",
        module_key: "new-vehicle-sales",
        primary: SignalCode::ProcessNotStandardised,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "nvs-4",
        module_key: "new-vehicle-sales",
        primary: SignalCode::ProcessNotStandardised,
        secondary: Some(SignalCode::CustomerFollowupWeak),
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "nvs-5",
        module_key: "new-vehicle-sales",
        primary: SignalCode::PricingDisciplineWeak,
        secondary: Some(SignalCode::GovernanceWeak),
        severity_rule: SeverityRule::Weighted,
    },
    SignalMapping {
        question_id: "nvs-6",
        module_key: "new-vehicle-sales",
        primary: SignalCode::PricingDisciplineWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "nvs-7",
        module_key: "new-vehicle-sales",
        primary: SignalCode::DigitalAdoptionLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "nvs-8",
        module_key: "new-vehicle-sales",
        primary: SignalCode::StaffCapabilityGap,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "nvs-9",
        module_key: "new-vehicle-sales",
        primary: SignalCode::GovernanceWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "nvs-10",
        module_key: "new-vehicle-sales",
        primary: SignalCode::CustomerFollowupWeak,
        secondary: Some(SignalCode::RetentionRisk),
        severity_rule: SeverityRule::Weighted,
    },
    // used-vehicle-sales
    SignalMapping {
        question_id: "uvs-1",
        module_key: "used-vehicle-sales",
        primary: SignalCode::StockAgeingRisk,
        secondary: Some(SignalCode::GovernanceWeak),
        severity_rule: SeverityRule::Weighted,
    },
    SignalMapping {
        question_id: "uvs-2",
        module_key: "used-vehicle-sales",
        primary: SignalCode::StockAgeingRisk,
        secondary: Some(SignalCode::ProcessNotStandardised),
        severity_rule: SeverityRule::Weighted,
    },
    SignalMapping {
        question_id: "uvs-3",
        module_key: "used-vehicle-sales",
        primary: SignalCode::PricingDisciplineWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "uvs-4",
        module_key: "used-vehicle-sales",
        primary: SignalCode::ProcessNotStandardised,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "uvs-5",
        module_key: "used-vehicle-sales",
        primary: SignalCode::DigitalAdoptionLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "uvs-6",
        module_key: "used-vehicle-sales",
        primary: SignalCode::DataQualityLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "uvs-7",
        module_key: "used-vehicle-sales",
        primary: SignalCode::GovernanceWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "uvs-8",
        module_key: "used-vehicle-sales",
        primary: SignalCode::CustomerFollowupWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    // aftersales-service
    SignalMapping {
        question_id: "svc-1",
        module_key: "aftersales-service",
        primary: SignalCode::CapacityPlanningWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "svc-2",
        module_key: "aftersales-service",
        primary: SignalCode::CapacityPlanningWeak,
        secondary: Some(SignalCode::GovernanceWeak),
        severity_rule: SeverityRule::Weighted,
    },
    SignalMapping {
        question_id: "svc-3",
        module_key: "aftersales-service",
        primary: SignalCode::ProcessNotStandardised,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "svc-4",
        module_key: "aftersales-service",
        primary: SignalCode::ProcessNotStandardised,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "svc-5",
        module_key: "aftersales-service",
        primary: SignalCode::CustomerFollowupWeak,
        secondary: Some(SignalCode::RetentionRisk),
        severity_rule: SeverityRule::Weighted,
    },
    SignalMapping {
        question_id: "svc-6",
        module_key: "aftersales-service",
        primary: SignalCode::StaffCapabilityGap,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "svc-7",
        module_key: "aftersales-service",
        primary: SignalCode::DataQualityLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "svc-8",
        module_key: "aftersales-service",
        primary: SignalCode::GovernanceWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "svc-9",
        module_key: "aftersales-service",
        primary: SignalCode::DigitalAdoptionLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    // parts-inventory
    SignalMapping {
        question_id: "pts-1",
        module_key: "parts-inventory",
        primary: SignalCode::StockAgeingRisk,
        secondary: Some(SignalCode::DataQualityLow),
        severity_rule: SeverityRule::Weighted,
    },
    SignalMapping {
        question_id: "pts-2",
        module_key: "parts-inventory",
        primary: SignalCode::StockAgeingRisk,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "pts-3",
        module_key: "parts-inventory",
        primary: SignalCode::ProcessNotStandardised,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "pts-4",
        module_key: "parts-inventory",
        primary: SignalCode::GovernanceWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "pts-5",
        module_key: "parts-inventory",
        primary: SignalCode::DataQualityLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "pts-6",
        module_key: "parts-inventory",
        primary: SignalCode::ProcessNotStandardised,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "pts-7",
        module_key: "parts-inventory",
        primary: SignalCode::GovernanceWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "pts-8",
        module_key: "parts-inventory",
        primary: SignalCode::CapacityPlanningWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    // customer-experience
    SignalMapping {
        question_id: "cx-1",
        module_key: "customer-experience",
        primary: SignalCode::CustomerFollowupWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-2",
        module_key: "customer-experience",
        primary: SignalCode::RetentionRisk,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-3",
        module_key: "customer-experience",
        primary: SignalCode::RetentionRisk,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-4",
        module_key: "customer-experience",
        primary: SignalCode::DataQualityLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-5",
        module_key: "customer-experience",
        primary: SignalCode::ProcessNotStandardised,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-6",
        module_key: "customer-experience",
        primary: SignalCode::GovernanceWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-7",
        module_key: "customer-experience",
        primary: SignalCode::DigitalAdoptionLow,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-8",
        module_key: "customer-experience",
        primary: SignalCode::StaffCapabilityGap,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
    SignalMapping {
        question_id: "cx-9",
        module_key: "customer-experience",
        primary: SignalCode::CustomerFollowupWeak,
        secondary: None,
        severity_rule: SeverityRule::Standard,
    },
];

/// Look up the mapping row for a question id.
pub fn get_signal_mapping(question_id: &str) -> Option<&'static SignalMapping> {
    MAPPINGS.iter().find(|m| m.question_id == question_id)
}

/// Result of the mapping completeness check.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CoverageReport {
    pub covered: Vec<String>,
    pub missing: Vec<String>,
    pub coverage_percent: f64,
}

/// Authoring check: every live question id must have a mapping row. Gaps
/// are a data defect caught by tests; at runtime they degrade silently.
pub fn validate_mapping_coverage(all_question_ids: &[String]) -> CoverageReport {
    let mut covered = Vec::new();
    let mut missing = Vec::new();
    for id in all_question_ids {
        if get_signal_mapping(id).is_some() {
            covered.push(id.clone());
        } else {
            missing.push(id.clone());
        }
    }
    let total = all_question_ids.len();
    let coverage_percent = if total == 0 {
        100.0
    } else {
        covered.len() as f64 / total as f64 * 100.0
    };
    CoverageReport {
        covered,
        missing,
        coverage_percent,
    }
}
