use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coded diagnostic finding: a named operational weakness detected in one
/// survey module. The set is closed; new codes are a data-authoring change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum SignalCode {
    /// Explicit "no signal" fallback for unmapped questions. Never an error.
    None,
    GovernanceWeak,
    ProcessNotStandardised,
    LeadHandlingGap,
    PricingDisciplineWeak,
    StockAgeingRisk,
    DataQualityLow,
    CustomerFollowupWeak,
    StaffCapabilityGap,
    DigitalAdoptionLow,
    CapacityPlanningWeak,
    RetentionRisk,
}

impl SignalCode {
    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalCode::None => "NONE",
            SignalCode::GovernanceWeak => "GOVERNANCE_WEAK",
            SignalCode::ProcessNotStandardised => "PROCESS_NOT_STANDARDISED",
            SignalCode::LeadHandlingGap => "LEAD_HANDLING_GAP",
            SignalCode::PricingDisciplineWeak => "PRICING_DISCIPLINE_WEAK",
            SignalCode::StockAgeingRisk => "STOCK_AGEING_RISK",
            SignalCode::DataQualityLow => "DATA_QUALITY_LOW",
            SignalCode::CustomerFollowupWeak => "CUSTOMER_FOLLOWUP_WEAK",
            SignalCode::StaffCapabilityGap => "STAFF_CAPABILITY_GAP",
            SignalCode::DigitalAdoptionLow => "DIGITAL_ADOPTION_LOW",
            SignalCode::CapacityPlanningWeak => "CAPACITY_PLANNING_WEAK",
            SignalCode::RetentionRisk => "RETENTION_RISK",
        }
    }

    /// Human-readable description used when building a signal's rationale.
    pub fn description(&self) -> &'static str {
        match self {
            SignalCode::None => "No operational weakness detected",
            SignalCode::GovernanceWeak => {
                "Management lacks structured KPI oversight and regular performance reviews"
            }
            SignalCode::ProcessNotStandardised => {
                "Day-to-day work relies on individual habits instead of documented standard processes"
            }
            SignalCode::LeadHandlingGap => {
                "Incoming sales leads are not captured, qualified, or responded to consistently"
            }
            SignalCode::PricingDisciplineWeak => {
                "Pricing and discounting decisions are ad hoc rather than rule-based"
            }
            SignalCode::StockAgeingRisk => {
                "Vehicle or parts stock ages beyond target turn times without countermeasures"
            }
            SignalCode::DataQualityLow => {
                "Core operational data is incomplete or unreliable, weakening every downstream decision"
            }
            SignalCode::CustomerFollowupWeak => {
                "Customers are not contacted systematically after sales or service touchpoints"
            }
            SignalCode::StaffCapabilityGap => {
                "Staff lack the training or certification the role requires"
            }
            SignalCode::DigitalAdoptionLow => {
                "Digital retail and workshop tools exist but are not used in daily operations"
            }
            SignalCode::CapacityPlanningWeak => {
                "Workshop or sales capacity is not planned against actual demand"
            }
            SignalCode::RetentionRisk => {
                "Existing customers are at risk of defecting due to weak loyalty management"
            }
        }
    }
}

impl std::fmt::Display for SignalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency ranking of a signal, derived from its module's score.
/// Ordering is ascending so `max()` picks the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Severity {
    Low,
    Medium,
    High,
}
