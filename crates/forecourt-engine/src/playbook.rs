//! Signal→action playbook.
//!
//! Maps each signal code to its ordered template ids and the per-assessment
//! cap. A signal code without an entry is skipped by the generator, not an
//! error.

use forecourt_core::models::SignalCode;

/// One playbook row: which templates a signal resolves to, and how many of
/// them may be instantiated for one assessment.
#[derive(Debug, Clone, Copy)]
pub struct SignalToActionEntry {
    pub signal_code: SignalCode,
    pub template_ids: &'static [&'static str],
    pub max_actions_per_assessment: usize,
}

impl SignalToActionEntry {
    /// The template ids this entry may instantiate for one assessment: the
    /// first `max_actions_per_assessment` ids in declared order. A template
    /// outside this window is never substituted in, even when one inside it
    /// is deduplicated away.
    pub fn capped_template_ids(&self) -> &[&'static str] {
        let cap = self.max_actions_per_assessment.min(self.template_ids.len());
        &self.template_ids[..cap]
    }
}

const PLAYBOOK: &[SignalToActionEntry] = &[
    SignalToActionEntry {
        signal_code: SignalCode::GovernanceWeak,
        template_ids: &["act-gov-01", "act-gov-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::ProcessNotStandardised,
        template_ids: &["act-prc-01", "act-prc-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::LeadHandlingGap,
        template_ids: &["act-led-01", "act-led-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::PricingDisciplineWeak,
        template_ids: &["act-pri-01", "act-pri-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::StockAgeingRisk,
        template_ids: &["act-stk-01", "act-stk-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::DataQualityLow,
        template_ids: &["act-dat-01", "act-dat-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::CustomerFollowupWeak,
        template_ids: &["act-fup-01", "act-fup-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::StaffCapabilityGap,
        template_ids: &["act-trn-01", "act-trn-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::DigitalAdoptionLow,
        template_ids: &["act-dig-01", "act-dig-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::CapacityPlanningWeak,
        template_ids: &["act-cap-01", "act-cap-02"],
        max_actions_per_assessment: 2,
    },
    SignalToActionEntry {
        signal_code: SignalCode::RetentionRisk,
        template_ids: &["act-ret-01", "act-ret-02"],
        max_actions_per_assessment: 2,
    },
];

/// The full playbook in declaration order.
pub fn playbook() -> &'static [SignalToActionEntry] {
    PLAYBOOK
}

/// Look up the playbook entry for a signal code.
pub fn playbook_entry(code: SignalCode) -> Option<&'static SignalToActionEntry> {
    PLAYBOOK.iter().find(|e| e.signal_code == code)
}
