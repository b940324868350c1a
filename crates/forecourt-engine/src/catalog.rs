//! Static action template catalog.
//!
//! Each template is owned by exactly one signal code. Declaration order is
//! a contract: `default_template_for_signal` returns the first declared
//! match, so the backing store is an ordered slice, never a map.

use forecourt_core::models::{OwnerRole, Priority, SignalCode};

/// A reusable improvement-action definition.
#[derive(Debug, Clone, Copy)]
pub struct ActionTemplate {
    pub template_id: &'static str,
    pub signal_code: SignalCode,
    pub title: &'static str,
    pub description: &'static str,
    pub default_owner_role: OwnerRole,
    pub default_timeframe_days: i64,
    pub default_priority: Priority,
    pub implementation_steps: &'static [&'static str],
}

const CATALOG: &[ActionTemplate] = &[
    // GOVERNANCE_WEAK
    ActionTemplate {
        template_id: "act-gov-01",
        signal_code: SignalCode::GovernanceWeak,
        title: "Stand up a weekly KPI cockpit",
        description: "Define the five KPIs that matter per department, build a one-page cockpit, and review it in a fixed weekly management meeting.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 30,
        default_priority: Priority::High,
        implementation_steps: &[
            "Agree the five KPIs per department with each manager",
            "Build the one-page cockpit from existing DMS reports",
            "Block a fixed 30-minute weekly review slot",
        ],
    },
    ActionTemplate {
        template_id: "act-gov-02",
        signal_code: SignalCode::GovernanceWeak,
        title: "Introduce monthly department reviews",
        description: "Hold a monthly one-to-one between the general manager and each department head against plan, actions, and risks.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 45,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Publish a standing agenda: plan vs actual, open actions, risks",
            "Schedule the first cycle for all departments",
            "Track agreed actions to completion in the action plan",
        ],
    },
    // PROCESS_NOT_STANDARDISED
    ActionTemplate {
        template_id: "act-prc-01",
        signal_code: SignalCode::ProcessNotStandardised,
        title: "Document the core process per department",
        description: "Write the one critical path per department as a short, visual standard and train every involved employee on it.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 60,
        default_priority: Priority::High,
        implementation_steps: &[
            "Pick the single highest-impact process per department",
            "Map it with the people who run it today",
            "Publish the standard and train the team",
        ],
    },
    ActionTemplate {
        template_id: "act-prc-02",
        signal_code: SignalCode::ProcessNotStandardised,
        title: "Audit process adherence quarterly",
        description: "Walk each documented standard quarterly, record deviations, and fix the standard or the behaviour.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 90,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Build a short adherence checklist per standard",
            "Walk the process with the owning manager",
            "Log deviations and agree corrections",
        ],
    },
    // LEAD_HANDLING_GAP
    ActionTemplate {
        template_id: "act-led-01",
        signal_code: SignalCode::LeadHandlingGap,
        title: "Enforce same-day lead capture in the CRM",
        description: "Every lead from every channel is in the CRM before close of business, with source and next step recorded.",
        default_owner_role: OwnerRole::SalesManager,
        default_timeframe_days: 14,
        default_priority: Priority::High,
        implementation_steps: &[
            "List every lead channel and its current capture path",
            "Close the gaps so each channel lands in the CRM",
            "Check capture completeness in the morning sales meeting",
        ],
    },
    ActionTemplate {
        template_id: "act-led-02",
        signal_code: SignalCode::LeadHandlingGap,
        title: "Set a two-hour first-response standard",
        description: "Commit to a first qualified response within two business hours and measure it per salesperson.",
        default_owner_role: OwnerRole::SalesManager,
        default_timeframe_days: 30,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Switch on response-time reporting in the CRM",
            "Agree the standard with the sales team",
            "Review response times weekly per salesperson",
        ],
    },
    // PRICING_DISCIPLINE_WEAK
    ActionTemplate {
        template_id: "act-pri-01",
        signal_code: SignalCode::PricingDisciplineWeak,
        title: "Publish a discount approval matrix",
        description: "Define who may discount how much on which product, and route anything above threshold to the sales manager.",
        default_owner_role: OwnerRole::SalesManager,
        default_timeframe_days: 30,
        default_priority: Priority::High,
        implementation_steps: &[
            "Set discount thresholds per product line",
            "Configure the approval step in the sales workflow",
            "Review exceptions monthly",
        ],
    },
    ActionTemplate {
        template_id: "act-pri-02",
        signal_code: SignalCode::PricingDisciplineWeak,
        title: "Benchmark pricing against market data weekly",
        description: "Compare asking prices to live market data every week and reprice outliers by rule, not by gut feel.",
        default_owner_role: OwnerRole::SalesManager,
        default_timeframe_days: 45,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Subscribe to a market pricing feed for the region",
            "Define the repricing rule for outliers",
            "Run the repricing pass every Monday",
        ],
    },
    // STOCK_AGEING_RISK
    ActionTemplate {
        template_id: "act-stk-01",
        signal_code: SignalCode::StockAgeingRisk,
        title: "Introduce a stock age ladder",
        description: "Give every unit an age-triggered step: reprice at 30 days, feature at 45, wholesale decision at 60.",
        default_owner_role: OwnerRole::SalesManager,
        default_timeframe_days: 30,
        default_priority: Priority::High,
        implementation_steps: &[
            "Define the age steps and the action at each step",
            "Flag current stock already past a step",
            "Review the ladder in the weekly sales meeting",
        ],
    },
    ActionTemplate {
        template_id: "act-stk-02",
        signal_code: SignalCode::StockAgeingRisk,
        title: "Run a quarterly obsolescence review",
        description: "Identify dead and slow-moving stock quarterly and clear it through returns, promotions, or write-off.",
        default_owner_role: OwnerRole::PartsManager,
        default_timeframe_days: 90,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Pull the no-movement report for the last 12 months",
            "Classify each line: return, promote, or write off",
            "Execute and book the outcome",
        ],
    },
    // DATA_QUALITY_LOW
    ActionTemplate {
        template_id: "act-dat-01",
        signal_code: SignalCode::DataQualityLow,
        title: "Run a data accuracy audit",
        description: "Sample core records across departments, measure error rates, and fix the worst capture points first.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 45,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Sample 50 records per department",
            "Score completeness and correctness",
            "Fix the top three capture points",
        ],
    },
    ActionTemplate {
        template_id: "act-dat-02",
        signal_code: SignalCode::DataQualityLow,
        title: "Make data capture part of the daily process",
        description: "Move data entry into the moment of work, with required fields and a daily exception report.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 60,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Make the critical fields mandatory in the DMS",
            "Switch on the daily incomplete-record report",
            "Assign each exception to a named owner",
        ],
    },
    // CUSTOMER_FOLLOWUP_WEAK
    ActionTemplate {
        template_id: "act-fup-01",
        signal_code: SignalCode::CustomerFollowupWeak,
        title: "Schedule follow-up contacts automatically",
        description: "Create the follow-up task automatically at handover and at service collection, with a due date and owner.",
        default_owner_role: OwnerRole::CustomerExperienceLead,
        default_timeframe_days: 30,
        default_priority: Priority::High,
        implementation_steps: &[
            "Configure automatic task creation in the CRM",
            "Set the 48-hour and one-week cadences",
            "Report completion rates weekly",
        ],
    },
    ActionTemplate {
        template_id: "act-fup-02",
        signal_code: SignalCode::CustomerFollowupWeak,
        title: "Script and train the follow-up call",
        description: "Give the team a short call guide covering satisfaction, open issues, and the next touchpoint.",
        default_owner_role: OwnerRole::CustomerExperienceLead,
        default_timeframe_days: 45,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Draft the guide with the best current callers",
            "Train everyone who makes follow-up calls",
            "Spot-check calls monthly",
        ],
    },
    // STAFF_CAPABILITY_GAP
    ActionTemplate {
        template_id: "act-trn-01",
        signal_code: SignalCode::StaffCapabilityGap,
        title: "Build a certification matrix per role",
        description: "Map required certifications per role against current status and make gaps visible to every manager.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 45,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "List required certifications per role",
            "Record current status per employee",
            "Publish the matrix and review it quarterly",
        ],
    },
    ActionTemplate {
        template_id: "act-trn-02",
        signal_code: SignalCode::StaffCapabilityGap,
        title: "Close priority training gaps this quarter",
        description: "Book the training that closes the highest-impact gaps first, starting with customer-facing and safety-relevant roles.",
        default_owner_role: OwnerRole::GeneralManager,
        default_timeframe_days: 90,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Rank open gaps by operational impact",
            "Book courses for the top gaps",
            "Track completion in the certification matrix",
        ],
    },
    // DIGITAL_ADOPTION_LOW
    ActionTemplate {
        template_id: "act-dig-01",
        signal_code: SignalCode::DigitalAdoptionLow,
        title: "Make online stock hygiene a daily routine",
        description: "Every advertised vehicle has complete data, standard photos, and a current price before 10:00 each day.",
        default_owner_role: OwnerRole::SalesManager,
        default_timeframe_days: 30,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Define the listing standard: fields, photos, price",
            "Assign the daily hygiene check to a named person",
            "Audit listings weekly against the standard",
        ],
    },
    ActionTemplate {
        template_id: "act-dig-02",
        signal_code: SignalCode::DigitalAdoptionLow,
        title: "Switch on online service booking",
        description: "Open the workshop diary to online booking and steer customers to it at every contact.",
        default_owner_role: OwnerRole::ServiceManager,
        default_timeframe_days: 60,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Connect the booking tool to the workshop diary",
            "Add the booking link to invoices and reminders",
            "Measure the online share of bookings monthly",
        ],
    },
    // CAPACITY_PLANNING_WEAK
    ActionTemplate {
        template_id: "act-cap-01",
        signal_code: SignalCode::CapacityPlanningWeak,
        title: "Plan workshop load one week ahead",
        description: "Plan sold hours against available hours a week out and rebalance bookings before the day goes wrong.",
        default_owner_role: OwnerRole::ServiceManager,
        default_timeframe_days: 30,
        default_priority: Priority::High,
        implementation_steps: &[
            "Build the weekly load sheet from the diary",
            "Review it every Thursday for the following week",
            "Move or add bookings to balance the load",
        ],
    },
    ActionTemplate {
        template_id: "act-cap-02",
        signal_code: SignalCode::CapacityPlanningWeak,
        title: "Track productive hours per technician",
        description: "Measure clocked versus sold hours per technician daily and address the gap in the morning meeting.",
        default_owner_role: OwnerRole::ServiceManager,
        default_timeframe_days: 45,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Switch on time clocking for every repair order",
            "Publish the daily productivity board",
            "Discuss outliers in the morning meeting",
        ],
    },
    // RETENTION_RISK
    ActionTemplate {
        template_id: "act-ret-01",
        signal_code: SignalCode::RetentionRisk,
        title: "Launch a lapsed-customer win-back campaign",
        description: "Contact customers with no service visit in 18 months with a concrete offer and a booking path.",
        default_owner_role: OwnerRole::CustomerExperienceLead,
        default_timeframe_days: 60,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Pull the lapsed-customer list from the DMS",
            "Agree the offer and the contact channel",
            "Run the campaign and measure bookings won",
        ],
    },
    ActionTemplate {
        template_id: "act-ret-02",
        signal_code: SignalCode::RetentionRisk,
        title: "Flag finance renewals 90 days out",
        description: "Surface every finance contract ending within 90 days to the sales team with the customer's equity position.",
        default_owner_role: OwnerRole::SalesManager,
        default_timeframe_days: 45,
        default_priority: Priority::Medium,
        implementation_steps: &[
            "Build the 90-day renewal report",
            "Assign each renewal to a salesperson",
            "Track contact and outcome per renewal",
        ],
    },
];

/// The full catalog in declaration order.
pub fn catalog() -> &'static [ActionTemplate] {
    CATALOG
}

/// Look up a template by id.
pub fn get_template(template_id: &str) -> Option<&'static ActionTemplate> {
    CATALOG.iter().find(|t| t.template_id == template_id)
}

/// All templates owned by a signal code, in declaration order.
pub fn templates_for_signal(code: SignalCode) -> Vec<&'static ActionTemplate> {
    CATALOG.iter().filter(|t| t.signal_code == code).collect()
}

/// The first declared template for a signal code. First-match is a
/// contract relied on by callers that need one representative action.
pub fn default_template_for_signal(code: SignalCode) -> Option<&'static ActionTemplate> {
    CATALOG.iter().find(|t| t.signal_code == code)
}
