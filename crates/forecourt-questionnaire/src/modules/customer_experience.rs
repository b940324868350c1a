use crate::question::{LIKERT_1_5, Question};
use crate::SurveyModule;

/// Customer Experience: follow-up discipline, complaint handling, retention
/// campaigns, and contact data quality across the whole dealership.
pub struct CustomerExperience;

impl SurveyModule for CustomerExperience {
    fn key(&self) -> &str {
        "customer-experience"
    }

    fn name(&self) -> &str {
        "Customer Experience"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "cx-1",
                    "follow-up",
                    "Every customer is contacted within 48 hours of vehicle handover.",
                ),
                (
                    "cx-2",
                    "retention",
                    "Lapsed service customers are won back with a structured campaign.",
                ),
                (
                    "cx-3",
                    "retention",
                    "Renewal opportunities are flagged before finance contracts end.",
                ),
                (
                    "cx-4",
                    "data-quality",
                    "Customer contact data is verified at every touchpoint.",
                ),
                (
                    "cx-5",
                    "process",
                    "Complaints follow a documented escalation path with deadlines.",
                ),
                (
                    "cx-6",
                    "governance",
                    "Customer satisfaction results are reviewed with all departments.",
                ),
                (
                    "cx-7",
                    "digital",
                    "Customers receive status updates through their preferred channel.",
                ),
                (
                    "cx-8",
                    "training",
                    "Customer-facing staff are trained in complaint resolution.",
                ),
                (
                    "cx-9",
                    "follow-up",
                    "Post-service follow-up calls happen within three days.",
                ),
            ];

            items
                .iter()
                .map(|(id, category, text)| Question {
                    id: id.to_string(),
                    text: text.to_string(),
                    category: category.to_string(),
                    weight: 1.0,
                    scale: LIKERT_1_5,
                })
                .collect()
        });
        &QUESTIONS
    }
}
