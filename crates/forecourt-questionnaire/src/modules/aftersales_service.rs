use crate::question::{LIKERT_1_5, Question};
use crate::SurveyModule;

/// Aftersales & Service: workshop capacity planning, write-up and inspection
/// process, technician capability, and repair-order data quality.
pub struct AftersalesService;

impl SurveyModule for AftersalesService {
    fn key(&self) -> &str {
        "aftersales-service"
    }

    fn name(&self) -> &str {
        "Aftersales & Service"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "svc-1",
                    "capacity",
                    "Workshop capacity is planned at least one week ahead against bookings.",
                ),
                (
                    "svc-2",
                    "capacity",
                    "Productive hours per technician are measured against a daily target.",
                ),
                (
                    "svc-3",
                    "process",
                    "Every vehicle receives a documented multi-point inspection.",
                ),
                (
                    "svc-4",
                    "process",
                    "Service write-up follows a standard checklist at the reception desk.",
                ),
                (
                    "svc-5",
                    "follow-up",
                    "Customers are contacted when deferred repair work becomes due.",
                ),
                (
                    "svc-6",
                    "training",
                    "Technicians hold the certifications their assigned work requires.",
                ),
                (
                    "svc-7",
                    "data-quality",
                    "Repair orders capture cause, correction, and parts used completely.",
                ),
                (
                    "svc-8",
                    "governance",
                    "Aftersales KPIs are reviewed with the team at least weekly.",
                ),
                (
                    "svc-9",
                    "digital",
                    "Customers can book service appointments online.",
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
