use crate::question::{LIKERT_1_5, Question};
use crate::SurveyModule;

/// New Vehicle Sales: lead handling, sales process discipline, pricing
/// governance, and digital presence for the new-car operation.
pub struct NewVehicleSales;

impl SurveyModule for NewVehicleSales {
    fn key(&self) -> &str {
        "new-vehicle-sales"
    }

    fn name(&self) -> &str {
        "New Vehicle Sales"
    }

    fn weight(&self) -> f64 {
        0.25
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "nvs-1",
                    "lead-management",
                    "Every incoming sales lead is logged in the CRM the day it arrives.",
                ),
                (
                    "nvs-2",
                    "lead-management",
                    "First response to a new lead happens within two business hours.",
                ),
                (
                    "nvs-3",
                    "process",
                    "The sales team follows a documented path from first contact to handover.",
                ),
                (
                    "nvs-4",
                    "process",
                    "Test drives are offered proactively and tracked per opportunity.",
                ),
                (
                    "nvs-5",
                    "pricing",
                    "Discounts above a defined threshold require sales-manager approval.",
                ),
                (
                    "nvs-6",
                    "pricing",
                    "New vehicle pricing follows a published rule set, not individual judgement.",
                ),
                (
                    "nvs-7",
                    "digital",
                    "Online stock listings are complete, current, and photographed to standard.",
                ),
                (
                    "nvs-8",
                    "training",
                    "Sales staff complete manufacturer certification on schedule.",
                ),
                (
                    "nvs-9",
                    "governance",
                    "New vehicle KPIs are reviewed with the team at least weekly.",
                ),
                (
                    "nvs-10",
                    "follow-up",
                    "Lost prospects are contacted with a structured follow-up cadence.",
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
