use crate::question::{LIKERT_1_5, Question};
use crate::SurveyModule;

/// Parts & Inventory: stock accuracy, obsolescence control, and ordering
/// discipline for the parts operation.
pub struct PartsInventory;

impl SurveyModule for PartsInventory {
    fn key(&self) -> &str {
        "parts-inventory"
    }

    fn name(&self) -> &str {
        "Parts & Inventory"
    }

    fn weight(&self) -> f64 {
        0.15
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "pts-1",
                    "stock-control",
                    "Parts stock is cycle-counted on a fixed schedule.",
                ),
                (
                    "pts-2",
                    "stock-control",
                    "Obsolete parts are identified and cleared at least quarterly.",
                ),
                (
                    "pts-3",
                    "process",
                    "Parts ordering follows documented min/max rules per reference.",
                ),
                (
                    "pts-4",
                    "governance",
                    "Parts KPIs such as fill rate, turns, and obsolescence are reviewed monthly.",
                ),
                (
                    "pts-5",
                    "data-quality",
                    "Bin locations and stock quantities in the system match reality.",
                ),
                (
                    "pts-6",
                    "process",
                    "Returns to suppliers follow a standard claims process.",
                ),
                (
                    "pts-7",
                    "governance",
                    "Slow-moving stock decisions are owned by a named manager.",
                ),
                (
                    "pts-8",
                    "capacity",
                    "Parts counter staffing matches workshop demand across the day.",
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
