use crate::question::{LIKERT_1_5, Question};
use crate::SurveyModule;

/// Used Vehicle Sales: stock turn discipline, market-based pricing, and the
/// appraisal-to-sale process.
pub struct UsedVehicleSales;

impl SurveyModule for UsedVehicleSales {
    fn key(&self) -> &str {
        "used-vehicle-sales"
    }

    fn name(&self) -> &str {
        "Used Vehicle Sales"
    }

    fn weight(&self) -> f64 {
        0.20
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "uvs-1",
                    "stock-control",
                    "Used stock age is tracked daily against a 60-day turn target.",
                ),
                (
                    "uvs-2",
                    "stock-control",
                    "Vehicles past the age threshold trigger a defined repricing step.",
                ),
                (
                    "uvs-3",
                    "pricing",
                    "Used pricing is benchmarked against live market data weekly.",
                ),
                (
                    "uvs-4",
                    "process",
                    "Appraisal and trade-in valuation follow one documented process.",
                ),
                (
                    "uvs-5",
                    "digital",
                    "Every used vehicle is advertised online within 48 hours of intake.",
                ),
                (
                    "uvs-6",
                    "data-quality",
                    "Reconditioning costs are recorded per vehicle before sale.",
                ),
                (
                    "uvs-7",
                    "governance",
                    "Used vehicle margin is reviewed per unit, not only in aggregate.",
                ),
                (
                    "uvs-8",
                    "follow-up",
                    "Used vehicle buyers receive a follow-up contact within one week.",
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
