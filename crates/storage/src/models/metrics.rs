use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Self-reported and measured values shared by Point A and progress snapshots.
///
/// Every field is optional: an absent value means "not tracked", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Metrics {
    #[validate(range(min = 1, max = 10, message = "Energy level must be between 1 and 10"))]
    pub energy_level: Option<i32>,

    #[validate(range(min = 1, max = 10, message = "Stress level must be between 1 and 10"))]
    pub stress_level: Option<i32>,

    #[validate(range(min = 1, max = 10, message = "Sleep quality must be between 1 and 10"))]
    pub sleep_quality: Option<i32>,

    #[validate(range(min = 1, max = 10, message = "Nutrition quality must be between 1 and 10"))]
    pub nutrition_quality: Option<i32>,

    #[validate(range(min = 1, max = 10, message = "Emotions level must be between 1 and 10"))]
    pub emotions_level: Option<i32>,

    #[validate(range(min = 1, max = 10, message = "Intimacy level must be between 1 and 10"))]
    pub intimacy_level: Option<i32>,

    /// Body weight in kilograms
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    #[validate(custom(function = "validate_body_fat"))]
    pub body_fat_percentage: Option<Decimal>,

    /// Plank hold in seconds
    #[validate(range(min = 0, max = 36000))]
    pub plank_time: Option<i32>,

    #[validate(range(min = 0, max = 1000))]
    pub punches_per_minute: Option<i32>,
}

fn validate_weight(weight: &Decimal) -> Result<(), validator::ValidationError> {
    if *weight > Decimal::ZERO && *weight < Decimal::from(500) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_weight"))
    }
}

fn validate_body_fat(body_fat: &Decimal) -> Result<(), validator::ValidationError> {
    if *body_fat >= Decimal::ZERO && *body_fat <= Decimal::from(100) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_body_fat_percentage"))
    }
}

/// Which way a metric has to move to count as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Better {
    Higher,
    Lower,
}

/// The ten tracked metrics, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Energy,
    Stress,
    Sleep,
    Nutrition,
    Emotions,
    Intimacy,
    Weight,
    BodyFat,
    PlankTime,
    PunchesPerMinute,
}

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Energy,
        Metric::Stress,
        Metric::Sleep,
        Metric::Nutrition,
        Metric::Emotions,
        Metric::Intimacy,
        Metric::Weight,
        Metric::BodyFat,
        Metric::PlankTime,
        Metric::PunchesPerMinute,
    ];

    /// The 1-10 questionnaire scores that feed the aggregate progress score.
    pub const SUBJECTIVE: [Metric; 6] = [
        Metric::Energy,
        Metric::Stress,
        Metric::Sleep,
        Metric::Nutrition,
        Metric::Emotions,
        Metric::Intimacy,
    ];

    pub fn field(self) -> &'static str {
        match self {
            Metric::Energy => "energy_level",
            Metric::Stress => "stress_level",
            Metric::Sleep => "sleep_quality",
            Metric::Nutrition => "nutrition_quality",
            Metric::Emotions => "emotions_level",
            Metric::Intimacy => "intimacy_level",
            Metric::Weight => "weight",
            Metric::BodyFat => "body_fat_percentage",
            Metric::PlankTime => "plank_time",
            Metric::PunchesPerMinute => "punches_per_minute",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Energy => "Energy",
            Metric::Stress => "Stress",
            Metric::Sleep => "Sleep quality",
            Metric::Nutrition => "Nutrition",
            Metric::Emotions => "Emotional state",
            Metric::Intimacy => "Intimacy",
            Metric::Weight => "Weight",
            Metric::BodyFat => "Body fat",
            Metric::PlankTime => "Plank time",
            Metric::PunchesPerMinute => "Punches per minute",
        }
    }

    pub fn better(self) -> Better {
        match self {
            Metric::Stress | Metric::Weight | Metric::BodyFat => Better::Lower,
            _ => Better::Higher,
        }
    }
}

impl Metrics {
    /// Value of a metric as `f64`, `None` when not tracked.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Energy => self.energy_level.map(f64::from),
            Metric::Stress => self.stress_level.map(f64::from),
            Metric::Sleep => self.sleep_quality.map(f64::from),
            Metric::Nutrition => self.nutrition_quality.map(f64::from),
            Metric::Emotions => self.emotions_level.map(f64::from),
            Metric::Intimacy => self.intimacy_level.map(f64::from),
            Metric::Weight => self.weight.and_then(|w| w.to_f64()),
            Metric::BodyFat => self.body_fat_percentage.and_then(|b| b.to_f64()),
            Metric::PlankTime => self.plank_time.map(f64::from),
            Metric::PunchesPerMinute => self.punches_per_minute.map(f64::from),
        }
    }
}
