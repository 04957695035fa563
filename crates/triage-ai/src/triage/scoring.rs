//! Score aggregation and the fixed logistic probability curve.

pub const URGENCY_FLOOR: f64 = 0.0;
pub const URGENCY_CEILING: f64 = 100.0;

const LOGISTIC_MIDPOINT: f64 = 50.0;
const LOGISTIC_SCALE: f64 = 10.0;
const PROBABILITY_FLOOR: f64 = 0.01;
const PROBABILITY_CEILING: f64 = 0.99;

/// Clamp the raw point total into `[0, 100]` without rounding.
pub fn urgency_score(total: f64) -> f64 {
    total.min(URGENCY_CEILING).max(URGENCY_FLOOR)
}

/// Logistic curve centred on urgency 50, clamped to `[0.01, 0.99]`.
pub fn probability(urgency: f64) -> f64 {
    let raw = 1.0 / (1.0 + (-(urgency - LOGISTIC_MIDPOINT) / LOGISTIC_SCALE).exp());
    raw.min(PROBABILITY_CEILING).max(PROBABILITY_FLOOR)
}
