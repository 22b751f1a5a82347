use std::sync::atomic::{AtomicUsize, Ordering};

pub mod persistence;

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Process-unique id for newly created offerings.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// Final currency rounding for the presentation layer. The domain functions
/// themselves never round.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_money(value: f64) -> String {
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${value:.2}")
    }
}
