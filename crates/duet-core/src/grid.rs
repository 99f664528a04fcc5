// File: crates/duet-core/src/grid.rs
// Summary: Grid/tick layout helpers.
// Notes:
// - Ticks are generated by index and capped at a few times the target count.

use crate::axis::Domain;

/// Round step (1, 2, 5 x 10^k) giving at most about `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs().max(1e-12) / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Tick values on round numbers inside `domain`.
pub fn nice_ticks(domain: Domain, target: usize) -> Vec<f64> {
    if !(domain.span() > 0.0) {
        return vec![domain.min];
    }
    let step = nice_step(domain.span(), target);
    let first = (domain.min / step).ceil() * step;
    stepped(first, step, domain.max + step * 1e-9, tick_cap(target))
        .into_iter()
        // avoid printing -0
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

fn tick_cap(target: usize) -> usize { target.max(1) * 4 + 1 }

/// `first + i * step` for every `i` that stays within `max`, at most `cap` values.
/// A step too small to move `first` yields `first` alone.
fn stepped(first: f64, step: f64, max: f64, cap: usize) -> Vec<f64> {
    if !(first <= max) {
        return Vec::new();
    }
    if !(step > 0.0) || first + step == first {
        return vec![first];
    }
    let n = ((max - first) / step).floor();
    let n = if n.is_finite() { (n as usize).min(cap - 1) } else { cap - 1 };
    (0..=n).map(|i| first + i as f64 * step).collect()
}

const MINUTE: f64 = 60_000.0;

/// Tick times snapped to calendar-friendly intervals (minutes to days).
pub fn time_ticks(domain: Domain, target: usize) -> Vec<f64> {
    const STEPS: [f64; 12] = [
        1.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 180.0, 360.0, 720.0, 1440.0, 10080.0,
    ];
    if !(domain.span() > 0.0) {
        return vec![domain.min];
    }
    let raw = domain.span() / target.max(1) as f64;
    let step = STEPS
        .iter()
        .map(|m| m * MINUTE)
        .find(|s| *s >= raw)
        .unwrap_or_else(|| nice_step(domain.span(), target));
    let first = (domain.min / step).ceil() * step;
    stepped(first, step, domain.max, tick_cap(target))
}
