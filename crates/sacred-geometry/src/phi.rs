// SPDX-License-Identifier: MIT

//! The golden ratio, the golden angle, and the canonical Fibonacci prefix.
//!
//! These are process-wide constants, evaluated at compile time. Nothing in
//! the engine recomputes them per call.

use std::borrow::Cow;
use std::f64::consts::TAU;

/// φ = (1 + √5) / 2.
///
/// Written as a literal because `f64::sqrt` is not `const`. The tests pin it
/// against the closed form.
pub const PHI: f64 = 1.618_033_988_749_895;

/// 1 / φ = φ − 1.
pub const INV_PHI: f64 = PHI - 1.0;

/// The golden angle in degrees: 360 × (2 − φ) ≈ 137.5078°.
pub const GOLDEN_ANGLE_DEG: f64 = 360.0 * (2.0 - PHI);

/// The per-sample rotation used by the spiral, in radians: 2π / φ.
///
/// Note this is the *major* arc (≈ 222.5°), the complement of
/// [`GOLDEN_ANGLE_DEG`]. Both describe the same division of the circle.
pub const GOLDEN_TURN_RAD: f64 = TAU / PHI;

/// The Fibonacci prefix used throughout the system, F(0) through F(12).
pub const FIBONACCI: [u64; 13] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Fibonacci numbers used as milestone markers.
pub const FIBONACCI_MILESTONES: [u64; 7] = [8, 13, 21, 34, 55, 89, 144];

/// Whether `n` appears in [`FIBONACCI`].
#[must_use]
pub fn is_fibonacci(n: u64) -> bool {
    FIBONACCI.contains(&n)
}

/// Ratios F(n+1)/F(n) over the fixed prefix, starting at n = 1.
///
/// Converges toward φ, alternating above and below it.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fibonacci_ratios() -> Vec<f64> {
    FIBONACCI
        .windows(2)
        .skip(1)
        .map(|w| w[1] as f64 / w[0] as f64)
        .collect()
}

/// The traditional meaning attached to a Fibonacci milestone number.
#[must_use]
pub fn fibonacci_significance(n: u64) -> Cow<'static, str> {
    let known = match n {
        8 => "Octave - Musical sacred harmony",
        13 => "Divine feminine - Lunar cycles",
        21 => "Human perfection - 21 grams soul weight",
        34 => "Christ consciousness - Biblical numbers",
        55 => "Grace and redemption - Biblical symbolism",
        89 => "Wisdom and enlightenment - Kabbalistic",
        144 => "Divine architecture - 144,000 chosen",
        _ => return Cow::Owned(format!("Sacred fibonacci number {n}")),
    };
    Cow::Borrowed(known)
}

/// Days between "now" and the due date of a Fibonacci milestone.
///
/// Saturates at `u64::MAX` rather than wrapping.
#[must_use]
pub const fn milestone_offset_days(n: u64) -> u64 {
    n.saturating_mul(3)
}
