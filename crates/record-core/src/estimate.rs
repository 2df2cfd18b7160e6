use crate::error::{RecordError, Result};
use crate::weight::parse_weight;

/// Epley estimate of the weight liftable for a single rep.
pub fn epley(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + f64::from(reps) / 30.0)
}

/// Estimate a one-rep max from a `<reps>x<weight>[kg]` token.
///
/// The token is split on the first `x`; the left side must be a whole rep
/// count and the right side a weight with an optional `kg` suffix.
pub fn one_rep_max(token: &str) -> Result<f64> {
    let lowered = token.trim().to_lowercase();
    let (reps_text, weight_text) = lowered
        .split_once('x')
        .ok_or_else(|| RecordError::InvalidLift(token.to_string()))?;

    let reps: u32 = reps_text
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidReps(reps_text.trim().to_string(), token.to_string()))?;

    let weight_text = weight_text.trim();
    let weight_text = weight_text.strip_suffix("kg").unwrap_or(weight_text);
    let weight = parse_weight(weight_text, token)?;

    let estimate = epley(weight, reps);
    if !estimate.is_finite() {
        return Err(RecordError::InvalidLift(token.to_string()));
    }
    Ok(estimate)
}
