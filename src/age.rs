/// Estimated reader age for each ceiling-rounded score, from 0 up to 14.
pub const AGE_TABLE: [u32; 15] = [0, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 24];

const MAX_INDEX: i64 = AGE_TABLE.len() as i64 - 1;

/// Table index for a score: `ceil(score)` clamped to `0..=14`.
///
/// Negative scores clamp to the first entry; non-finite scores map to index 0.
pub fn age_index(score: f64) -> usize {
    if score.is_nan() {
        return 0;
    }
    // `as` saturates, so infinities land on the clamp bounds.
    (score.ceil() as i64).clamp(0, MAX_INDEX) as usize
}

pub fn map_age(score: f64) -> u32 {
    AGE_TABLE[age_index(score)]
}

/// Arithmetic mean of already mapped ages, or `None` for an empty slice.
pub fn average_age(ages: &[u32]) -> Option<f64> {
    if ages.is_empty() {
        return None;
    }
    let sum: u32 = ages.iter().sum();
    Some(f64::from(sum) / ages.len() as f64)
}
