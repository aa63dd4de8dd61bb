//! Floating-point cleanup helpers for coordinate tuples.

/// Round every component to `digits` decimal places, collecting into any
/// container of `f64`.
pub fn round_all<C>(values: impl IntoIterator<Item = f64>, digits: u32) -> C
where
    C: FromIterator<f64>,
{
    let scale = 10f64.powi(digits as i32);
    values
        .into_iter()
        .map(|value| (value * scale).round() / scale)
        .collect()
}

/// Snap components whose magnitude is below `eps` to exactly zero,
/// leaving everything else untouched.
pub fn snap_zero<C>(values: impl IntoIterator<Item = f64>, eps: f64) -> C
where
    C: FromIterator<f64>,
{
    values
        .into_iter()
        .map(|value| if value.abs() < eps { 0.0 } else { value })
        .collect()
}
