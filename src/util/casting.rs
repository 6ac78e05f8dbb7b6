use num::cast;

/// Lossy cast for counts that end up in float math. Never fails, values that
/// don't fit become infinity.
pub(crate) fn usize_to_f64(x: usize) -> f64 {
    cast(x).unwrap_or(f64::INFINITY)
}

/// Counts used as RNG seeds, saturating.
pub(crate) fn usize_to_u64(x: usize) -> u64 {
    x.try_into().unwrap_or(u64::MAX)
}
