use crate::dates::DateSequence;

/// Weighted average of `value_fn` over a trailing window ending at `base_date`.
///
/// `weights[0]` applies to `base_date` itself, `weights[k]` to the date
/// `k` steps earlier in `dates`. Zero weights skip their step entirely,
/// which is how offset windows like "the 7 days ending 7 days ago"
/// (`[0,0,0,0,0,0,0,1,1,1,1,1,1,1]`) are expressed. If the walk runs off
/// the front of the sequence the window silently shortens and whatever
/// weight was accumulated is used; near the start of a series this is
/// the intended behavior, not an error.
///
/// Sparse-data policy: a NaN observation voids its own step (value and
/// weight) but the walk continues; zero total weight or a NaN quotient
/// comes back as `0.0`. The dashboard must keep rendering through
/// reporting gaps, so none of these conditions are errors.
///
/// Panics if `weights` is empty — that is a caller bug, not a data gap.
pub fn period_average<E: ?Sized>(
    dates: &DateSequence,
    entity: &E,
    base_date: &str,
    value_fn: impl Fn(&E, &str) -> f64,
    weights: &[f64],
) -> f64 {
    assert!(!weights.is_empty(), "[period_average] empty weight vector");

    let mut sum = 0.0;
    let mut total_weight = 0.0;
    let mut date = base_date;

    for &weight in weights {
        if weight != 0.0 {
            let value = value_fn(entity, date);
            if !value.is_nan() {
                sum += weight * value;
                total_weight += weight;
            }
        }
        // The base date itself need not be in the sequence; the walk
        // just stops after its contribution.
        match dates.previous(date) {
            Some(prev) => date = prev,
            None => break,
        }
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    let avg = sum / total_weight;
    if avg.is_nan() { 0.0 } else { avg }
}

/// Ratio-of-sums average over a group of districts:
/// `Σ numerator / Σ denominator` at one date.
///
/// This weights each district by its denominator (typically population),
/// which is not the same as averaging per-district ratios — a small
/// district with a wild ratio must not swing the regional figure.
/// Returns `0.0` when the summed denominator is zero (including the
/// empty group) or the quotient is NaN.
pub fn area_average<E>(
    entities: &[E],
    date: &str,
    numerator_fn: impl Fn(&E, &str) -> f64,
    denominator_fn: impl Fn(&E, &str) -> f64,
) -> f64 {
    let mut num = 0.0;
    let mut den = 0.0;
    for entity in entities {
        num += numerator_fn(entity, date);
        den += denominator_fn(entity, date);
    }
    if den == 0.0 {
        return 0.0;
    }
    let avg = num / den;
    if avg.is_nan() { 0.0 } else { avg }
}
