use crate::dates::DateSequence;

/// Daily growth estimate for one district: the multiplicative factor per
/// day (1.0 = flat, 2.0 = doubling) and the RMS residual of the fit.
///
/// `factor == 0.0` means "insufficient data", never "zero growth" —
/// callers branch on it to render an insufficient-data state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRate {
    pub factor: f64,
    pub error: f64,
}

/// Ordinary least squares on paired arrays, `(slope, intercept)`.
///
/// Degenerate inputs come back as flat-line sentinels rather than NaN so
/// callers never pre-check lengths: fewer than two points gives
/// `(1.0, 1.0)`, zero variance in y (or in x) gives
/// `(1.0, mean_y - mean_x)`.
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> (f64, f64) {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return (1.0, 1.0);
    }

    let count = n as f64;
    let mean_x = xs[..n].iter().sum::<f64>() / count;
    let mean_y = ys[..n].iter().sum::<f64>() / count;

    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov = 0.0;
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        var_x += dx * dx;
        var_y += dy * dy;
        cov += dx * dy;
    }

    if var_y == 0.0 || var_x == 0.0 {
        return (1.0, mean_y - mean_x);
    }

    let slope = cov / var_x; // = correlation * stdev_y / stdev_x
    (slope, mean_y - slope * mean_x)
}

/// Fit `y = a * e^(b*x)` to a point series, returning `(a, b)`.
///
/// Works in log space, so points with `y <= 0` are excluded outright
/// (never clamped — a negative upstream "correction" is not an
/// observation). Fewer than three surviving points gives the sentinel
/// `(0.0, 0.0)`, which means "insufficient data", not a flat fit; a
/// window with no x spread gives the same sentinel.
pub fn exponential_fit(points: &[(f64, f64)]) -> (f64, f64) {
    let mut n = 0.0;
    let mut sum_x = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_ln_y = 0.0;
    let mut sum_x_ln_y = 0.0;

    for &(x, y) in points {
        if y <= 0.0 {
            continue;
        }
        let ln_y = y.ln();
        n += 1.0;
        sum_x += x;
        sum_x2 += x * x;
        sum_ln_y += ln_y;
        sum_x_ln_y += x * ln_y;
    }

    if n < 3.0 {
        return (0.0, 0.0);
    }
    let denom = n * sum_x2 - sum_x * sum_x;
    if denom == 0.0 {
        return (0.0, 0.0);
    }

    let a = ((sum_x2 * sum_ln_y - sum_x * sum_x_ln_y) / denom).exp();
    let b = (n * sum_x_ln_y - sum_x * sum_ln_y) / denom;
    (a, b)
}

/// RMS residual of `a * e^(b*x)` over the original, unfiltered series.
///
/// An uncertainty indicator to display next to the rate, not a
/// model-selection criterion. Empty series comes back as `0.0`.
pub fn exponential_fit_error(series: &[(f64, f64)], a: f64, b: f64) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let sum: f64 = series.iter()
        .map(|&(x, y)| {
            let residual = y - a * (b * x).exp();
            residual * residual
        })
        .sum();
    (sum / series.len() as f64).sqrt()
}

/// Growth rate of `value_fn` for one district over the trailing `window`
/// observations ending at `base_date`.
///
/// Builds the `(day_offset, count)` series by walking `dates` backward,
/// fits the exponential, and reports `exp(b)` as the daily factor. Near
/// the start of the series the window shortens, and once fewer than
/// three positive counts remain the sentinel (`factor == 0.0`) comes
/// back instead of a fake flat rate.
pub fn growth_rate<E: ?Sized>(
    dates: &DateSequence,
    entity: &E,
    base_date: &str,
    window: usize,
    value_fn: impl Fn(&E, &str) -> f64,
) -> GrowthRate {
    let mut series = Vec::with_capacity(window);
    let mut date = base_date;
    for offset in 0..window {
        series.push(((window - 1 - offset) as f64, value_fn(entity, date)));
        match dates.previous(date) {
            Some(prev) => date = prev,
            None => break,
        }
    }
    series.reverse(); // chronological, oldest first

    let (a, b) = exponential_fit(&series);
    if a == 0.0 && b == 0.0 {
        return GrowthRate { factor: 0.0, error: 0.0 };
    }
    GrowthRate {
        factor: b.exp(),
        error: exponential_fit_error(&series, a, b),
    }
}
