use std::time::Duration;

use anyhow::Result;

use super::{fit_projection, AffineFit, FeatureCollection, Viewport};

/// A planned switch between two geometric forms of the same districts,
/// e.g. true geography to cartogram. Holds the destination fit and the
/// tween duration; the renderer interpolates each feature's path toward
/// the destination shape under this single transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub fit: AffineFit,
    pub duration: Duration,
}

/// Plan the switch from `from` (currently on screen) to `to`.
///
/// The destination fit is computed from scratch against `to`, centered —
/// whatever fit is currently displayed is irrelevant, and two
/// `AffineFit`s are never interpolated. The path tween additionally
/// requires `from` and `to` to pair up feature-for-feature with equal
/// outer-ring vertex counts; that is the data-loading layer's contract
/// (run `check_vertex_counts` to audit it), so a count disagreement here
/// is only logged, not an error.
pub fn plan_transition(
    from: &FeatureCollection,
    to: &FeatureCollection,
    viewport: &Viewport,
    duration: Duration,
) -> Result<Transition> {
    if from.len() != to.len() {
        log::warn!(
            "transition between collections of {} and {} features; paths will not pair up",
            from.len(),
            to.len(),
        );
    }
    let fit = fit_projection(to, viewport, true)?;
    Ok(Transition { fit, duration })
}
