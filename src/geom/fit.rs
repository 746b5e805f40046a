use anyhow::{anyhow, Result};
use geo::Coord;
use serde::{Deserialize, Serialize};

use super::FeatureCollection;

/// Target rectangle in output (pixel) space, typically the pixel
/// dimensions of the map's DOM element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Viewport anchored at the origin, the common case.
    pub fn sized(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    #[inline] fn max_x(&self) -> f64 { self.x + self.width }
    #[inline] fn max_y(&self) -> f64 { self.y + self.height }
}

/// Uniform scale plus translation mapping source coordinates into a
/// viewport: `(x, y) -> (x*scale + translate_x, y*scale + translate_y)`.
///
/// Recomputed fresh on every layout, resize, or dataset change and
/// replaced wholesale — never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineFit {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl AffineFit {
    /// Apply the transform to one coordinate.
    #[inline]
    pub fn apply(&self, coord: Coord<f64>) -> (f64, f64) {
        (
            coord.x * self.scale + self.translate_x,
            coord.y * self.scale + self.translate_y,
        )
    }

    /// Adapter for path-building code that wants a projection closure.
    pub fn projection(&self) -> impl Fn(&Coord<f64>) -> (f64, f64) + '_ {
        move |coord| self.apply(*coord)
    }
}

/// Compute the transform fitting `collection`'s bounding box into
/// `viewport`, preserving aspect ratio.
///
/// The box's vertical extremes are read top-for-bottom because the
/// source coordinate space is y-up while pixel space is y-down; dropping
/// that swap mirrors the rendered map vertically. The proportionally
/// longer axis of the box constrains the scale, so the whole box always
/// fits; with `center` the slack on the other axis is split evenly,
/// otherwise the box's top-left corner pins to the viewport origin.
///
/// A zero-extent axis never divides: the other axis constrains, and a
/// single-point box keeps the reset scale of `1.0`. An empty collection
/// is a caller error.
pub fn fit_projection(
    collection: &FeatureCollection,
    viewport: &Viewport,
    center: bool,
) -> Result<AffineFit> {
    let rect = collection.bounds()
        .ok_or_else(|| anyhow!("[fit_projection] empty feature collection"))?;

    let (left, right) = (rect.min().x, rect.max().x);
    // y-up source vs. y-down pixels: min y becomes the box top.
    let (top, bottom) = (rect.min().y, rect.max().y);
    let box_width = right - left;
    let box_height = bottom - top;

    let scale = if box_width == 0.0 && box_height == 0.0 {
        1.0
    } else {
        // A flat axis makes the box's aspect ratio infinite (or zero),
        // which always hands the constraint to the other axis.
        let width_constrained = if box_height == 0.0 {
            true
        } else if box_width == 0.0 {
            false
        } else {
            box_width / box_height > viewport.width / viewport.height
        };
        if width_constrained {
            viewport.width / box_width
        } else {
            viewport.height / box_height
        }
    };

    let mut translate_x = viewport.x - left * scale;
    let mut translate_y = viewport.y - top * scale;
    if center {
        translate_x -= (translate_x + right * scale - viewport.max_x()) / 2.0;
        translate_y -= (translate_y + bottom * scale - viewport.max_y()) / 2.0;
    }

    let fit = AffineFit { scale, translate_x, translate_y };
    log::debug!(
        "fit {} features into {:.0}x{:.0}: scale {:.4}, translate ({:.2}, {:.2})",
        collection.len(), viewport.width, viewport.height,
        fit.scale, fit.translate_x, fit.translate_y,
    );
    Ok(fit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::collection::tests::rect_feature;
    use geo::{polygon, MultiPolygon};

    const EPS: f64 = 1e-12;

    fn single(x0: f64, y0: f64, x1: f64, y1: f64) -> FeatureCollection {
        FeatureCollection::new(vec![rect_feature(x0, y0, x1, y1)])
    }

    #[test]
    fn wide_box_into_square_viewport() {
        // The concrete scenario: 10x5 box, 100x100 viewport.
        let fc = single(0.0, 0.0, 10.0, 5.0);
        let viewport = Viewport::sized(100.0, 100.0);

        let fit = fit_projection(&fc, &viewport, false).unwrap();
        assert!((fit.scale - 10.0).abs() < EPS);
        assert!(fit.translate_x.abs() < EPS);
        assert!(fit.translate_y.abs() < EPS);

        let centered = fit_projection(&fc, &viewport, true).unwrap();
        assert!((centered.scale - 10.0).abs() < EPS);
        assert!(centered.translate_x.abs() < EPS);
        assert!((centered.translate_y - 25.0).abs() < EPS);
    }

    #[test]
    fn matching_aspect_constrains_both_ways_identically() {
        let fc = single(0.0, 0.0, 10.0, 10.0);
        let viewport = Viewport::sized(100.0, 100.0);
        let fit = fit_projection(&fc, &viewport, false).unwrap();
        assert!((fit.scale - viewport.width / 10.0).abs() < EPS);
        assert!((fit.scale - viewport.height / 10.0).abs() < EPS);
    }

    #[test]
    fn centering_splits_slack_evenly() {
        let fc = single(2.0, 3.0, 12.0, 8.0); // 10x5 box, offset origin
        let viewport = Viewport { x: 10.0, y: 20.0, width: 100.0, height: 100.0 };
        let fit = fit_projection(&fc, &viewport, true).unwrap();

        let (_, fitted_top) = fit.apply(geo::Coord { x: 2.0, y: 3.0 });
        let (_, fitted_bottom) = fit.apply(geo::Coord { x: 2.0, y: 8.0 });
        let margin_top = fitted_top - viewport.y;
        let margin_bottom = viewport.y + viewport.height - fitted_bottom;
        assert!((margin_top - margin_bottom).abs() < EPS);

        // Constrained axis has no slack.
        let (fitted_left, _) = fit.apply(geo::Coord { x: 2.0, y: 3.0 });
        let (fitted_right, _) = fit.apply(geo::Coord { x: 12.0, y: 3.0 });
        assert!((fitted_left - viewport.x).abs() < EPS);
        assert!((fitted_right - (viewport.x + viewport.width)).abs() < EPS);
    }

    #[test]
    fn tall_box_is_height_constrained() {
        let fc = single(0.0, 0.0, 5.0, 50.0);
        let fit = fit_projection(&fc, &Viewport::sized(100.0, 100.0), false).unwrap();
        assert!((fit.scale - 2.0).abs() < EPS);
    }

    #[test]
    fn flat_box_does_not_divide_by_zero() {
        // Horizontal segment: zero height, width must constrain.
        let flat = FeatureCollection::new(vec![MultiPolygon(vec![polygon![
            (x: 0.0, y: 1.0),
            (x: 4.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ]])]);
        let fit = fit_projection(&flat, &Viewport::sized(100.0, 100.0), false).unwrap();
        assert!((fit.scale - 25.0).abs() < EPS);

        // Vertical segment: zero width, height must constrain.
        let tall = FeatureCollection::new(vec![MultiPolygon(vec![polygon![
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 4.0),
            (x: 1.0, y: 0.0),
        ]])]);
        let fit = fit_projection(&tall, &Viewport::sized(100.0, 100.0), false).unwrap();
        assert!((fit.scale - 25.0).abs() < EPS);
    }

    #[test]
    fn point_box_keeps_reset_scale() {
        let point = FeatureCollection::new(vec![MultiPolygon(vec![polygon![
            (x: 3.0, y: 7.0),
            (x: 3.0, y: 7.0),
            (x: 3.0, y: 7.0),
        ]])]);
        let fit = fit_projection(&point, &Viewport::sized(100.0, 100.0), false).unwrap();
        assert_eq!(fit.scale, 1.0);
        assert!((fit.translate_x + 3.0).abs() < EPS);
        assert!((fit.translate_y + 7.0).abs() < EPS);
    }

    #[test]
    fn empty_collection_is_an_error() {
        let empty = FeatureCollection::new(vec![]);
        assert!(fit_projection(&empty, &Viewport::sized(10.0, 10.0), true).is_err());
    }

    #[test]
    fn apply_matches_affine_definition() {
        let fit = AffineFit { scale: 2.0, translate_x: 1.0, translate_y: -1.0 };
        assert_eq!(fit.apply(geo::Coord { x: 3.0, y: 4.0 }), (7.0, 7.0));
        let project = fit.projection();
        assert_eq!(project(&geo::Coord { x: 0.0, y: 0.0 }), (1.0, -1.0));
    }
}
