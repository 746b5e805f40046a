use geo::{Area, BoundingRect, Centroid, Coord, LineString, MultiPolygon, Point, Rect};

/// FeatureCollection is an ordered set of district geometries, one
/// MultiPolygon per district, in a planar coordinate space.
///
/// Order is significant: feature `i` here must be the same district as
/// feature `i` in any companion collection (e.g. the cartogram form),
/// which is what makes index-wise transitions and the vertex-count
/// diagnostic meaningful.
#[derive(Debug, Clone)]
pub struct FeatureCollection {
    shapes: Vec<MultiPolygon<f64>>,
}

impl FeatureCollection {
    /// Construct a FeatureCollection from a vector of MultiPolygons.
    pub fn new(shapes: Vec<MultiPolygon<f64>>) -> Self {
        Self { shapes }
    }

    /// Get the number of features.
    #[inline] pub fn len(&self) -> usize { self.shapes.len() }

    /// Check if there are no features.
    #[inline] pub fn is_empty(&self) -> bool { self.shapes.is_empty() }

    /// Get a reference to the list of MultiPolygons.
    #[inline] pub fn shapes(&self) -> &[MultiPolygon<f64>] { &self.shapes }

    /// Iterate over the features in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &MultiPolygon<f64>> {
        self.shapes.iter()
    }

    /// Exterior ring of the first polygon of feature `i` — the ring the
    /// renderer animates and the vertex diagnostic compares.
    pub fn outer_ring(&self, i: usize) -> Option<&LineString<f64>> {
        self.shapes.get(i)
            .and_then(|shape| shape.0.first())
            .map(|polygon| polygon.exterior())
    }

    /// Compute the bounding rectangle of all features.
    #[inline]
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.shapes.iter()
            .filter_map(|polygon| polygon.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord {
                    x: a.min().x.min(b.min().x),
                    y: a.min().y.min(b.min().y),
                },
                Coord {
                    x: a.max().x.max(b.max().x),
                    y: a.max().y.max(b.max().y),
                }
            ))
    }

    /// Signed areas of all features, in order. Cartogram authoring uses
    /// these to compare rendered area against the data variable.
    #[inline]
    pub fn areas(&self) -> Vec<f64> {
        self.shapes.iter()
            .map(|polygon| polygon.signed_area())
            .collect()
    }

    /// Compute the centroids of all features.
    #[inline]
    pub fn centroids(&self) -> Vec<Point<f64>> {
        self.shapes.iter()
            .map(|polygon| polygon.centroid()
                .unwrap_or(Point::new(f64::NAN, f64::NAN)))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use geo::polygon;

    /// Rectangle feature spanning (x0,y0)..(x1,y1).
    pub(crate) fn rect_feature(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x0, y: y0),
            (x: x1, y: y0),
            (x: x1, y: y1),
            (x: x0, y: y1),
            (x: x0, y: y0),
        ]])
    }

    #[test]
    fn bounds_cover_all_features() {
        let fc = FeatureCollection::new(vec![
            rect_feature(0.0, 0.0, 2.0, 1.0),
            rect_feature(5.0, -3.0, 6.0, 4.0),
        ]);
        let bounds = fc.bounds().unwrap();
        assert_eq!(bounds.min(), Coord { x: 0.0, y: -3.0 });
        assert_eq!(bounds.max(), Coord { x: 6.0, y: 4.0 });
    }

    #[test]
    fn bounds_of_empty_collection() {
        assert!(FeatureCollection::new(vec![]).bounds().is_none());
    }

    #[test]
    fn outer_ring_vertex_count() {
        let fc = FeatureCollection::new(vec![rect_feature(0.0, 0.0, 1.0, 1.0)]);
        assert_eq!(fc.outer_ring(0).unwrap().0.len(), 5);
        assert!(fc.outer_ring(1).is_none());
    }

    #[test]
    fn areas_and_centroids() {
        let fc = FeatureCollection::new(vec![rect_feature(0.0, 0.0, 2.0, 2.0)]);
        assert!((fc.areas()[0].abs() - 4.0).abs() < 1e-12);
        let centroid = fc.centroids()[0];
        assert!((centroid.x() - 1.0).abs() < 1e-12);
        assert!((centroid.y() - 1.0).abs() < 1e-12);
    }
}
