use serde::Serialize;

use super::FeatureCollection;

/// One feature whose outer-ring vertex counts disagree between the base
/// and cartogram forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexMismatch {
    pub feature: usize,
    pub expected: usize, // vertex count in the base collection
    pub actual: usize,   // vertex count in the cartogram collection
}

/// Result of a vertex-count audit between two geometric forms of the
/// same districts. Purely diagnostic: nothing is corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VertexReport {
    pub base_features: usize,
    pub cartogram_features: usize,
    pub mismatches: Vec<VertexMismatch>,
}

impl VertexReport {
    /// True when the collections can be tweened index-wise: equal
    /// feature counts and no vertex mismatches.
    pub fn is_consistent(&self) -> bool {
        self.base_features == self.cartogram_features && self.mismatches.is_empty()
    }
}

/// Audit two collections meant to represent the same districts (true
/// shape vs. cartogram) for the correspondence the transition tween
/// needs: equal feature counts, and per feature pair, equal vertex
/// counts in the outer ring.
///
/// Mismatched authoring is common in the cartogram pipeline, so every
/// mismatch is reported with its feature index. A feature missing its
/// outer ring entirely counts as zero vertices.
pub fn check_vertex_counts(
    base: &FeatureCollection,
    cartogram: &FeatureCollection,
) -> VertexReport {
    if base.len() != cartogram.len() {
        log::warn!(
            "feature counts differ: {} base vs {} cartogram",
            base.len(),
            cartogram.len(),
        );
    }

    let mut mismatches = Vec::new();
    for feature in 0..base.len().min(cartogram.len()) {
        let expected = base.outer_ring(feature).map_or(0, |ring| ring.0.len());
        let actual = cartogram.outer_ring(feature).map_or(0, |ring| ring.0.len());
        if expected != actual {
            log::warn!("feature {feature}: {expected} vs {actual} vertices");
            mismatches.push(VertexMismatch { feature, expected, actual });
        }
    }

    if mismatches.is_empty() && base.len() == cartogram.len() {
        log::debug!("vertex counts consistent across {} features", base.len());
    }

    VertexReport {
        base_features: base.len(),
        cartogram_features: cartogram.len(),
        mismatches,
    }
}
