mod check;
mod collection;
mod fit;
mod transition;

pub use check::{check_vertex_counts, VertexMismatch, VertexReport};
pub use collection::FeatureCollection;
pub use fit::{fit_projection, AffineFit, Viewport};
pub use transition::{plan_transition, Transition};
