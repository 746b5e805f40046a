#![doc = "Numeric and geometric core for animated choropleth dashboards"]
mod dates;
mod geom;
mod stats;

#[doc(inline)]
pub use dates::DateSequence;

#[doc(inline)]
pub use stats::{
    area_average, exponential_fit, exponential_fit_error, growth_rate, linear_fit,
    period_average, GrowthRate,
};

#[doc(inline)]
pub use geom::{
    check_vertex_counts, fit_projection, plan_transition, AffineFit, FeatureCollection,
    Transition, VertexMismatch, VertexReport, Viewport,
};
