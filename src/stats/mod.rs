mod growth;
mod window;

pub use growth::{exponential_fit, exponential_fit_error, growth_rate, linear_fit, GrowthRate};
pub use window::{area_average, period_average};
