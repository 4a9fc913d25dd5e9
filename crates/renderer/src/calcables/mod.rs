pub mod category_aggregator;

pub use category_aggregator::{aggregate, category_color};
