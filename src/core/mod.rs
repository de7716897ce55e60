//! Core-Domain: Feature-Datensätze, Feature-Liste und Zahlen-Parsing.

mod feature;
mod feature_list;
pub mod numeric;

pub use feature::{FeatureFormData, FeatureId, FeatureRecord, FeatureUpdate};
pub use feature_list::FeatureList;
pub use numeric::{format_float, parse_float_prefix};
