pub mod annotation_provider;
pub mod feature_set;

pub use annotation_provider::AnnotationProvider;
pub use feature_set::FeatureSet;
