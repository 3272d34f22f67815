use crate::errors::FeatureError;
use crate::features::{FeatureId, FeatureValue, FeatureVector};

/// Common surface of the base and extension feature tiers.
pub trait FeatureSet {
    /// Features this set declares, in declaration order.
    fn declared_features(&self) -> Vec<FeatureId>;

    /// Read one feature, computing it (and its dependencies) on first access.
    fn evaluate(&self, feature: FeatureId) -> Result<FeatureValue, FeatureError>;

    /// Whether `feature` has already been computed and cached.
    fn is_computed(&self, feature: FeatureId) -> bool;

    /// Evaluate every declared feature into a flat vector.
    ///
    /// A failing feature is recorded in the vector and does not stop the
    /// evaluation of the others.
    fn to_vector(&self) -> FeatureVector {
        let mut vector = FeatureVector::new();
        for feature in self.declared_features() {
            vector.push(feature, self.evaluate(feature));
        }
        vector
    }
}
