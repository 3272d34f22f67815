use crate::annotation::AnnotationBundle;
use crate::errors::AnnotationError;

/// A linguistic annotation backend.
///
/// Receives normalized text (whitespace-collapsed, lower-cased) and returns the
/// complete bundle from a single pass, or fails as a whole. Implementations
/// must be shareable across batch workers; any timeout or cancellation policy
/// belongs to the implementation since this is the only blocking call the
/// feature graph makes.
pub trait AnnotationProvider: Send + Sync {
    fn annotate(&self, text: &str) -> Result<AnnotationBundle, AnnotationError>;

    fn name(&self) -> &'static str;
}
