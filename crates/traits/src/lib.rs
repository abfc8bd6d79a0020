pub mod measure;
pub mod resource;

pub use measure::{MonospaceMeasure, TextMeasure};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
