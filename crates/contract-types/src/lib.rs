pub mod types;

pub use types::{Annotation, AnnotationChoice, AnnotationSet, Document, Finding, FindingKind};
