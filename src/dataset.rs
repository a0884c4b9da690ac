//! In-memory inputs of a DGE job: counts, annotations, grouping, design and contrast

/// Count matrix with feature and sample annotation
pub mod expression;
/// Plain string tables for feature and sample annotation
pub mod annotation;
/// Sample grouping factor
pub mod groups;
/// Numeric matrices with optional row labels (design, contrast)
pub mod matrix;
/// Load datasets and matrices from tab-delimited files
pub mod read;

pub use annotation::AnnotationTable;
pub use expression::ExpressionDataset;
pub use groups::SampleGroups;
pub use matrix::LabeledMatrix;
