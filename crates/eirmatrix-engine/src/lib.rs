//! EIR responsiveness engine: clause extraction, coverage classification,
//! matrix assembly, and summaries.

pub mod builder;
pub mod classifier;
pub mod extract;
pub mod summary;

pub use builder::{MatrixBuilder, build_eir_matrix};
pub use classifier::{ThinnessPolicy, determine_status, has_content, is_thin};
pub use extract::{ClauseShape, ShapeMismatch, extract_clauses};
pub use summary::{group_by_category, summarise_matrix};
