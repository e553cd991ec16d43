//! Core types for the EIR responsiveness matrix: analysis access, BEP form
//! data, the category table, matrix rows, and Arrow export schemas.

pub mod analysis;
pub mod category;
mod error;
pub mod form;
pub mod load;
pub mod matrix;
pub mod schema;
pub mod sort_key;

pub use analysis::{AnalysisEnvelope, is_truthy, json_type_name, resolve_path};
pub use category::{BepSection, CATEGORY_DEFINITIONS, CategoryDefinition, ExtractionType};
pub use error::MatrixError;
pub use form::FormData;
pub use load::{load_analysis, load_form_data};
pub use matrix::{CategoryGroup, CoverageStatus, MatrixRow, MatrixSummary, StatusCounts};
pub use schema::responsiveness;
pub use sort_key::{compare_rows, section_ref, sort_rows};
