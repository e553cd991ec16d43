/// Arrow schema definitions for responsiveness matrix exports.
pub mod responsiveness {
    use std::sync::Arc;

    use arrow::array::{StringArray, UInt32Array, UInt64Array};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::error::ArrowError;
    use arrow::record_batch::RecordBatch;

    use crate::{MatrixRow, MatrixSummary};

    /// Schema for one row per extracted EIR clause.
    pub fn matrix_row_schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Utf8, false),
            Field::new("eir_category", DataType::Utf8, false),
            Field::new("requirement", DataType::Utf8, false),
            Field::new("bep_section_ref", DataType::Utf8, false),
            Field::new("bep_section_number", DataType::UInt32, false),
            Field::new("status", DataType::Utf8, false),
        ])
    }

    /// Schema for the single-row matrix summary.
    pub fn summary_schema() -> Schema {
        Schema::new(vec![
            Field::new("total", DataType::UInt64, false),
            Field::new("addressed", DataType::UInt64, false),
            Field::new("partial", DataType::UInt64, false),
            Field::new("not_addressed", DataType::UInt64, false),
            Field::new("percent_addressed", DataType::UInt32, false),
        ])
    }

    /// Convert matrix rows into a RecordBatch matching [`matrix_row_schema`].
    pub fn rows_to_batch(rows: &[MatrixRow]) -> Result<RecordBatch, ArrowError> {
        let ids = StringArray::from_iter_values(rows.iter().map(|r| r.id.as_str()));
        let categories = StringArray::from_iter_values(rows.iter().map(|r| r.eir_category.as_str()));
        let requirements = StringArray::from_iter_values(rows.iter().map(|r| r.requirement.as_str()));
        let section_refs =
            StringArray::from_iter_values(rows.iter().map(|r| r.bep_section_ref.as_str()));
        let section_numbers = UInt32Array::from_iter_values(rows.iter().map(|r| r.bep_section_number));
        let statuses = StringArray::from_iter_values(rows.iter().map(|r| r.status.as_str()));

        RecordBatch::try_new(
            Arc::new(matrix_row_schema()),
            vec![
                Arc::new(ids),
                Arc::new(categories),
                Arc::new(requirements),
                Arc::new(section_refs),
                Arc::new(section_numbers),
                Arc::new(statuses),
            ],
        )
    }

    /// Convert a summary into a one-row RecordBatch matching [`summary_schema`].
    pub fn summary_to_batch(summary: &MatrixSummary) -> Result<RecordBatch, ArrowError> {
        let count = |n: usize| UInt64Array::from(vec![n as u64]);

        RecordBatch::try_new(
            Arc::new(summary_schema()),
            vec![
                Arc::new(count(summary.total)),
                Arc::new(count(summary.addressed)),
                Arc::new(count(summary.partial)),
                Arc::new(count(summary.not_addressed)),
                Arc::new(UInt32Array::from(vec![summary.percent_addressed])),
            ],
        )
    }
}
