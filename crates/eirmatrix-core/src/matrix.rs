//! Matrix output types shared between the engine and its consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::MatrixError;

/// How well the BEP currently responds to an EIR category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoverageStatus {
    /// At least one mapped field holds substantial content.
    Addressed,
    /// Mapped fields hold only thin content.
    Partial,
    /// No mapped field holds any content.
    NotAddressed,
}

impl CoverageStatus {
    /// Display order: best coverage first.
    pub const ALL: [CoverageStatus; 3] = [Self::Addressed, Self::Partial, Self::NotAddressed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addressed => "addressed",
            Self::Partial => "partial",
            Self::NotAddressed => "not-addressed",
        }
    }

    /// Human-readable badge text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Addressed => "Addressed",
            Self::Partial => "Partial",
            Self::NotAddressed => "Not Addressed",
        }
    }
}

impl fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoverageStatus {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| MatrixError::UnknownStatus(s.to_string()))
    }
}

/// One extracted EIR clause and its coverage in the BEP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRow {
    /// `row-<n>`, sequential within one build.
    pub id: String,
    pub eir_category: String,
    /// The clause text.
    pub requirement: String,
    /// e.g. `§4 BIM Goals & Uses`
    pub bep_section_ref: String,
    pub bep_section_number: u32,
    pub status: CoverageStatus,
}

/// Per-status row counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub addressed: usize,
    pub partial: usize,
    pub not_addressed: usize,
}

impl StatusCounts {
    pub fn tally<'a>(rows: impl IntoIterator<Item = &'a MatrixRow>) -> Self {
        let mut counts = Self::default();
        for row in rows {
            counts.record(row.status);
        }
        counts
    }

    pub fn record(&mut self, status: CoverageStatus) {
        match status {
            CoverageStatus::Addressed => self.addressed += 1,
            CoverageStatus::Partial => self.partial += 1,
            CoverageStatus::NotAddressed => self.not_addressed += 1,
        }
    }

    pub fn get(&self, status: CoverageStatus) -> usize {
        match status {
            CoverageStatus::Addressed => self.addressed,
            CoverageStatus::Partial => self.partial,
            CoverageStatus::NotAddressed => self.not_addressed,
        }
    }
}

/// Totals and weighted completion for a whole matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    pub total: usize,
    pub addressed: usize,
    pub partial: usize,
    pub not_addressed: usize,
    /// 0..=100, partial rows counting half.
    pub percent_addressed: u32,
}

/// Rows of one EIR category, in matrix order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub eir_category: String,
    pub bep_section_ref: String,
    pub bep_section_number: u32,
    pub rows: Vec<MatrixRow>,
    pub counts: StatusCounts,
}

impl CategoryGroup {
    /// Start an empty group keyed on `first`'s category.
    pub fn for_row(first: &MatrixRow) -> Self {
        Self {
            eir_category: first.eir_category.clone(),
            bep_section_ref: first.bep_section_ref.clone(),
            bep_section_number: first.bep_section_number,
            rows: Vec::new(),
            counts: StatusCounts::default(),
        }
    }

    pub fn push(&mut self, row: MatrixRow) {
        self.counts.record(row.status);
        self.rows.push(row);
    }
}
