//! The fixed mapping from EIR analysis topics to BEP sections and fields.
//!
//! Each [`CategoryDefinition`] names where a topic lives in the analysis
//! document, how its raw value turns into clauses, and which BEP form fields
//! are taken to respond to it. The table is the single source of truth for
//! that mapping; its rows are independent of each other.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sort_key::section_ref;

/// How a raw analysis value becomes clause strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionType {
    /// Plain string, boolean, or number.
    Scalar,
    /// List of strings.
    StringArray,
    /// Flat object whose entries each become a clause.
    Object,
    /// List of objects labelled by phase, role, or name.
    ObjectArray,
}

impl ExtractionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::StringArray => "string-array",
            Self::Object => "object",
            Self::ObjectArray => "object-array",
        }
    }
}

impl fmt::Display for ExtractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numbered BEP section, used for display and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BepSection {
    pub number: u32,
    pub title: &'static str,
}

/// One EIR topic and the BEP section/fields that answer it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryDefinition {
    pub eir_category: &'static str,
    /// Dot-separated path into the analysis document.
    pub eir_path: &'static str,
    pub extraction: ExtractionType,
    pub bep_section: BepSection,
    /// Form fields considered to cover this topic, in priority order.
    pub bep_fields: &'static [&'static str],
}

impl CategoryDefinition {
    /// Display reference for the section, e.g. `§4 BIM Goals & Uses`.
    pub fn section_ref(&self) -> String {
        section_ref(self.bep_section.number, self.bep_section.title)
    }
}

// ── BEP sections ──

const PROJECT_INFO: BepSection = BepSection {
    number: 1,
    title: "BEP Type & Project Info",
};
const STAKEHOLDERS: BepSection = BepSection {
    number: 3,
    title: "Stakeholders & Roles",
};
const BIM_GOALS: BepSection = BepSection {
    number: 4,
    title: "BIM Goals & Uses",
};
const INFORMATION_NEED: BepSection = BepSection {
    number: 5,
    title: "Level of Information Need",
};
const DELIVERY_PLANNING: BepSection = BepSection {
    number: 6,
    title: "Information Delivery Planning",
};
const CDE: BepSection = BepSection {
    number: 7,
    title: "Common Data Environment",
};
const TECHNOLOGY: BepSection = BepSection {
    number: 8,
    title: "Technology Requirements",
};
const INFORMATION_PRODUCTION: BepSection = BepSection {
    number: 9,
    title: "Information Production",
};
const QUALITY: BepSection = BepSection {
    number: 10,
    title: "Quality Assurance",
};
const COORDINATION_RISK: BepSection = BepSection {
    number: 13,
    title: "Coordination & Risk",
};
const APPENDICES: BepSection = BepSection {
    number: 14,
    title: "Appendices",
};

/// Every EIR topic the matrix reports on, in build order.
pub const CATEGORY_DEFINITIONS: &[CategoryDefinition] = &[
    CategoryDefinition {
        eir_category: "Project Information",
        eir_path: "project_info",
        extraction: ExtractionType::Object,
        bep_section: PROJECT_INFO,
        bep_fields: &[
            "projectName",
            "appointingParty",
            "projectType",
            "projectDescription",
        ],
    },
    CategoryDefinition {
        eir_category: "BIM Objectives",
        eir_path: "bim_objectives",
        extraction: ExtractionType::StringArray,
        bep_section: BIM_GOALS,
        bep_fields: &[
            "bimGoals",
            "bimObjectives",
            "bimUses",
            "primaryObjectives",
            "projectObjectives",
        ],
    },
    CategoryDefinition {
        eir_category: "Information Requirements — OIR",
        eir_path: "information_requirements.OIR",
        extraction: ExtractionType::StringArray,
        bep_section: INFORMATION_NEED,
        bep_fields: &["informationPurposes"],
    },
    CategoryDefinition {
        eir_category: "Information Requirements — PIR",
        eir_path: "information_requirements.PIR",
        extraction: ExtractionType::StringArray,
        bep_section: INFORMATION_NEED,
        bep_fields: &["projectInformationRequirements", "informationPurposes"],
    },
    CategoryDefinition {
        eir_category: "Information Requirements — AIR",
        eir_path: "information_requirements.AIR",
        extraction: ExtractionType::StringArray,
        bep_section: INFORMATION_NEED,
        bep_fields: &["assetInformationRequirements"],
    },
    CategoryDefinition {
        eir_category: "Information Requirements — EIR Specifics",
        eir_path: "information_requirements.EIR_specifics",
        extraction: ExtractionType::StringArray,
        bep_section: INFORMATION_NEED,
        bep_fields: &["informationPurposes", "projectInformationRequirements"],
    },
    CategoryDefinition {
        eir_category: "Delivery Milestones",
        eir_path: "delivery_milestones",
        extraction: ExtractionType::ObjectArray,
        bep_section: DELIVERY_PLANNING,
        bep_fields: &["keyMilestones"],
    },
    CategoryDefinition {
        eir_category: "LOD / LOI Requirements",
        eir_path: "standards_protocols.lod_loi_requirements",
        extraction: ExtractionType::Scalar,
        bep_section: INFORMATION_NEED,
        bep_fields: &[
            "lodRequirements",
            "loiRequirements",
            "levelOfInformation",
            "informationLevels",
        ],
    },
    CategoryDefinition {
        eir_category: "Classification Systems",
        eir_path: "standards_protocols.classification_systems",
        extraction: ExtractionType::StringArray,
        bep_section: INFORMATION_PRODUCTION,
        bep_fields: &["classificationSystems"],
    },
    CategoryDefinition {
        eir_category: "Naming Conventions",
        eir_path: "standards_protocols.naming_conventions",
        extraction: ExtractionType::Scalar,
        bep_section: INFORMATION_PRODUCTION,
        bep_fields: &["namingConventions"],
    },
    CategoryDefinition {
        eir_category: "File Formats",
        eir_path: "standards_protocols.file_formats",
        extraction: ExtractionType::StringArray,
        bep_section: INFORMATION_PRODUCTION,
        bep_fields: &["fileFormats", "informationFormats"],
    },
    CategoryDefinition {
        eir_category: "CDE Requirements",
        eir_path: "cde_requirements",
        extraction: ExtractionType::Object,
        bep_section: CDE,
        bep_fields: &["cdeStrategy", "cdePlatforms", "workflowStates"],
    },
    CategoryDefinition {
        eir_category: "Software Requirements",
        eir_path: "software_requirements",
        extraction: ExtractionType::StringArray,
        bep_section: TECHNOLOGY,
        bep_fields: &["bimSoftware", "softwarePlatforms"],
    },
    CategoryDefinition {
        eir_category: "Quality Requirements",
        eir_path: "quality_requirements",
        extraction: ExtractionType::Object,
        bep_section: QUALITY,
        bep_fields: &["modelValidation", "qualityAssurance"],
    },
    CategoryDefinition {
        eir_category: "Handover & COBie",
        eir_path: "handover_requirements",
        extraction: ExtractionType::Object,
        bep_section: APPENDICES,
        bep_fields: &["cobieRequirements", "handoverRequirements"],
    },
    CategoryDefinition {
        eir_category: "Risks & Specific Requirements",
        eir_path: "specific_risks",
        extraction: ExtractionType::StringArray,
        bep_section: COORDINATION_RISK,
        bep_fields: &["informationRisks"],
    },
    CategoryDefinition {
        eir_category: "Roles & Responsibilities",
        eir_path: "roles_responsibilities",
        extraction: ExtractionType::ObjectArray,
        bep_section: STAKEHOLDERS,
        bep_fields: &["teamStructure", "projectRoles", "responsibilityMatrix"],
    },
];
