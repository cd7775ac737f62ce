use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed option-list categories shown on the lab order form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DropdownCategory {
    SpecimenType,
    SpecimenTypeSnomedCode,
    SourceDescription,
    SpecimenSource,
    SourceSnomedCode,
    District,
    PhysicianNpi,
    CollectionDate,
    CollectionTime,
    TestLocation,
    Race,
    Ethnicity,
    EntryNumber,
    Env,
    ExtractFlag,
}

impl DropdownCategory {
    /// All categories in render order
    pub const ALL: [DropdownCategory; 15] = [
        DropdownCategory::SpecimenType,
        DropdownCategory::SpecimenTypeSnomedCode,
        DropdownCategory::SourceDescription,
        DropdownCategory::SpecimenSource,
        DropdownCategory::SourceSnomedCode,
        DropdownCategory::District,
        DropdownCategory::PhysicianNpi,
        DropdownCategory::CollectionDate,
        DropdownCategory::CollectionTime,
        DropdownCategory::TestLocation,
        DropdownCategory::Race,
        DropdownCategory::Ethnicity,
        DropdownCategory::EntryNumber,
        DropdownCategory::Env,
        DropdownCategory::ExtractFlag,
    ];

    /// Key sent to the dropdown-data endpoint
    pub fn key(&self) -> &'static str {
        match self {
            DropdownCategory::SpecimenType => "SPECIMEN_TYPE",
            DropdownCategory::SpecimenTypeSnomedCode => "SPECIMEN_TYPE_SNOMED_CODE",
            DropdownCategory::SourceDescription => "SOURCE_DESCRIPTION",
            DropdownCategory::SpecimenSource => "SPECIMEN_SOURCE",
            DropdownCategory::SourceSnomedCode => "SOURCE_SNOMED_CODE",
            DropdownCategory::District => "DISTRICT",
            DropdownCategory::PhysicianNpi => "PHYSICIAN_NPI",
            DropdownCategory::CollectionDate => "COLLECTION_DATE",
            DropdownCategory::CollectionTime => "COLLECTION_TIME",
            DropdownCategory::TestLocation => "TEST_LOCATION",
            DropdownCategory::Race => "RACE",
            DropdownCategory::Ethnicity => "ETHNICITY",
            DropdownCategory::EntryNumber => "ENTRY_NUMBER",
            DropdownCategory::Env => "ENV",
            DropdownCategory::ExtractFlag => "EXTRACT_FLAG",
        }
    }

    /// Human-readable label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            DropdownCategory::SpecimenType => "Specimen Type",
            DropdownCategory::SpecimenTypeSnomedCode => "Specimen Type SNOMED Code",
            DropdownCategory::SourceDescription => "Source Description",
            DropdownCategory::SpecimenSource => "Specimen Source",
            DropdownCategory::SourceSnomedCode => "Source SNOMED Code",
            DropdownCategory::District => "District",
            DropdownCategory::PhysicianNpi => "Physician NPI",
            DropdownCategory::CollectionDate => "Collection Date",
            DropdownCategory::CollectionTime => "Collection Time",
            DropdownCategory::TestLocation => "Test Location",
            DropdownCategory::Race => "Race",
            DropdownCategory::Ethnicity => "Ethnicity",
            DropdownCategory::EntryNumber => "Entry Number",
            DropdownCategory::Env => "ENV",
            DropdownCategory::ExtractFlag => "Extract Flag",
        }
    }

    /// Parse from the endpoint key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for DropdownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
