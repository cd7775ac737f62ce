use crate::enums::dropdown_category::DropdownCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Patient text fields
// ============================================================================

/// Free-text patient fields on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatientField {
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    AddressLine1,
    AddressLine2,
    Zip,
    Email,
    PhoneNumber,
}

impl PatientField {
    /// Render order
    pub const ALL: [PatientField; 9] = [
        PatientField::FirstName,
        PatientField::MiddleName,
        PatientField::LastName,
        PatientField::DateOfBirth,
        PatientField::AddressLine1,
        PatientField::AddressLine2,
        PatientField::Zip,
        PatientField::Email,
        PatientField::PhoneNumber,
    ];

    /// JSON key, also used as the DOM id
    pub fn key(&self) -> &'static str {
        match self {
            PatientField::FirstName => "patientFirstName",
            PatientField::MiddleName => "patientMiddleName",
            PatientField::LastName => "patientLastName",
            PatientField::DateOfBirth => "dob",
            PatientField::AddressLine1 => "addressLine1",
            PatientField::AddressLine2 => "addressLine2",
            PatientField::Zip => "zip",
            PatientField::Email => "email",
            PatientField::PhoneNumber => "phoneNumber",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PatientField::FirstName => "Patient First Name",
            PatientField::MiddleName => "Patient Middle Name",
            PatientField::LastName => "Patient Last Name",
            PatientField::DateOfBirth => "Date of Birth (DOB)",
            PatientField::AddressLine1 => "Address Line 1",
            PatientField::AddressLine2 => "Address Line 2",
            PatientField::Zip => "ZIP Code",
            PatientField::Email => "Email",
            PatientField::PhoneNumber => "Phone Number",
        }
    }

    /// HTML input type hint
    pub fn input_type(&self) -> &'static str {
        match self {
            PatientField::Email => "email",
            PatientField::PhoneNumber => "tel",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientFields {
    pub patient_first_name: String,
    pub patient_middle_name: String,
    pub patient_last_name: String,
    pub dob: String,
    pub address_line1: String,
    pub address_line2: String,
    pub zip: String,
    pub email: String,
    pub phone_number: String,
}

impl PatientFields {
    pub fn get(&self, field: PatientField) -> &str {
        match field {
            PatientField::FirstName => &self.patient_first_name,
            PatientField::MiddleName => &self.patient_middle_name,
            PatientField::LastName => &self.patient_last_name,
            PatientField::DateOfBirth => &self.dob,
            PatientField::AddressLine1 => &self.address_line1,
            PatientField::AddressLine2 => &self.address_line2,
            PatientField::Zip => &self.zip,
            PatientField::Email => &self.email,
            PatientField::PhoneNumber => &self.phone_number,
        }
    }

    fn slot_mut(&mut self, field: PatientField) -> &mut String {
        match field {
            PatientField::FirstName => &mut self.patient_first_name,
            PatientField::MiddleName => &mut self.patient_middle_name,
            PatientField::LastName => &mut self.patient_last_name,
            PatientField::DateOfBirth => &mut self.dob,
            PatientField::AddressLine1 => &mut self.address_line1,
            PatientField::AddressLine2 => &mut self.address_line2,
            PatientField::Zip => &mut self.zip,
            PatientField::Email => &mut self.email,
            PatientField::PhoneNumber => &mut self.phone_number,
        }
    }

    /// Overwrite one field, leaving the rest untouched
    pub fn set(&mut self, field: PatientField, value: String) {
        *self.slot_mut(field) = value;
    }
}

// ============================================================================
// Form state
// ============================================================================

/// Editable state of the lab order form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabSubmissionForm {
    order_code: String,
    patient: PatientFields,
    selections: BTreeMap<DropdownCategory, String>,
}

impl LabSubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_code(&self) -> &str {
        &self.order_code
    }

    pub fn has_order(&self) -> bool {
        !self.order_code.is_empty()
    }

    pub fn select_order(&mut self, order_code: String) {
        self.order_code = order_code;
    }

    pub fn patient(&self) -> &PatientFields {
        &self.patient
    }

    pub fn patient_field(&self, field: PatientField) -> &str {
        self.patient.get(field)
    }

    pub fn set_patient_field(&mut self, field: PatientField, value: String) {
        self.patient.set(field, value);
    }

    /// Empty string when nothing is chosen
    pub fn selection(&self, category: DropdownCategory) -> &str {
        self.selections
            .get(&category)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// An empty value clears the selection
    pub fn select_option(&mut self, category: DropdownCategory, value: String) {
        if value.is_empty() {
            self.selections.remove(&category);
        } else {
            self.selections.insert(category, value);
        }
    }

    /// Clear order, patient fields and every dropdown selection
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Atomic snapshot for the record-creation endpoint
    pub fn to_dto(&self) -> LabSubmissionDto {
        LabSubmissionDto {
            order_code: self.order_code.clone(),
            patient: self.patient.clone(),
            selections: self.selections.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Record sent on "Add"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabSubmissionDto {
    pub order_code: String,
    #[serde(flatten)]
    pub patient: PatientFields,
    pub selections: BTreeMap<DropdownCategory, String>,
}
