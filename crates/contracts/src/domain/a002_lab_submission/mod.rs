pub mod aggregate;

pub use aggregate::{LabSubmissionDto, LabSubmissionForm, PatientField, PatientFields};
