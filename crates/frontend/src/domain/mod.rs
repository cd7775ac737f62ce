pub mod a002_lab_submission;
