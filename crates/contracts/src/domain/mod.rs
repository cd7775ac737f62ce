pub mod a001_lab_order;
pub mod a002_lab_submission;
