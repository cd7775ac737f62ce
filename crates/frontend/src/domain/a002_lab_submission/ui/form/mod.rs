//! Lab Submission Form UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (orders, dropdown lists, submission)
//! - loader.rs: one-shot concurrent load of everything the form needs
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos components (pure UI)

mod loader;
mod model;
mod view;
mod view_model;

pub use loader::{
    load_form_data, HttpLabFormSource, LabFormSource, LabSubmissionSink, LoadedFormData,
};
pub use view::LabSubmissionDrawer;
pub use view_model::{FormLoadState, LabSubmissionVm, SubmitStatus};
