pub mod dropdown_options;

pub use dropdown_options::{DropdownOptionSet, FetchPolicy, OptionListState};
