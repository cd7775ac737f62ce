pub mod dropdown_category;

pub use dropdown_category::DropdownCategory;
