//! UI Components
//!
//! Reusable Leptos components.

mod json_input_form;
mod filter_select;
mod response_view;

pub use json_input_form::JsonInputForm;
pub use filter_select::FilterSelect;
pub use response_view::ResponseView;
