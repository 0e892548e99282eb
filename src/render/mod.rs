//! HTML fragment rendering.
//!
//! Fragments are plain strings assembled with `format!`, ready to be
//! embedded into other pages.

pub mod citations;
pub mod markup;
pub mod people;

pub use citations::college_citations;
pub use markup::{accordion, escape_html, remove_control_characters, title_case, AccordionEntry};
pub use people::{center_listing, department_listing, person_card, ProfileLinks};
