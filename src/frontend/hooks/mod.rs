//! Reusable hooks for common UI patterns

mod use_project_view;

pub use use_project_view::*;
