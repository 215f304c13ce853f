//! Client-side view logic for the two portfolio screens.
//!
//! Everything here is pure: the browser and terminal front ends feed fetched
//! data in and render what comes out.

mod filter;
mod pagination;
mod project_view;
mod sort;
mod state;

pub use filter::LanguageFilter;
pub use pagination::{PAGE_SIZE, clamp_page, page_range, total_pages};
pub use project_view::{PageItem, PageSlice, ProjectView, resolve_code_link};
pub use sort::{ParseSortOrderError, SortOrder, sort_projects};
pub use state::LoadState;
