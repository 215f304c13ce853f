use std::ops::RangeInclusive;

use serde::Serialize;

use crate::models::{Project, Repo};

use super::filter::LanguageFilter;
use super::pagination::{PAGE_SIZE, clamp_page, page_range, total_pages};
use super::sort::{SortOrder, sort_projects};

/// View state of the projects screen: page, sort order and language filter.
///
/// The fetched records are never stored here; [`ProjectView::page`] derives
/// the visible slice from them on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    page: usize,
    order: SortOrder,
    filter: Option<LanguageFilter>,
}

impl Default for ProjectView {
    fn default() -> Self {
        Self {
            page: 1,
            order: SortOrder::Asc,
            filter: None,
        }
    }
}

/// One card on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageItem {
    pub project: Project,
    /// Draw a separator after this card (all but the last on the page)
    pub separator: bool,
}

/// The derived, ready-to-render page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSlice {
    pub items: Vec<PageItem>,
    /// 1-based page actually shown
    pub page: usize,
    pub total_pages: usize,
    /// Number of projects left after filtering
    pub matched: usize,
}

impl PageSlice {
    /// Nothing matched the filter; show the "none found" message.
    pub fn is_empty(&self) -> bool {
        self.matched == 0
    }

    /// Page numbers for the pagination buttons.
    pub fn pages(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.items.iter().map(|item| &item.project)
    }
}

impl ProjectView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn sort_order(&self) -> SortOrder {
        self.order
    }

    pub fn filter(&self) -> Option<&LanguageFilter> {
        self.filter.as_ref()
    }

    /// Filter code for the dropdown; empty means all languages.
    pub fn filter_code(&self) -> &str {
        self.filter.as_ref().map(LanguageFilter::code).unwrap_or("")
    }

    /// Sorting reorders the whole set; the page number is kept.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggle();
    }

    /// Select a language (blank clears it). Always returns to page 1.
    pub fn set_filter(&mut self, code: &str) {
        self.filter = LanguageFilter::new(code);
        self.page = 1;
    }

    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    /// Jump to a 1-based page. Out-of-range requests are clamped when the
    /// page is derived.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn total_pages(&self, projects: &[Project]) -> usize {
        total_pages(self.matching(projects).count(), PAGE_SIZE)
    }

    fn matching<'a>(&'a self, projects: &'a [Project]) -> impl Iterator<Item = &'a Project> + 'a {
        projects
            .iter()
            .filter(|project| self.filter.as_ref().is_none_or(|filter| filter.matches(project)))
    }

    /// Sort, filter and slice `projects` into the visible page.
    pub fn page(&self, projects: &[Project]) -> PageSlice {
        let mut matched: Vec<Project> = self.matching(projects).cloned().collect();
        sort_projects(&mut matched, self.order);

        let count = matched.len();
        let total = total_pages(count, PAGE_SIZE);
        let page = clamp_page(self.page, total);
        let range = page_range(page, PAGE_SIZE, count);
        let visible = range.len();

        let items = matched
            .drain(range)
            .enumerate()
            .map(|(index, project)| PageItem {
                project,
                separator: index + 1 < visible,
            })
            .collect::<Vec<_>>();

        PageSlice {
            items,
            page,
            total_pages: total,
            matched: count,
        }
    }
}

/// Canonical URL of `repository` among the author's repos, if listed.
///
/// The projects screen uses it as the "view code" link of every card.
pub fn resolve_code_link(repos: &[Repo], repository: &str) -> Option<String> {
    repos
        .iter()
        .find(|repo| repo.name == repository)
        .map(|repo| repo.html_url.clone())
}

#[cfg(test)]
#[path = "project_view_test.rs"]
mod project_view_test;
