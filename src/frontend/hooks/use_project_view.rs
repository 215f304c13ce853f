use leptos::prelude::*;
use portfolio::view::ProjectView;

/// Return type for use_project_view hook
pub struct UseProjectViewReturn {
    pub view: ReadSignal<ProjectView>,
    pub on_toggle_sort: Callback<()>,
    pub on_filter_change: Callback<String>,
    pub on_page_select: Callback<usize>,
}

/// Hook holding the sort, filter and page state of the projects screen
///
/// # Example
/// ```rust
/// let project_view = use_project_view();
///
/// view! {
///     <PageButtons
///         current=slice.page
///         pages=slice.pages()
///         on_select=project_view.on_page_select
///     />
/// }
/// ```
pub fn use_project_view() -> UseProjectViewReturn {
    let (view, set_view) = signal(ProjectView::new());

    let on_toggle_sort = Callback::new(move |_| {
        set_view.update(|v| v.toggle_sort());
    });

    // Changing the language always returns to the first page
    let on_filter_change = Callback::new(move |code: String| {
        set_view.update(|v| {
            if code.is_empty() {
                v.clear_filter();
            } else {
                v.set_filter(&code);
            }
        });
    });

    let on_page_select = Callback::new(move |page: usize| {
        set_view.update(|v| v.go_to_page(page));
    });

    UseProjectViewReturn {
        view,
        on_toggle_sort,
        on_filter_change,
        on_page_select,
    }
}
