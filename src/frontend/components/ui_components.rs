use std::ops::RangeInclusive;

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="flex justify-center py-12" role="status">
            <div class="h-10 w-10 animate-spin rounded-full border-4 border-ctp-surface1 border-t-ctp-blue"></div>
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}

/// Go back one entry in the browser history.
#[component]
pub fn BackButton() -> impl IntoView {
    let go_back = move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    };

    view! {
        <button
            on:click=go_back
            class="mb-4 px-4 py-2 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text hover:border-ctp-blue"
        >
            "← Back"
        </button>
    }
}

/// One button per page; the current page's button is disabled.
#[component]
pub fn PageButtons(
    current: usize,
    pages: RangeInclusive<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center gap-2 mt-6">
            {pages
                .map(|page| {
                    view! {
                        <button
                            on:click=move |_| on_select.run(page)
                            disabled={page == current}
                            class="px-3 py-1 bg-ctp-surface0 border border-ctp-surface1 rounded text-ctp-text disabled:opacity-50 disabled:cursor-not-allowed hover:border-ctp-blue"
                        >
                            {page}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
