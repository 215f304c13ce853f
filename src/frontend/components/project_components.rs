use leptos::prelude::*;
use portfolio::catalog::{Catalog, FilterOption};
use portfolio::format::{display_name, join_languages};
use portfolio::models::Project;
use portfolio::view::SortOrder;

/// One icon per language; languages missing from the catalog get the
/// generic code icon.
#[component]
pub fn LanguageIcons(languages: Vec<String>) -> impl IntoView {
    let catalog = expect_context::<Catalog>();

    view! {
        <div class="flex gap-2 mb-3">
            {languages
                .iter()
                .map(|language| {
                    let icon = catalog.icon_for(language);
                    view! {
                        <span
                            class={format!("icon icon-{} text-xs px-2 py-1 rounded bg-ctp-surface1 text-ctp-subtext1", icon.slug())}
                            title=language.clone()
                        >
                            {icon.glyph()}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// A project on the repository screen.
///
/// `code_link` is the repository's URL and is the same for every card.
#[component]
pub fn ProjectCard(project: Project, code_link: String, separator: bool) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold text-ctp-text mb-2">{display_name(&project.name)}</h3>
            <p class="text-ctp-subtext0 text-sm mb-2">
                <span class="icon icon-code">"</> "</span>
                {join_languages(&project.language)}
            </p>

            <LanguageIcons languages=project.language.clone()/>

            <div class="flex gap-2">
                <a
                    href=code_link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-3 py-1.5 rounded bg-ctp-surface1 text-ctp-text hover:bg-ctp-surface2"
                >
                    "View code"
                </a>
                <a
                    href=project.link.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-3 py-1.5 rounded bg-ctp-surface1 text-ctp-text hover:bg-ctp-surface2"
                >
                    "View project"
                </a>
            </div>

            {separator.then(|| view! { <hr class="my-4 border-ctp-surface1"/> })}
        </div>
    }
}

/// Sort toggle and language dropdown.
#[component]
pub fn ProjectFilters(
    /// Current sort order
    sort_order: Signal<SortOrder>,
    /// Selected language code, empty for all
    filter_code: Signal<String>,
    on_toggle_sort: Callback<()>,
    on_filter_change: Callback<String>,
    /// Dropdown entries besides "all languages"
    filters: Vec<FilterOption>,
) -> impl IntoView {
    let on_change = move |ev: web_sys::Event| {
        on_filter_change.run(event_target_value(&ev));
    };

    view! {
        <div class="flex items-center gap-3 text-sm mb-6">
            <button
                on:click=move |_| on_toggle_sort.run(())
                class="px-3 py-1.5 rounded-lg bg-ctp-surface0 text-ctp-text hover:bg-ctp-surface1 border border-ctp-surface1"
                title="Toggle sort order"
            >
                {move || format!("Order: {}", sort_order.get().label())}
            </button>

            <select
                class="px-3 py-1.5 rounded-lg border-ctp-surface1 bg-ctp-surface0 text-ctp-text"
                on:change=on_change
            >
                <option value="" selected=move || filter_code.get().is_empty()>
                    "All languages"
                </option>
                {filters
                    .into_iter()
                    .map(|option| {
                        let code = option.code.clone();
                        let is_selected = move || filter_code.get() == code;
                        view! {
                            <option value=option.code selected=is_selected>
                                {option.label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
