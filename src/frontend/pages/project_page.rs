use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use portfolio::catalog::Catalog;
use portfolio::config::Config;
use portfolio::format::display_name;
use portfolio::models::Project;
use portfolio::view::{LoadState, resolve_code_link};

use crate::api::{backend, hosting};
use crate::components::{BackButton, Loader, PageButtons, ProjectCard, ProjectFilters};
use crate::hooks::use_project_view;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let repository = move || params.read().get("repository").unwrap_or_default();
    let author = expect_context::<Config>().author;
    let filters = expect_context::<Catalog>().filters;

    let (projects_data, set_projects_data) = signal(LoadState::<Vec<Project>>::Idle);
    let (code_link, set_code_link) = signal(None::<String>);
    let project_view = use_project_view();

    // Fetch the project records whenever the repository changes
    Effect::new(move || {
        let name = repository();
        if name.is_empty() {
            return;
        }

        set_projects_data.set(LoadState::Loading);

        spawn_local(async move {
            let result = backend::list_projects(&name).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Failed to fetch projects of {}: {}", name, e).into(),
                );
            }
            set_projects_data.set(LoadState::from_result(result));
        });
    });

    // The "view code" link is resolved once, for the repository shown on mount,
    // and shared by every card.
    let initial_repository = params.with_untracked(|p| p.get("repository").unwrap_or_default());
    spawn_local(async move {
        match hosting::list_user_repos(&author).await {
            Ok(repos) => set_code_link.set(resolve_code_link(&repos, &initial_repository)),
            Err(e) => web_sys::console::error_1(
                &format!("Failed to resolve repository link: {}", e).into(),
            ),
        }
    });

    let sort_order = Signal::derive(move || project_view.view.get().sort_order());
    let filter_code = Signal::derive(move || project_view.view.get().filter_code().to_string());

    view! {
        <Title text=move || display_name(&repository())/>
        <div class="container mx-auto p-6">
            {move || match projects_data.get() {
                LoadState::Idle | LoadState::Loading => view! { <Loader/> }.into_any(),
                LoadState::Failed(message) => {
                    view! {
                        <div>
                            <BackButton/>
                            <div class="bg-ctp-red/10 border border-ctp-red rounded p-4">
                                <p class="text-ctp-red font-semibold">"Error loading projects"</p>
                                <p class="text-ctp-subtext0 text-sm mt-2">{message}</p>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                LoadState::Loaded(projects) => {
                    let slice = project_view.view.get().page(&projects);
                    let link = code_link.get().unwrap_or_default();

                    view! {
                        <div>
                            <BackButton/>
                            <ProjectFilters
                                sort_order
                                filter_code
                                on_toggle_sort=project_view.on_toggle_sort
                                on_filter_change=project_view.on_filter_change
                                filters=filters.clone()
                            />

                            <div class="bg-ctp-surface0 border border-ctp-surface1 rounded-lg p-6">
                                {if slice.is_empty() {
                                    view! {
                                        <h2 class="text-ctp-subtext0">
                                            "No projects found with the selected language."
                                        </h2>
                                    }
                                        .into_any()
                                } else {
                                    slice
                                        .items
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <ProjectCard
                                                    project=item.project.clone()
                                                    code_link=link.clone()
                                                    separator=item.separator
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }}
                            </div>

                            <PageButtons
                                current=slice.page
                                pages=slice.pages()
                                on_select=project_view.on_page_select
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
