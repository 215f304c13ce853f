use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use portfolio::catalog::Catalog;
use portfolio::models::Repo;
use portfolio::view::LoadState;

use crate::api::hosting;
use crate::components::{BackButton, Loader, RepoCard};

#[component]
pub fn Repos() -> impl IntoView {
    let params = use_params_map();
    let username = move || params.read().get("username").unwrap_or_default();
    let catalog = StoredValue::new(expect_context::<Catalog>());

    // Never Failed: fetch errors read as an empty list
    let (repos_data, set_repos_data) = signal(LoadState::<Vec<Repo>>::Idle);

    Effect::new(move || {
        let user = username();
        if user.is_empty() {
            return;
        }

        set_repos_data.set(LoadState::Loading);

        spawn_local(async move {
            let repos = hosting::list_user_repos(&user).await.unwrap_or_else(|e| {
                web_sys::console::error_1(
                    &format!("Failed to fetch repositories of {}: {}", user, e).into(),
                );
                Vec::new()
            });
            let allowed = catalog.with_value(|c| c.select_allowed(repos));
            set_repos_data.set(LoadState::Loaded(allowed));
        });
    });

    view! {
        <Title text=move || format!("Repositories of {}", username())/>
        <div class="container mx-auto p-6">
            <BackButton/>
            <h2 class="text-3xl font-bold text-ctp-text mb-6">
                "Repositories of " {username}
            </h2>

            {move || match repos_data.get() {
                LoadState::Loaded(repos) if repos.is_empty() => {
                    view! { <p class="text-ctp-subtext0">"No repositories."</p> }.into_any()
                }
                LoadState::Loaded(repos) => {
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4 auto-rows-fr">
                            {repos
                                .into_iter()
                                .map(|repo| view! { <RepoCard repo/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
                _ => view! { <Loader/> }.into_any(),
            }}
        </div>
    }
}
