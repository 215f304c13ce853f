use leptos::prelude::*;
use portfolio::config::Config;
use portfolio::format::repos_path;

#[component]
pub fn Home() -> impl IntoView {
    let author = expect_context::<Config>().author;

    view! {
        <div class="container mx-auto p-6">
            <h2 class="text-3xl font-bold text-ctp-text mb-4">"Welcome"</h2>
            <p class="text-ctp-subtext0 mb-6">"Selected repositories and the projects built in them."</p>
            <a
                href=repos_path(&author)
                class="px-4 py-2 rounded-lg bg-ctp-surface1 text-ctp-text hover:bg-ctp-surface2"
            >
                {format!("Explore {}'s repositories", author)}
            </a>
        </div>
    }
}
