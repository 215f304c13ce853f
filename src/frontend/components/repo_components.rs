use leptos::prelude::*;
use portfolio::catalog::Icon;
use portfolio::format::project_path;
use portfolio::models::Repo;
use thaw::Tooltip;

#[component]
pub fn RepoCard(repo: Repo) -> impl IntoView {
    view! {
        <div class="bg-ctp-surface0 border border-ctp-surface1 rounded-lg p-4 hover:border-ctp-blue transition-colors">
            <h3 class="text-xl font-semibold text-ctp-text break-all mb-2">{repo.name.clone()}</h3>
            <p class="text-ctp-subtext0 text-sm mb-3 flex items-center gap-2">
                <span class={format!("icon icon-{}", Icon::Code.slug())}>{Icon::Code.glyph()}</span>
                {repo.language.clone().unwrap_or_default()}
            </p>

            <div class="flex gap-4 text-sm text-ctp-subtext1 mb-4">
                <Tooltip content="Stars">
                    <span>"★ " {repo.stargazers_count}</span>
                </Tooltip>
                <Tooltip content="Forks">
                    <span>"⑂ " {repo.forks_count}</span>
                </Tooltip>
            </div>

            <div class="flex gap-2">
                <a
                    href=repo.html_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-3 py-1.5 rounded bg-ctp-surface1 text-ctp-text hover:bg-ctp-surface2"
                >
                    "View code"
                </a>
                <a
                    href=project_path(&repo.name)
                    class="px-3 py-1.5 rounded bg-ctp-surface1 text-ctp-text hover:bg-ctp-surface2"
                >
                    "View projects"
                </a>
            </div>
        </div>
    }
}
