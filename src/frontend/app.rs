use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use portfolio::catalog::Catalog;
use portfolio::config::Config;
use portfolio::format::repos_path;
use thaw::*;

use crate::pages::{Home, ProjectPage, Repos};

#[component]
pub fn App() -> impl IntoView {
    // Set dark theme for Thaw UI components
    let theme = RwSignal::new(Theme::dark());

    provide_meta_context();
    provide_context(Config::compiled());
    provide_context(Catalog::default());

    view! {
        <ConfigProvider theme>
            <Router>
                <AppContent/>
            </Router>
        </ConfigProvider>
    }
}

#[component]
fn AppContent() -> impl IntoView {
    let author = expect_context::<Config>().author;

    view! {
        <main class="min-h-screen bg-ctp-base flex flex-col">
            <nav class="bg-ctp-surface0 border-b border-ctp-surface1">
                <div class="container mx-auto flex justify-between items-center px-6 py-4">
                    <a href="/">
                        <h1 class="text-3xl font-bold bg-gradient-to-r from-ctp-mauve to-ctp-blue bg-clip-text text-transparent">
                            {format!("{}'s repositories", author)}
                        </h1>
                    </a>
                    <a
                        href=repos_path(&author)
                        class="px-4 py-2 rounded-lg font-medium text-ctp-subtext1 hover:bg-ctp-surface1 hover:text-ctp-text"
                    >
                        "Repos"
                    </a>
                </div>
            </nav>

            <div class="flex-1">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=Home/>
                    <Route path=path!("/repos/:username") view=Repos/>
                    <Route path=path!("/project/:repository") view=ProjectPage/>
                </Routes>
            </div>

            <footer class="py-6 px-6 border-t border-ctp-surface1 bg-ctp-surface0">
                <div class="container mx-auto text-center text-xs text-ctp-overlay0">
                    "portfolio v" {env!("CARGO_PKG_VERSION")}
                </div>
            </footer>
        </main>
    }
}
