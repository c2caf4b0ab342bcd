use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::home::Home;
use crate::theme::{self, Theme};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    // First run loads the stored preference (client only); every later run
    // writes the current choice back.
    Effect::new(move |prev: Option<()>| {
        let current = theme.get();
        if prev.is_none() {
            theme.set(theme::initial_theme());
        } else {
            theme::persist_theme(current);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pantry-web.css"/>
        <Title text="Pantry Chef - AI Recipe Generator"/>
        <Meta name="description" content="Turn the ingredients you have into recipes from around the world"/>

        <div class=move || format!("app-root theme-{}", theme.get().as_str())>
            <Router>
                <main>
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
