use crate::theme::Theme;
use leptos::prelude::*;

/// Light/dark switch. The theme signal lives in [`crate::app::App`] so the
/// whole shell re-themes; this button only flips it.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle color theme"
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}
