use leptos::prelude::*;

use crate::components::NavLink;

/// Rendered for the not-found sentinel route.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12 text-center">
            <h1 class="text-xl font-bold mb-2">"404"</h1>
            <p class="mb-4 text-[var(--ink-light)]">"La página que buscas no existe."</p>
            <NavLink to="Home">"← volver al asistente"</NavLink>
        </main>
    }
}
