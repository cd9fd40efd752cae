use leptos::prelude::*;

use crate::nav::use_nav;

/// Anchor that routes through the shared [`Nav`](crate::nav::Nav) instead
/// of reloading the page.
#[component]
pub fn NavLink(
    /// Route name to navigate to.
    #[prop(into)]
    to: String,
    children: Children,
) -> impl IntoView {
    let nav = use_nav();
    // A real href keeps middle-click and copy-link working.
    let href = nav.path_of(&to).unwrap_or("/");

    view! {
        <a
            href=href
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                nav.go(&to);
            }
        >
            {children()}
        </a>
    }
}
