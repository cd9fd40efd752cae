use leptos::prelude::*;

use crate::config::views;
use crate::nav::Nav;
use crate::pages::{DashboardPage, HomePage, NotFoundPage};

#[component]
pub fn App() -> impl IntoView {
    let nav = Nav::new();
    nav.listen_popstate();
    provide_context(nav.clone());

    view! {
        {move || match nav.active_view() {
            id if id == views::HOME => view! { <HomePage /> }.into_any(),
            id if id == views::DASHBOARD => view! { <DashboardPage /> }.into_any(),
            _ => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}
