use super::{is_active, SECTIONS};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
fn NavLink(path: &'static str, label: &'static str, icon_name: &'static str) -> impl IntoView {
    let pathname = use_location().pathname;
    view! {
        <A href=path attr:class=move || {
            if is_active(&pathname.get(), path) { "nav-link nav-link--active" } else { "nav-link" }
        }>
            {icon(icon_name)}
            <span>{label}</span>
        </A>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <A href="/" attr:class="main-nav-bar__brand">"Simplify Admin"</A>
            <div class="main-nav-bar__links">
                <NavLink path="/" label="Inicio" icon_name="home" />
                {SECTIONS
                    .iter()
                    .map(|s| view! { <NavLink path=s.path label=s.nav_label icon_name=s.icon /> })
                    .collect_view()}
            </div>
        </nav>
    }
}
