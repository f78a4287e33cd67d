use super::SECTIONS;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home">
            <h1 class="home__title">"Simplify Admin"</h1>
            <p class="home__subtitle">
                "Sistema de gestión para productos, marcas, tiendas y categorías."
            </p>
            <div class="home__grid">
                {SECTIONS
                    .iter()
                    .map(|s| view! {
                        <A href=s.path attr:class="home-card">
                            <h2 class="home-card__title">
                                {icon(s.icon)}
                                <span>{s.title}</span>
                            </h2>
                            <p class="home-card__description">{s.description}</p>
                            <ul class="home-card__features">
                                {s.features.iter().map(|f| view! { <li>{format!("✓ {}", f)}</li> }).collect_view()}
                            </ul>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
