use leptos::prelude::*;

/// Badge with a color variant: "primary", "success", "warning", "error" or
/// "neutral" (default)
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Activa / Inactiva; `masculine` switches the label to Activo / Inactivo
#[component]
pub fn StatusBadge(
    active: bool,
    #[prop(optional)]
    masculine: bool,
) -> impl IntoView {
    let label = match (active, masculine) {
        (true, false) => "Activa",
        (false, false) => "Inactiva",
        (true, true) => "Activo",
        (false, true) => "Inactivo",
    };
    let variant = if active { "success" } else { "neutral" };

    view! { <Badge variant=variant>{label}</Badge> }
}
