use leptos::prelude::*;

/// Screen-level error banner; renders nothing while `message` is None
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: Signal<Option<String>>,
    /// Shows a close button when provided
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{text}</span>
                    {on_dismiss.map(|cb| view! {
                        <button
                            class="button button--icon warning-box__close"
                            title="Cerrar"
                            on:click=move |_| cb.run(())
                        >
                            {crate::shared::icons::icon("x")}
                        </button>
                    })}
                </div>
            }
        })
    }
}
