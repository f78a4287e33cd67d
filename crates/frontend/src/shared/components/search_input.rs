use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button
///
/// `on_change` fires once typing pauses for 300 ms, and immediately on clear.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let input_value = RwSignal::new(value.get_untracked());
    // Bumped on every keystroke; a timer only fires if it is still the latest
    let keystroke = StoredValue::new(0u64);

    let handle_input = move |new_value: String| {
        input_value.set(new_value.clone());
        let seq = keystroke.get_value() + 1;
        keystroke.set_value(seq);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if keystroke.try_get_value() == Some(seq) {
                on_change.run(new_value);
            }
        });
    };

    let clear = move |_| {
        keystroke.update_value(|v| *v += 1);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=move || placeholder.get().unwrap_or_else(|| "Buscar...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" title="Limpiar" on:click=clear>
                    {icon("x")}
                </button>
            })}
        </div>
    }
}
