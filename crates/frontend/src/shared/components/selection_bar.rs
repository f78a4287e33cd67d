use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Bulk actions for the current selection; hidden while nothing is selected
#[component]
pub fn SelectionBar(
    #[prop(into)]
    count: Signal<usize>,
    #[prop(into)]
    busy: Signal<bool>,
    on_delete: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    move || {
        let selected = count.get();
        (selected > 0).then(|| {
            view! {
                <div class="selection-bar">
                    <span class="selection-bar__count">
                        {format!("{} seleccionado(s)", selected)}
                    </span>
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_delete.run(())
                            disabled=busy
                        >
                            {icon("delete")}
                            {move || if busy.get() { " Eliminando..." } else { " Eliminar seleccionados" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_clear.run(())
                            disabled=busy
                        >
                            "Cancelar selección"
                        </Button>
                    </Space>
                </div>
            }
        })
    }
}
