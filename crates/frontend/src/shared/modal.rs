use leptos::prelude::*;

/// Ventana modal. Click en el fondo o en la cruz la cierra.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div
            class="modal-overlay"
            on:click=move |_| on_close.run(())
        >
            <div
                class="modal-content"
                on:click=|e| e.stop_propagation()
            >
                <div class="modal-content__header">
                    <h2 class="modal-content__title">{title.clone()}</h2>
                    <button
                        class="modal-content__close"
                        on:click=move |_| on_close.run(())
                    >
                        "×"
                    </button>
                </div>
                <div class="modal-content__body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
