use contracts::domain::machinery::{Machinery, MachineryForm, MachineryStatus};
use contracts::shared::validation::{issue_message, FieldIssue};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::machinery::api;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

fn status_options() -> Vec<(String, String)> {
    MachineryStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

/// Alta y modificación de maquinaria.
#[component]
pub fn MachineryDetails(
    #[prop(optional_no_strip)] initial: Option<Machinery>,
    on_saved: Callback<Option<Machinery>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let form = RwSignal::new(match &initial {
        Some(item) => MachineryForm::from_machinery(item),
        None => MachineryForm::default(),
    });
    let issues: RwSignal<Vec<FieldIssue>> = RwSignal::new(Vec::new());
    let is_submitting = RwSignal::new(false);

    let title = if initial.is_some() {
        "Editar maquinaria"
    } else {
        "Nueva maquinaria"
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || issues.with(|list| issue_message(list, field)))
    };

    let handle_save = move |_| {
        if is_submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        match current.to_payload() {
            Err(list) => {
                toast.warning(format!("Hay {} campos con errores", list.len()));
                issues.set(list);
            }
            Ok(payload) => {
                issues.set(Vec::new());
                is_submitting.set(true);
                spawn_local(async move {
                    let outcome = match current.id {
                        Some(id) => api::update_machinery(id, &payload).await.map(|_| None),
                        None => api::create_machinery(&payload).await.map(Some),
                    };
                    is_submitting.set(false);
                    match outcome {
                        Ok(created) => on_saved.run(created),
                        Err(e) => report_api_error(session, toast, &e),
                    }
                });
            }
        }
    };

    view! {
        <Modal title=title on_close=on_cancel>
            <form class="form" on:submit=|ev| ev.prevent_default()>
                <Input
                    label="Nombre"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    error=field_error("name")
                />
                <Input
                    label="Tipo"
                    placeholder="Tractor, cosechadora, pulverizadora..."
                    value=Signal::derive(move || form.with(|f| f.machinery_type.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.machinery_type = v))
                    error=field_error("type")
                />
                <Input
                    label="Marca"
                    value=Signal::derive(move || form.with(|f| f.brand.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.brand = v))
                    error=field_error("brand")
                />
                <Input
                    label="Modelo"
                    value=Signal::derive(move || form.with(|f| f.model.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.model = v))
                    error=field_error("model")
                />
                <Input
                    label="Patente (opcional)"
                    value=Signal::derive(move || form.with(|f| f.patent.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.patent = v))
                />
                <Select
                    label="Estado"
                    value=Signal::derive(move || form.with(|f| f.status.as_str().to_string()))
                    options=status_options()
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = MachineryStatus::from_str_label(&v) {
                            form.update(|f| f.status = status);
                        }
                    })
                />
                <div class="form__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| on_cancel.run(()))>
                        "Cancelar"
                    </Button>
                    <Button
                        disabled=Signal::derive(move || is_submitting.get())
                        on_click=Callback::new(handle_save)
                    >
                        {move || if is_submitting.get() { "Guardando..." } else { "Guardar" }}
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
