use contracts::domain::common::EntityId;
use contracts::domain::field::{Field, FieldForm};
use contracts::shared::validation::{issue_message, FieldIssue};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::field::api;
use crate::shared::components::ui::{Button, Checkbox, Input};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

/// Alta y modificación de campo. El cliente dueño viene dado por la
/// navegación, no se elige acá.
#[component]
pub fn FieldDetails(
    client_id: EntityId,
    #[prop(optional_no_strip)] initial: Option<Field>,
    on_saved: Callback<Option<Field>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let form = RwSignal::new(match &initial {
        Some(field) => FieldForm::from_field(field),
        None => FieldForm::default(),
    });
    let issues: RwSignal<Vec<FieldIssue>> = RwSignal::new(Vec::new());
    let is_submitting = RwSignal::new(false);

    let title = if initial.is_some() {
        "Editar campo"
    } else {
        "Nuevo campo"
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || issues.with(|list| issue_message(list, field)))
    };

    let handle_save = move |_| {
        if is_submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        match current.to_payload(client_id) {
            Err(list) => {
                toast.warning(format!("Hay {} campos con errores", list.len()));
                issues.set(list);
            }
            Ok(payload) => {
                issues.set(Vec::new());
                is_submitting.set(true);
                spawn_local(async move {
                    let outcome = match current.id {
                        Some(id) => api::update_field(id, &payload).await.map(|_| None),
                        None => api::create_field(&payload).await.map(Some),
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
                    label="Superficie (ha)"
                    value=Signal::derive(move || form.with(|f| f.area.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.area = v))
                    error=field_error("area")
                />
                <Input
                    label="Latitud"
                    placeholder="-34.6037"
                    value=Signal::derive(move || form.with(|f| f.lat.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.lat = v))
                    error=field_error("lat")
                />
                <Input
                    label="Longitud"
                    placeholder="-58.3816"
                    value=Signal::derive(move || form.with(|f| f.long.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.long = v))
                    error=field_error("long")
                />
                <Checkbox
                    label="Activo"
                    checked=Signal::derive(move || form.with(|f| f.active))
                    on_change=Callback::new(move |v| form.update(|f| f.active = v))
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
