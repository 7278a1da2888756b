use contracts::shared::validation::{check_email, require_text, IssueList};
use contracts::system::auth::{UserInfo, UserUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::ui::{Button, Input};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};
use crate::system::auth::api;

/// Edición de los datos del usuario logueado (`PUT /users/:id`).
#[component]
pub fn ProfileModal(on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let current = session.user().unwrap_or(UserInfo {
        id: 0,
        name: String::new(),
        email: String::new(),
    });
    let user_id = current.id;

    let name = RwSignal::new(current.name);
    let email = RwSignal::new(current.email);
    let (is_submitting, set_is_submitting) = signal(false);
    let (name_error, set_name_error) = signal(Option::<String>::None);
    let (email_error, set_email_error) = signal(Option::<String>::None);

    let handle_save = move |_| {
        if is_submitting.get() {
            return;
        }

        let mut issues = IssueList::new();
        let checked_name = issues.check("name", require_text(&name.get(), "El nombre"));
        let checked_email = issues.check("email", check_email(&email.get()));
        let issues = issues.into_vec();
        set_name_error.set(issues.iter().find(|i| i.field == "name").map(|i| i.message.clone()));
        set_email_error.set(issues.iter().find(|i| i.field == "email").map(|i| i.message.clone()));
        if !issues.is_empty() {
            toast.warning("Revisá los campos del formulario");
            return;
        }

        let update = UserUpdate {
            name: checked_name.unwrap_or_default(),
            email: checked_email.unwrap_or_default(),
        };
        set_is_submitting.set(true);

        spawn_local(async move {
            match api::update_user(user_id, &update).await {
                Ok(()) => {
                    session.set_user(UserInfo {
                        id: user_id,
                        name: update.name.clone(),
                        email: update.email.clone(),
                    });
                    toast.success("Perfil actualizado");
                    on_close.run(());
                }
                Err(e) => {
                    report_api_error(session, toast, &e);
                    set_is_submitting.set(false);
                }
            }
        });
    };

    view! {
        <Modal title="Mi perfil" on_close=on_close>
            <Input
                label="Nombre"
                value=Signal::derive(move || name.get())
                on_input=Callback::new(move |v| name.set(v))
                error=Signal::derive(move || name_error.get())
            />
            <Input
                label="Email"
                input_type="email"
                value=Signal::derive(move || email.get())
                on_input=Callback::new(move |v| email.set(v))
                error=Signal::derive(move || email_error.get())
            />
            <div class="modal-content__actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    "Cancelar"
                </Button>
                <Button
                    disabled=Signal::derive(move || is_submitting.get())
                    on_click=Callback::new(handle_save)
                >
                    {move || if is_submitting.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </div>
        </Modal>
    }
}
