use contracts::domain::client::Client;
use contracts::domain::common::EntityId;
use contracts::domain::field::{fields_of_client, Field};
use contracts::shared::navigation::{DrillStack, RemoteData};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::client::api as client_api;
use crate::domain::field::api as field_api;
use crate::domain::field::ui::details::FieldDetails;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::format::format_area;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Campos del cliente seleccionado. Click en una fila baja a los lotes del
/// campo. Si el cliente ya no existe en el backend, se vuelve a la lista.
#[component]
pub fn ClientFieldsView(
    client_id: EntityId,
    stack: RwSignal<DrillStack>,
    on_back: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let state: RwSignal<RemoteData<(Client, Vec<Field>)>> = RwSignal::new(RemoteData::Idle);
    let show_details = RwSignal::new(false);
    let editing: RwSignal<Option<Field>> = RwSignal::new(None);

    let load = move || {
        state.set(RemoteData::Loading);
        spawn_local(async move {
            let client = match client_api::fetch_client(client_id).await {
                Ok(client) => client,
                Err(e) => {
                    // El cliente pudo haber sido borrado desde otra sesión.
                    report_api_error(session, toast, &e);
                    on_back.run(());
                    return;
                }
            };
            match field_api::fetch_fields().await {
                Ok(all) => {
                    let fields = fields_of_client(&all, Some(client_id));
                    state.set(RemoteData::Loaded((client, fields)));
                }
                Err(e) => {
                    report_api_error(session, toast, &e);
                    state.set(RemoteData::Failed(e.to_string()));
                }
            }
        });
    };

    if matches!(state.get_untracked(), RemoteData::Idle) {
        load();
    }

    let open_field = move |id| {
        let result = stack.try_update(|s| s.push_field(id));
        if let Some(Err(reason)) = result {
            log::warn!("navegación rechazada: {}", reason);
        }
    };

    let start_create = move |_| {
        editing.set(None);
        show_details.set(true);
    };

    let start_edit = move |field: Field| {
        editing.set(Some(field));
        show_details.set(true);
    };

    let remove = move |field: Field| {
        if !confirm(&format!("¿Eliminar el campo \"{}\"?", field.name)) {
            return;
        }
        state.update(|s| s.begin_delete());
        spawn_local(async move {
            match field_api::delete_field(field.id).await {
                Ok(()) => {
                    toast.success("Campo eliminado");
                    stack.update(|s| s.mark_parent_stale());
                    load();
                }
                Err(e) => {
                    state.update(|s| s.delete_failed());
                    report_api_error(session, toast, &e);
                }
            }
        });
    };

    let handle_saved = Callback::new(move |created: Option<Field>| {
        show_details.set(false);
        if created.is_some() {
            toast.success("Campo creado");
            stack.update(|s| s.mark_parent_stale());
        } else {
            toast.success("Campo actualizado");
        }
        load();
    });

    let client_name = move || {
        state.with(|s| {
            s.data()
                .map(|(client, _)| client.name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__breadcrumb">
                    <Button variant="ghost" on_click=Callback::new(move |_| on_back.run(()))>
                        "← Clientes"
                    </Button>
                    <h1 class="header__title">{move || format!("Campos de {}", client_name())}</h1>
                </div>
                <div class="page__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| load())>
                        "Actualizar"
                    </Button>
                    <Button on_click=Callback::new(start_create)>"Nuevo campo"</Button>
                </div>
            </div>

            {move || match state.get() {
                RemoteData::Idle | RemoteData::Loading => {
                    view! { <p class="page__status">"Cargando campos..."</p> }.into_any()
                }
                RemoteData::Failed(message) => view! {
                    <div class="page__error">
                        <p>{message}</p>
                        <Button variant="secondary" on_click=Callback::new(move |_| load())>
                            "Reintentar"
                        </Button>
                    </div>
                }
                .into_any(),
                RemoteData::Loaded((_, fields)) | RemoteData::Deleting((_, fields)) => {
                    if fields.is_empty() {
                        view! {
                            <p class="page__status">"Este cliente no tiene campos cargados."</p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th class="table__cell table__cell--header">"Nombre"</th>
                                        <th class="table__cell table__cell--header">"Superficie"</th>
                                        <th class="table__cell table__cell--header">"Latitud"</th>
                                        <th class="table__cell table__cell--header">"Longitud"</th>
                                        <th class="table__cell table__cell--header">"Estado"</th>
                                        <th class="table__cell table__cell--header">"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {fields
                                        .into_iter()
                                        .map(|field| {
                                            let row_field = field.clone();
                                            let edit_field = field.clone();
                                            view! {
                                                <tr
                                                    class="table__row table__row--clickable"
                                                    on:click=move |_| open_field(row_field.id)
                                                >
                                                    <td class="table__cell">{field.name.clone()}</td>
                                                    <td class="table__cell">{format_area(field.area)}</td>
                                                    <td class="table__cell">{field.lat}</td>
                                                    <td class="table__cell">{field.long}</td>
                                                    <td class="table__cell">
                                                        {if field.active {
                                                            view! { <Badge variant="success">"Activo"</Badge> }
                                                        } else {
                                                            view! { <Badge variant="neutral">"Inactivo"</Badge> }
                                                        }}
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        <Button
                                                            variant="ghost"
                                                            on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                                                                ev.stop_propagation();
                                                                start_edit(edit_field.clone());
                                                            })
                                                        >
                                                            "Editar"
                                                        </Button>
                                                        <Button
                                                            variant="danger"
                                                            on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                                                                ev.stop_propagation();
                                                                remove(field.clone());
                                                            })
                                                        >
                                                            "Eliminar"
                                                        </Button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                        .into_any()
                    }
                }
            }}

            <Show when=move || show_details.get()>
                <FieldDetails
                    client_id=client_id
                    initial=editing.get_untracked()
                    on_saved=handle_saved
                    on_cancel=Callback::new(move |_| show_details.set(false))
                />
            </Show>
        </div>
    }
}
