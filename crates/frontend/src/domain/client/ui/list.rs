use contracts::domain::client::Client;
use contracts::shared::navigation::{DrillStack, RemoteData};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::client::api;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

use super::details::ClientDetails;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Listado de clientes, nivel base de la navegación. Click en una fila baja
/// a los campos del cliente.
#[component]
pub fn ClientList(
    clients: RwSignal<RemoteData<Vec<Client>>>,
    stack: RwSignal<DrillStack>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let show_details = RwSignal::new(false);
    let editing: RwSignal<Option<Client>> = RwSignal::new(None);

    let load = move || {
        clients.set(RemoteData::Loading);
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(list) => clients.set(RemoteData::Loaded(list)),
                Err(e) => {
                    report_api_error(session, toast, &e);
                    clients.set(RemoteData::Failed(e.to_string()));
                }
            }
        });
    };

    if matches!(clients.get_untracked(), RemoteData::Idle) {
        load();
    }

    let open_client = move |id| {
        let result = stack.try_update(|s| s.push_client(id));
        if let Some(Err(reason)) = result {
            log::warn!("navegación rechazada: {}", reason);
        }
    };

    let start_create = move |_| {
        editing.set(None);
        show_details.set(true);
    };

    let start_edit = move |client: Client| {
        editing.set(Some(client));
        show_details.set(true);
    };

    let remove = move |client: Client| {
        if !confirm(&format!("¿Eliminar el cliente \"{}\"?", client.name)) {
            return;
        }
        clients.update(|c| c.begin_delete());
        spawn_local(async move {
            match api::delete_client(client.id).await {
                Ok(()) => {
                    toast.success("Cliente eliminado");
                    load();
                }
                Err(e) => {
                    clients.update(|c| c.delete_failed());
                    report_api_error(session, toast, &e);
                }
            }
        });
    };

    let handle_saved = Callback::new(move |created: Option<Client>| {
        show_details.set(false);
        if created.is_some() {
            toast.success("Cliente creado");
        } else {
            toast.success("Cliente actualizado");
        }
        load();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="header__title">"Clientes"</h1>
                <div class="page__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| load())>
                        "Actualizar"
                    </Button>
                    <Button on_click=Callback::new(start_create)>"Nuevo cliente"</Button>
                </div>
            </div>

            {move || match clients.get() {
                RemoteData::Idle | RemoteData::Loading => {
                    view! { <p class="page__status">"Cargando clientes..."</p> }.into_any()
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
                RemoteData::Loaded(list) | RemoteData::Deleting(list) => {
                    if list.is_empty() {
                        view! { <p class="page__status">"No hay clientes cargados."</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th class="table__cell table__cell--header">"Nombre"</th>
                                        <th class="table__cell table__cell--header">"CUIT"</th>
                                        <th class="table__cell table__cell--header">"Email"</th>
                                        <th class="table__cell table__cell--header">"Teléfono"</th>
                                        <th class="table__cell table__cell--header">"Dirección"</th>
                                        <th class="table__cell table__cell--header">"Estado"</th>
                                        <th class="table__cell table__cell--header">"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|client| {
                                            let row_client = client.clone();
                                            let edit_client = client.clone();
                                            view! {
                                                <tr
                                                    class="table__row table__row--clickable"
                                                    on:click=move |_| open_client(row_client.id)
                                                >
                                                    <td class="table__cell">{client.name.clone()}</td>
                                                    <td class="table__cell">{client.cuit}</td>
                                                    <td class="table__cell">{client.email.clone()}</td>
                                                    <td class="table__cell">{client.phone.clone()}</td>
                                                    <td class="table__cell">{client.address.clone()}</td>
                                                    <td class="table__cell">
                                                        {if client.active {
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
                                                                start_edit(edit_client.clone());
                                                            })
                                                        >
                                                            "Editar"
                                                        </Button>
                                                        <Button
                                                            variant="danger"
                                                            on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                                                                ev.stop_propagation();
                                                                remove(client.clone());
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
                <ClientDetails
                    initial=editing.get_untracked()
                    on_saved=handle_saved
                    on_cancel=Callback::new(move |_| show_details.set(false))
                />
            </Show>
        </div>
    }
}
