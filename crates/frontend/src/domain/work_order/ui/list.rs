use std::collections::HashMap;

use contracts::domain::common::EntityId;
use contracts::domain::work_order::{WorkOrder, WorkOrderStatus};
use contracts::shared::navigation::RemoteData;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::client::api as client_api;
use crate::domain::service::api as service_api;
use crate::domain::work_order::api;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::format::{format_naive_date, format_optional_money};
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

use super::details::WorkOrderDetails;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn status_badge_variant(status: WorkOrderStatus) -> &'static str {
    match status {
        WorkOrderStatus::Pendiente => "warning",
        WorkOrderStatus::EnProceso => "primary",
        WorkOrderStatus::Finalizada => "success",
        WorkOrderStatus::Cancelada => "neutral",
    }
}

/// Listado de órdenes de trabajo. Los nombres de cliente y servicio se
/// resuelven localmente contra sus catálogos.
#[component]
pub fn WorkOrdersPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let orders: RwSignal<RemoteData<Vec<WorkOrder>>> = RwSignal::new(RemoteData::Idle);
    let client_names: RwSignal<HashMap<EntityId, String>> = RwSignal::new(HashMap::new());
    let service_names: RwSignal<HashMap<EntityId, String>> = RwSignal::new(HashMap::new());
    let show_details = RwSignal::new(false);
    let editing: RwSignal<Option<WorkOrder>> = RwSignal::new(None);

    let load = move || {
        orders.set(RemoteData::Loading);
        spawn_local(async move {
            match api::fetch_work_orders().await {
                Ok(list) => orders.set(RemoteData::Loaded(list)),
                Err(e) => {
                    report_api_error(session, toast, &e);
                    orders.set(RemoteData::Failed(e.to_string()));
                    return;
                }
            }
            // Los catálogos solo alimentan las columnas de nombres; si
            // fallan, la tabla muestra los ids.
            match client_api::fetch_clients().await {
                Ok(clients) => client_names.set(
                    clients.into_iter().map(|c| (c.id, c.name)).collect(),
                ),
                Err(e) => log::warn!("no se pudieron cargar los clientes: {}", e),
            }
            match service_api::fetch_services().await {
                Ok(services) => service_names.set(
                    services.into_iter().map(|s| (s.id, s.name)).collect(),
                ),
                Err(e) => log::warn!("no se pudieron cargar los servicios: {}", e),
            }
        });
    };

    if matches!(orders.get_untracked(), RemoteData::Idle) {
        load();
    }

    let client_label = move |id: EntityId| {
        client_names.with(|names| {
            names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| format!("Cliente #{}", id))
        })
    };

    let service_label = move |id: EntityId| {
        service_names.with(|names| {
            names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| format!("Servicio #{}", id))
        })
    };

    let start_create = move |_| {
        editing.set(None);
        show_details.set(true);
    };

    let start_edit = move |order: WorkOrder| {
        editing.set(Some(order));
        show_details.set(true);
    };

    let remove = move |order: WorkOrder| {
        if !confirm(&format!("¿Eliminar la orden \"{}\"?", order.name)) {
            return;
        }
        orders.update(|o| o.begin_delete());
        spawn_local(async move {
            match api::delete_work_order(order.id).await {
                Ok(()) => {
                    toast.success("Orden eliminada");
                    load();
                }
                Err(e) => {
                    orders.update(|o| o.delete_failed());
                    report_api_error(session, toast, &e);
                }
            }
        });
    };

    let handle_saved = Callback::new(move |created: Option<WorkOrder>| {
        show_details.set(false);
        if created.is_some() {
            toast.success("Orden creada");
        } else {
            toast.success("Orden actualizada");
        }
        load();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="header__title">"Órdenes de trabajo"</h1>
                <div class="page__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| load())>
                        "Actualizar"
                    </Button>
                    <Button on_click=Callback::new(start_create)>"Nueva orden"</Button>
                </div>
            </div>

            {move || match orders.get() {
                RemoteData::Idle | RemoteData::Loading => {
                    view! { <p class="page__status">"Cargando órdenes..."</p> }.into_any()
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
                        view! { <p class="page__status">"No hay órdenes cargadas."</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th class="table__cell table__cell--header">"Nombre"</th>
                                        <th class="table__cell table__cell--header">"Cliente"</th>
                                        <th class="table__cell table__cell--header">"Servicio"</th>
                                        <th class="table__cell table__cell--header">"Inicio"</th>
                                        <th class="table__cell table__cell--header">"Fin"</th>
                                        <th class="table__cell table__cell--header">"Lotes"</th>
                                        <th class="table__cell table__cell--header">"Precio"</th>
                                        <th class="table__cell table__cell--header">"Estado"</th>
                                        <th class="table__cell table__cell--header">"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|order| {
                                            let edit_order = order.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{order.name.clone()}</td>
                                                    <td class="table__cell">
                                                        {client_label(order.client_id)}
                                                    </td>
                                                    <td class="table__cell">
                                                        {service_label(order.service_id)}
                                                    </td>
                                                    <td class="table__cell">
                                                        {format_naive_date(order.init_date)}
                                                    </td>
                                                    <td class="table__cell">
                                                        {order
                                                            .finish_date
                                                            .map(format_naive_date)
                                                            .unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class="table__cell">
                                                        {order.lot_details.len()}
                                                    </td>
                                                    <td class="table__cell">
                                                        {format_optional_money(order.price)}
                                                    </td>
                                                    <td class="table__cell">
                                                        <Badge variant=status_badge_variant(order.status)>
                                                            {order.status.as_str()}
                                                        </Badge>
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        <Button
                                                            variant="ghost"
                                                            on_click=Callback::new(move |_| {
                                                                start_edit(edit_order.clone());
                                                            })
                                                        >
                                                            "Editar"
                                                        </Button>
                                                        <Button
                                                            variant="danger"
                                                            on_click=Callback::new(move |_| {
                                                                remove(order.clone());
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
                <WorkOrderDetails
                    initial=editing.get_untracked()
                    on_saved=handle_saved
                    on_cancel=Callback::new(move |_| show_details.set(false))
                />
            </Show>
        </div>
    }
}
