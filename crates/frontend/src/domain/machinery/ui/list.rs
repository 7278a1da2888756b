use contracts::domain::machinery::{Machinery, MachineryStatus};
use contracts::shared::navigation::RemoteData;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::machinery::api;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

use super::details::MachineryDetails;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn status_badge_variant(status: MachineryStatus) -> &'static str {
    match status {
        MachineryStatus::Disponible => "success",
        MachineryStatus::EnUso => "primary",
        MachineryStatus::Mantenimiento => "warning",
        MachineryStatus::FueraDeServicio => "error",
    }
}

/// Inventario de maquinaria, plano (sin jerarquía cliente/campo/lote).
#[component]
pub fn MachineryPage() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let machinery: RwSignal<RemoteData<Vec<Machinery>>> = RwSignal::new(RemoteData::Idle);
    let show_details = RwSignal::new(false);
    let editing: RwSignal<Option<Machinery>> = RwSignal::new(None);

    let load = move || {
        machinery.set(RemoteData::Loading);
        spawn_local(async move {
            match api::fetch_machinery().await {
                Ok(list) => machinery.set(RemoteData::Loaded(list)),
                Err(e) => {
                    report_api_error(session, toast, &e);
                    machinery.set(RemoteData::Failed(e.to_string()));
                }
            }
        });
    };

    if matches!(machinery.get_untracked(), RemoteData::Idle) {
        load();
    }

    let start_create = move |_| {
        editing.set(None);
        show_details.set(true);
    };

    let start_edit = move |item: Machinery| {
        editing.set(Some(item));
        show_details.set(true);
    };

    let remove = move |item: Machinery| {
        if !confirm(&format!("¿Eliminar la maquinaria \"{}\"?", item.name)) {
            return;
        }
        machinery.update(|m| m.begin_delete());
        spawn_local(async move {
            match api::delete_machinery(item.id).await {
                Ok(()) => {
                    toast.success("Maquinaria eliminada");
                    load();
                }
                Err(e) => {
                    machinery.update(|m| m.delete_failed());
                    report_api_error(session, toast, &e);
                }
            }
        });
    };

    let handle_saved = Callback::new(move |created: Option<Machinery>| {
        show_details.set(false);
        if created.is_some() {
            toast.success("Maquinaria creada");
        } else {
            toast.success("Maquinaria actualizada");
        }
        load();
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="header__title">"Maquinaria"</h1>
                <div class="page__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| load())>
                        "Actualizar"
                    </Button>
                    <Button on_click=Callback::new(start_create)>"Nueva maquinaria"</Button>
                </div>
            </div>

            {move || match machinery.get() {
                RemoteData::Idle | RemoteData::Loading => {
                    view! { <p class="page__status">"Cargando maquinaria..."</p> }.into_any()
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
                        view! { <p class="page__status">"No hay maquinaria cargada."</p> }
                            .into_any()
                    } else {
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th class="table__cell table__cell--header">"Nombre"</th>
                                        <th class="table__cell table__cell--header">"Tipo"</th>
                                        <th class="table__cell table__cell--header">"Marca"</th>
                                        <th class="table__cell table__cell--header">"Modelo"</th>
                                        <th class="table__cell table__cell--header">"Patente"</th>
                                        <th class="table__cell table__cell--header">"Estado"</th>
                                        <th class="table__cell table__cell--header">"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|item| {
                                            let edit_item = item.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{item.name.clone()}</td>
                                                    <td class="table__cell">{item.machinery_type.clone()}</td>
                                                    <td class="table__cell">{item.brand.clone()}</td>
                                                    <td class="table__cell">{item.model.clone()}</td>
                                                    <td class="table__cell">
                                                        {item.patent.clone().unwrap_or_else(|| "-".to_string())}
                                                    </td>
                                                    <td class="table__cell">
                                                        <Badge variant=status_badge_variant(item.status)>
                                                            {item.status.as_str()}
                                                        </Badge>
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        <Button
                                                            variant="ghost"
                                                            on_click=Callback::new(move |_| {
                                                                start_edit(edit_item.clone());
                                                            })
                                                        >
                                                            "Editar"
                                                        </Button>
                                                        <Button
                                                            variant="danger"
                                                            on_click=Callback::new(move |_| {
                                                                remove(item.clone());
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
                <MachineryDetails
                    initial=editing.get_untracked()
                    on_saved=handle_saved
                    on_cancel=Callback::new(move |_| show_details.set(false))
                />
            </Show>
        </div>
    }
}
