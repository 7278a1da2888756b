use contracts::domain::common::EntityId;
use contracts::domain::field::Field;
use contracts::domain::lot::{lots_of_field, Lot};
use contracts::shared::navigation::{DrillStack, RemoteData};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::field::api as field_api;
use crate::domain::lot::api as lot_api;
use crate::domain::lot::ui::details::LotDetails;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::format::format_area;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Lotes del campo seleccionado, nivel más profundo de la navegación.
/// Las altas y bajas marcan desactualizado al nivel de campos.
#[component]
pub fn FieldLotsView(
    field_id: EntityId,
    stack: RwSignal<DrillStack>,
    on_back: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let state: RwSignal<RemoteData<(Field, Vec<Lot>)>> = RwSignal::new(RemoteData::Idle);
    let show_details = RwSignal::new(false);
    let editing: RwSignal<Option<Lot>> = RwSignal::new(None);

    let load = move || {
        state.set(RemoteData::Loading);
        spawn_local(async move {
            let field = match field_api::fetch_field(field_id).await {
                Ok(field) => field,
                Err(e) => {
                    // El campo pudo haber sido borrado desde otra sesión.
                    report_api_error(session, toast, &e);
                    on_back.run(());
                    return;
                }
            };
            match lot_api::fetch_lots().await {
                Ok(all) => {
                    let lots = lots_of_field(&all, Some(field_id));
                    state.set(RemoteData::Loaded((field, lots)));
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

    let start_create = move |_| {
        editing.set(None);
        show_details.set(true);
    };

    let start_edit = move |lot: Lot| {
        editing.set(Some(lot));
        show_details.set(true);
    };

    let remove = move |lot: Lot| {
        if !confirm(&format!("¿Eliminar el lote \"{}\"?", lot.name)) {
            return;
        }
        state.update(|s| s.begin_delete());
        spawn_local(async move {
            match lot_api::delete_lot(lot.id).await {
                Ok(()) => {
                    toast.success("Lote eliminado");
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

    let handle_saved = Callback::new(move |created: Option<Lot>| {
        show_details.set(false);
        if created.is_some() {
            toast.success("Lote creado");
            stack.update(|s| s.mark_parent_stale());
        } else {
            toast.success("Lote actualizado");
        }
        load();
    });

    let field_name = move || {
        state.with(|s| {
            s.data()
                .map(|(field, _)| field.name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__breadcrumb">
                    <Button variant="ghost" on_click=Callback::new(move |_| on_back.run(()))>
                        "← Campos"
                    </Button>
                    <h1 class="header__title">{move || format!("Lotes de {}", field_name())}</h1>
                </div>
                <div class="page__actions">
                    <Button variant="secondary" on_click=Callback::new(move |_| load())>
                        "Actualizar"
                    </Button>
                    <Button on_click=Callback::new(start_create)>"Nuevo lote"</Button>
                </div>
            </div>

            {move || match state.get() {
                RemoteData::Idle | RemoteData::Loading => {
                    view! { <p class="page__status">"Cargando lotes..."</p> }.into_any()
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
                RemoteData::Loaded((_, lots)) | RemoteData::Deleting((_, lots)) => {
                    if lots.is_empty() {
                        view! {
                            <p class="page__status">"Este campo no tiene lotes cargados."</p>
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
                                    {lots
                                        .into_iter()
                                        .map(|lot| {
                                            let edit_lot = lot.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{lot.name.clone()}</td>
                                                    <td class="table__cell">{format_area(lot.area)}</td>
                                                    <td class="table__cell">{lot.lat}</td>
                                                    <td class="table__cell">{lot.long}</td>
                                                    <td class="table__cell">
                                                        {if lot.active {
                                                            view! { <Badge variant="success">"Activo"</Badge> }
                                                        } else {
                                                            view! { <Badge variant="neutral">"Inactivo"</Badge> }
                                                        }}
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        <Button
                                                            variant="ghost"
                                                            on_click=Callback::new(move |_| {
                                                                start_edit(edit_lot.clone());
                                                            })
                                                        >
                                                            "Editar"
                                                        </Button>
                                                        <Button
                                                            variant="danger"
                                                            on_click=Callback::new(move |_| {
                                                                remove(lot.clone());
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
                <LotDetails
                    field_id=field_id
                    initial=editing.get_untracked()
                    on_saved=handle_saved
                    on_cancel=Callback::new(move |_| show_details.set(false))
                />
            </Show>
        </div>
    }
}
