use contracts::domain::client::Client;
use contracts::domain::common::{EntityId, PickerItem};
use contracts::domain::field::{fields_of_client, Field};
use contracts::domain::lot::{lots_of_field, Lot};
use contracts::domain::machinery::Machinery;
use contracts::domain::service::FieldService;
use contracts::domain::work_order::{WorkOrder, WorkOrderForm, WorkOrderStatus};
use contracts::shared::selection::{SelectionChain, CREATE_NEW};
use contracts::shared::validation::{issue_message, FieldIssue};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::client::api as client_api;
use crate::domain::client::ui::details::ClientDetails;
use crate::domain::field::api as field_api;
use crate::domain::field::ui::details::FieldDetails;
use crate::domain::lot::api as lot_api;
use crate::domain::lot::ui::details::LotDetails;
use crate::domain::machinery::api as machinery_api;
use crate::domain::service::api as service_api;
use crate::domain::work_order::api;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;
use crate::system::auth::context::{report_api_error, use_session};

fn status_options() -> Vec<(String, String)> {
    WorkOrderStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
        .collect()
}

fn select_options<T: PickerItem>(items: &[T], empty_label: &str, create_label: &str) -> Vec<(String, String)> {
    let mut options = vec![(String::new(), empty_label.to_string())];
    options.extend(
        items
            .iter()
            .map(|item| (item.picker_id().to_string(), item.picker_label())),
    );
    options.push((CREATE_NEW.to_string(), create_label.to_string()));
    options
}

/// Alta y modificación de orden de trabajo.
///
/// Los selectores cliente → campo → lotes están encadenados: cada cambio de
/// nivel superior resetea los inferiores y recarga sus opciones. Las
/// respuestas que llegan para una selección que ya cambió se descartan por
/// generación. La opción reservada de los selectores abre el alta de la
/// entidad sin salir del formulario.
#[component]
pub fn WorkOrderDetails(
    #[prop(optional_no_strip)] initial: Option<WorkOrder>,
    on_saved: Callback<Option<WorkOrder>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let toast = use_toast();

    let form = RwSignal::new(match &initial {
        Some(order) => WorkOrderForm::from_work_order(order),
        None => WorkOrderForm::default(),
    });
    let chain = RwSignal::new(SelectionChain::new());
    let machinery_sel: RwSignal<Vec<EntityId>> = RwSignal::new(
        initial
            .as_ref()
            .map(|o| o.machinery_details.iter().map(|d| d.machinery_id).collect())
            .unwrap_or_default(),
    );

    let clients: RwSignal<Vec<Client>> = RwSignal::new(Vec::new());
    let field_options: RwSignal<Vec<Field>> = RwSignal::new(Vec::new());
    let lot_options: RwSignal<Vec<Lot>> = RwSignal::new(Vec::new());
    let machinery: RwSignal<Vec<Machinery>> = RwSignal::new(Vec::new());
    let services: RwSignal<Vec<FieldService>> = RwSignal::new(Vec::new());

    let issues: RwSignal<Vec<FieldIssue>> = RwSignal::new(Vec::new());
    let is_submitting = RwSignal::new(false);

    let show_new_client = RwSignal::new(false);
    let show_new_field = RwSignal::new(false);
    let show_new_lot = RwSignal::new(false);

    let title = if initial.is_some() {
        "Editar orden de trabajo"
    } else {
        "Nueva orden de trabajo"
    };

    let field_error = move |field: &'static str| {
        Signal::derive(move || issues.with(|list| issue_message(list, field)))
    };

    // Recarga las opciones de campo para el cliente elegido; la respuesta se
    // descarta si la cadena ya avanzó de generación.
    let load_fields = move |client_id: EntityId, generation: u64| {
        spawn_local(async move {
            match field_api::fetch_fields().await {
                Ok(all) => {
                    if chain.with_untracked(|c| c.is_current(generation)) {
                        field_options.set(fields_of_client(&all, Some(client_id)));
                    }
                }
                Err(e) => report_api_error(session, toast, &e),
            }
        });
    };

    let load_lots = move |field_id: EntityId, generation: u64| {
        spawn_local(async move {
            match lot_api::fetch_lots().await {
                Ok(all) => {
                    if chain.with_untracked(|c| c.is_current(generation)) {
                        lot_options.set(lots_of_field(&all, Some(field_id)));
                    }
                }
                Err(e) => report_api_error(session, toast, &e),
            }
        });
    };

    let reload_clients = move || {
        spawn_local(async move {
            match client_api::fetch_clients().await {
                Ok(list) => clients.set(list),
                Err(e) => report_api_error(session, toast, &e),
            }
        });
    };

    // Carga inicial de catálogos; en una edición se siembra la cadena con la
    // jerarquía de la orden y se cargan sus opciones dependientes.
    let seeded = initial.clone();
    Effect::new(move |_| {
        reload_clients();
        spawn_local(async move {
            match machinery_api::fetch_machinery().await {
                Ok(list) => machinery.set(list),
                Err(e) => report_api_error(session, toast, &e),
            }
        });
        spawn_local(async move {
            match service_api::fetch_services().await {
                Ok(list) => services.set(list),
                Err(e) => report_api_error(session, toast, &e),
            }
        });

        if let Some(order) = seeded.clone() {
            let generation = chain.try_update(|c| {
                c.set_client(order.client_id);
                let generation = c.set_field(order.field_id).unwrap_or_default();
                for detail in &order.lot_details {
                    let _ = c.toggle_lot(detail.lot_id);
                }
                generation
            });
            if let Some(generation) = generation {
                load_fields(order.client_id, generation);
                load_lots(order.field_id, generation);
            }
        }
    });

    let handle_client_change = move |value: String| {
        if value == CREATE_NEW {
            show_new_client.set(true);
            return;
        }
        if value.is_empty() {
            chain.update(|c| {
                c.clear_client();
            });
            field_options.set(Vec::new());
            lot_options.set(Vec::new());
            return;
        }
        let Ok(id) = value.parse::<EntityId>() else {
            return;
        };
        let generation = chain.try_update(|c| c.set_client(id)).unwrap_or_default();
        field_options.set(Vec::new());
        lot_options.set(Vec::new());
        load_fields(id, generation);
    };

    let handle_field_change = move |value: String| {
        if value == CREATE_NEW {
            show_new_field.set(true);
            return;
        }
        if value.is_empty() {
            chain.update(|c| {
                c.clear_field();
            });
            lot_options.set(Vec::new());
            return;
        }
        let Ok(id) = value.parse::<EntityId>() else {
            return;
        };
        match chain.try_update(|c| c.set_field(id)) {
            Some(Ok(generation)) => {
                lot_options.set(Vec::new());
                load_lots(id, generation);
            }
            Some(Err(reason)) => toast.warning(reason),
            None => {}
        }
    };

    let handle_service_change = move |value: String| {
        form.update(|f| f.service_id = value.parse::<EntityId>().ok());
    };

    let toggle_lot = move |id: EntityId| {
        let result = chain.try_update(|c| c.toggle_lot(id));
        if let Some(Err(reason)) = result {
            toast.warning(reason);
        }
    };

    let toggle_machinery = move |id: EntityId| {
        machinery_sel.update(|sel| {
            if let Some(pos) = sel.iter().position(|m| *m == id) {
                sel.remove(pos);
            } else {
                sel.push(id);
            }
        });
    };

    // Alta anidada: el id recién creado se escribe en la cadena y las
    // opciones dependientes se recargan del backend.
    let handle_client_created = Callback::new(move |created: Option<Client>| {
        show_new_client.set(false);
        let Some(client) = created else {
            return;
        };
        reload_clients();
        let generation = chain
            .try_update(|c| c.set_client(client.id))
            .unwrap_or_default();
        field_options.set(Vec::new());
        lot_options.set(Vec::new());
        load_fields(client.id, generation);
        toast.success("Cliente creado");
    });

    let handle_field_created = Callback::new(move |created: Option<Field>| {
        show_new_field.set(false);
        let Some(field) = created else {
            return;
        };
        match chain.try_update(|c| c.set_field(field.id)) {
            Some(Ok(generation)) => {
                lot_options.set(Vec::new());
                load_lots(field.id, generation);
                toast.success("Campo creado");
            }
            Some(Err(reason)) => toast.warning(reason),
            None => {}
        }
    });

    let handle_lot_created = Callback::new(move |created: Option<Lot>| {
        show_new_lot.set(false);
        let Some(lot) = created else {
            return;
        };
        let field_id = chain.with_untracked(|c| c.field_id());
        if let Some(field_id) = field_id {
            let generation = chain.with_untracked(|c| c.generation());
            load_lots(field_id, generation);
        }
        let _ = chain.try_update(|c| c.toggle_lot(lot.id));
        toast.success("Lote creado");
    });

    let handle_save = move |_| {
        if is_submitting.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        let payload = chain.with_untracked(|c| {
            machinery_sel.with_untracked(|sel| current.to_payload(c, sel))
        });
        match payload {
            Err(list) => {
                toast.warning(format!("Hay {} datos con errores", list.len()));
                issues.set(list);
            }
            Ok(payload) => {
                issues.set(Vec::new());
                is_submitting.set(true);
                spawn_local(async move {
                    let outcome = match current.id {
                        Some(id) => api::update_work_order(id, &payload).await.map(|_| None),
                        None => api::create_work_order(&payload).await.map(Some),
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

    let client_value = Signal::derive(move || {
        chain.with(|c| c.client_id().map(|id| id.to_string()).unwrap_or_default())
    });
    let field_value = Signal::derive(move || {
        chain.with(|c| c.field_id().map(|id| id.to_string()).unwrap_or_default())
    });
    let service_value = Signal::derive(move || {
        form.with(|f| f.service_id.map(|id| id.to_string()).unwrap_or_default())
    });

    let client_options = Signal::derive(move || {
        clients.with(|list| select_options(list, "Seleccionar cliente...", "+ Nuevo cliente"))
    });
    let field_select_options = Signal::derive(move || {
        field_options.with(|list| select_options(list, "Seleccionar campo...", "+ Nuevo campo"))
    });
    let service_options = Signal::derive(move || {
        services.with(|list| {
            let mut options = vec![(String::new(), "Seleccionar servicio...".to_string())];
            options.extend(
                list.iter()
                    .map(|s| (s.picker_id().to_string(), s.picker_label())),
            );
            options
        })
    });

    view! {
        <Modal title=title on_close=on_cancel>
            <form class="form" on:submit=|ev| ev.prevent_default()>
                <Input
                    label="Nombre"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    error=field_error("name")
                />

                <Select
                    label="Cliente"
                    value=client_value
                    options=client_options
                    on_change=Callback::new(handle_client_change)
                    error=field_error("client")
                />
                <Select
                    label="Campo"
                    value=field_value
                    options=field_select_options
                    disabled=Signal::derive(move || chain.with(|c| !c.fields_enabled()))
                    on_change=Callback::new(handle_field_change)
                    error=field_error("field")
                />

                <div class="form__group">
                    <label class="form__label">"Lotes"</label>
                    {move || {
                        if chain.with(|c| !c.lots_enabled()) {
                            view! {
                                <p class="form__hint">
                                    "Seleccioná un campo para elegir sus lotes."
                                </p>
                            }
                            .into_any()
                        } else if lot_options.with(|l| l.is_empty()) {
                            view! {
                                <p class="form__hint">"El campo no tiene lotes cargados."</p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="form__checkbox-list">
                                    <For
                                        each=move || lot_options.get()
                                        key=|lot| lot.id
                                        children=move |lot| {
                                            let lot_id = lot.id;
                                            let checked = Signal::derive(move || {
                                                chain.with(|c| c.lot_ids().contains(&lot_id))
                                            });
                                            view! {
                                                <div class="form__checkbox-wrapper">
                                                    <input
                                                        type="checkbox"
                                                        class="form__checkbox"
                                                        checked=move || checked.get()
                                                        on:change=move |_| toggle_lot(lot_id)
                                                    />
                                                    <label class="form__checkbox-label">
                                                        {lot.picker_label()}
                                                    </label>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }
                    }}
                    {move || {
                        issues
                            .with(|list| issue_message(list, "lots"))
                            .map(|message| view! { <span class="form__error">{message}</span> })
                    }}
                    <Show when=move || chain.with(|c| c.lots_enabled())>
                        <Button
                            variant="ghost"
                            on_click=Callback::new(move |_| show_new_lot.set(true))
                        >
                            "+ Nuevo lote"
                        </Button>
                    </Show>
                </div>

                <Select
                    label="Servicio"
                    value=service_value
                    options=service_options
                    on_change=Callback::new(handle_service_change)
                    error=field_error("service")
                />

                <div class="form__group">
                    <label class="form__label">"Maquinaria"</label>
                    {move || {
                        if machinery.with(|m| m.is_empty()) {
                            view! {
                                <p class="form__hint">"No hay maquinaria cargada."</p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="form__checkbox-list">
                                    <For
                                        each=move || machinery.get()
                                        key=|item| item.id
                                        children=move |item| {
                                            let machinery_id = item.id;
                                            let checked = Signal::derive(move || {
                                                machinery_sel
                                                    .with(|sel| sel.contains(&machinery_id))
                                            });
                                            view! {
                                                <div class="form__checkbox-wrapper">
                                                    <input
                                                        type="checkbox"
                                                        class="form__checkbox"
                                                        checked=move || checked.get()
                                                        on:change=move |_| toggle_machinery(machinery_id)
                                                    />
                                                    <label class="form__checkbox-label">
                                                        {item.picker_label()}
                                                    </label>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>

                <Input
                    label="Fecha de inicio"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.init_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.init_date = v))
                    error=field_error("init_date")
                />
                <Input
                    label="Fecha de fin (opcional)"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.finish_date.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.finish_date = v))
                    error=field_error("finish_date")
                />
                <Input
                    label="Precio (opcional)"
                    value=Signal::derive(move || form.with(|f| f.price.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.price = v))
                    error=field_error("price")
                />
                <Select
                    label="Estado"
                    value=Signal::derive(move || form.with(|f| f.status.as_str().to_string()))
                    options=status_options()
                    on_change=Callback::new(move |v: String| {
                        if let Some(status) = WorkOrderStatus::from_str_label(&v) {
                            form.update(|f| f.status = status);
                        }
                    })
                />
                <Textarea
                    label="Observaciones"
                    value=Signal::derive(move || form.with(|f| f.observation.clone()))
                    on_input=Callback::new(move |v| form.update(|f| f.observation = v))
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

            <Show when=move || show_new_client.get()>
                <ClientDetails
                    on_saved=handle_client_created
                    on_cancel=Callback::new(move |_| show_new_client.set(false))
                />
            </Show>
            <Show when=move || show_new_field.get()>
                {move || {
                    chain
                        .with_untracked(|c| c.client_id())
                        .map(|client_id| view! {
                            <FieldDetails
                                client_id=client_id
                                on_saved=handle_field_created
                                on_cancel=Callback::new(move |_| show_new_field.set(false))
                            />
                        })
                }}
            </Show>
            <Show when=move || show_new_lot.get()>
                {move || {
                    chain
                        .with_untracked(|c| c.field_id())
                        .map(|field_id| view! {
                            <LotDetails
                                field_id=field_id
                                on_saved=handle_lot_created
                                on_cancel=Callback::new(move |_| show_new_lot.set(false))
                            />
                        })
                }}
            </Show>
        </Modal>
    }
}
