pub mod details;
pub mod fields_view;
pub mod list;

use contracts::domain::client::Client;
use contracts::shared::navigation::{DrillLevel, DrillStack, RemoteData};
use leptos::prelude::*;

use crate::domain::field::ui::lots_view::FieldLotsView;
use fields_view::ClientFieldsView;
use list::ClientList;

/// Página de clientes con navegación maestro-detalle:
/// lista de clientes → campos del cliente → lotes del campo.
///
/// La lista base se cachea acá afuera de la pila: volver de un nivel hijo no
/// la refetchea salvo que el hijo la haya marcado desactualizada.
#[component]
pub fn ClientsPage() -> impl IntoView {
    let stack = RwSignal::new(DrillStack::new());
    let clients: RwSignal<RemoteData<Vec<Client>>> = RwSignal::new(RemoteData::Idle);

    let handle_back = Callback::new(move |_: ()| {
        let reload = stack
            .try_update(|s| s.pop())
            .unwrap_or(false);
        if reload {
            clients.set(RemoteData::Idle);
        }
    });

    view! {
        {move || match stack.get().current() {
            DrillLevel::Clients => view! {
                <ClientList clients=clients stack=stack />
            }
            .into_any(),
            DrillLevel::ClientFields { client_id } => view! {
                <ClientFieldsView client_id=client_id stack=stack on_back=handle_back />
            }
            .into_any(),
            DrillLevel::FieldLots { field_id, .. } => view! {
                <FieldLotsView field_id=field_id stack=stack on_back=handle_back />
            }
            .into_any(),
        }}
    }
}
