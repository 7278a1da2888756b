use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Notificaciones disponibles para toda la app vía contexto.
    provide_context(ToastService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
            <ToastHost />
        </SessionProvider>
    }
}
