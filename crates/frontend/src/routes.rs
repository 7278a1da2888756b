use leptos::prelude::*;

use crate::dashboards::home::HomePage;
use crate::domain::client::ui::ClientsPage;
use crate::domain::machinery::ui::MachineryPage;
use crate::domain::work_order::ui::WorkOrdersPage;
use crate::layout::Shell;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
// Sin router: la página activa es un enum en una señal, y el drill-down
// por debajo de cada página se maneja con su propia pila tipada.

/// Páginas de primer nivel accesibles desde la barra lateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Clients,
    Machinery,
    WorkOrders,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Clients, Page::Machinery, Page::WorkOrders];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Inicio",
            Page::Clients => "Clientes",
            Page::Machinery => "Maquinarias",
            Page::WorkOrders => "Órdenes de trabajo",
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let page = RwSignal::new(Page::default());
    provide_context(page);

    view! {
        <Shell>
            {move || match page.get() {
                Page::Home => view! { <HomePage /> }.into_any(),
                Page::Clients => view! { <ClientsPage /> }.into_any(),
                Page::Machinery => view! { <MachineryPage /> }.into_any(),
                Page::WorkOrders => view! { <WorkOrdersPage /> }.into_any(),
            }}
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_checked()
            fallback=|| view! { <div class="app-splash">"Cargando sesión..."</div> }
        >
            <Show
                when=move || session.is_authenticated()
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
