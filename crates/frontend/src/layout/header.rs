use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::toast::use_toast;
use crate::system::auth::context::use_session;
use crate::system::pages::profile::ProfileModal;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();
    let toast = use_toast();
    let (show_profile, set_show_profile) = signal(false);

    let user_name = move || {
        session
            .user()
            .map(|u| u.name)
            .unwrap_or_else(|| "-".to_string())
    };

    let handle_logout = move |_| {
        spawn_local(async move {
            match crate::system::auth::api::logout().await {
                Ok(()) => session.clear(),
                Err(e) => {
                    // La cookie puede haber muerto igual; cerramos localmente.
                    log::warn!("logout failed: {}", e);
                    session.clear();
                    toast.warning("No se pudo cerrar la sesión en el servidor");
                }
            }
        });
    };

    view! {
        <header class="top-header">
            <div class="top-header__title">"Panel de administración"</div>
            <div class="top-header__actions">
                <button
                    class="top-header__user"
                    on:click=move |_| set_show_profile.set(true)
                >
                    {user_name}
                </button>
                <button class="button button--ghost" on:click=handle_logout>
                    "Salir"
                </button>
            </div>

            <Show when=move || show_profile.get()>
                <ProfileModal on_close=Callback::new(move |_| set_show_profile.set(false)) />
            </Show>
        </header>
    }
}
