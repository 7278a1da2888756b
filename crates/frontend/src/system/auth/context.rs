use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::api_utils::ApiError;
use crate::shared::toast::ToastService;

/// Estado de la sesión actual. `checked` pasa a `true` cuando terminó el
/// sondeo inicial contra `/users/me`, con o sin usuario.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub checked: bool,
}

/// Único dueño del valor "sesión actual": se inicializa al arrancar y solo
/// lo mutan login/logout. Los consumidores se suscriben vía contexto.
#[derive(Clone, Copy)]
pub struct SessionService {
    state: RwSignal<SessionState>,
}

impl SessionService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
        }
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.get().user
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    pub fn is_checked(&self) -> bool {
        self.state.with(|s| s.checked)
    }

    pub fn set_user(&self, user: UserInfo) {
        self.state.set(SessionState {
            user: Some(user),
            checked: true,
        });
    }

    /// Cierra la sesión localmente; la vista vuelve al login.
    pub fn clear(&self) {
        self.state.set(SessionState {
            user: None,
            checked: true,
        });
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let session = SessionService::new();
    provide_context(session);

    // Sondeo inicial: ¿hay cookie de sesión vigente? El helper HTTP ya
    // intenta un refresh ante 401, así que acá alcanza con un intento.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::current_user().await {
                Ok(user) => session.set_user(user),
                Err(_) => session.clear(),
            }
        });
    });

    children()
}

/// Hook to access the session service
pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionProvider not found in component tree")
}

/// Manejo uniforme de errores de API en las vistas: un 401 ya reintentado
/// corta la sesión; todo lo demás es una notificación descartable.
pub fn report_api_error(session: SessionService, toast: ToastService, error: &ApiError) {
    if matches!(error, ApiError::Unauthorized) {
        session.clear();
    }
    toast.error(error.to_string());
}
