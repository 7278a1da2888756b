use contracts::shared::validation::issue_message;
use contracts::system::auth::SignupForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (signup_mode, set_signup_mode) = signal(false);

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"AgroGestión"</h1>
                <Show
                    when=move || signup_mode.get()
                    fallback=move || view! {
                        <LoginForm on_signup=Callback::new(move |_| set_signup_mode.set(true)) />
                    }
                >
                    <SignupPane on_login=Callback::new(move |_| set_signup_mode.set(false)) />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LoginForm(on_signup: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(user) => {
                    // La cookie quedó puesta; esto conmuta al MainLayout.
                    session.set_user(user);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("No se pudo iniciar sesión: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <h2>"Iniciar sesión"</h2>

        <Show when=move || error_message.get().is_some()>
            <div class="error-message">
                {move || error_message.get().unwrap_or_default()}
            </div>
        </Show>

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <div class="form-group">
                <label for="password">"Contraseña"</label>
                <input
                    type="password"
                    id="password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required
                    disabled=move || is_loading.get()
                />
            </div>

            <button
                type="submit"
                class="btn-primary"
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
            </button>
        </form>

        <button class="login-box__switch" on:click=move |_| on_signup.run(())>
            "¿No tenés cuenta? Registrate"
        </button>
    }
}

#[component]
fn SignupPane(on_login: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let issues = RwSignal::new(Vec::new());
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();

    let inline = move |field: &'static str| issues.with(|list| issue_message(list, field));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match form.get().to_request() {
            Ok(request) => request,
            Err(found) => {
                issues.set(found);
                return;
            }
        };
        issues.set(Vec::new());
        set_is_loading.set(true);

        spawn_local(async move {
            match api::signup(&request).await {
                Ok(user) => session.set_user(user),
                Err(e) => {
                    issues.set(vec![contracts::shared::validation::FieldIssue::new(
                        "form",
                        format!("No se pudo registrar: {}", e),
                    )]);
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <h2>"Crear cuenta"</h2>

        {move || inline("form").map(|message| view! {
            <div class="error-message">{message}</div>
        })}

        <form on:submit=on_submit>
            <div class="form-group">
                <label for="signup-name">"Nombre"</label>
                <input
                    type="text"
                    id="signup-name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                {move || inline("name").map(|m| view! { <span class="form__error">{m}</span> })}
            </div>

            <div class="form-group">
                <label for="signup-email">"Email"</label>
                <input
                    type="email"
                    id="signup-email"
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                {move || inline("email").map(|m| view! { <span class="form__error">{m}</span> })}
            </div>

            <div class="form-group">
                <label for="signup-password">"Contraseña"</label>
                <input
                    type="password"
                    id="signup-password"
                    prop:value=move || form.get().password
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                {move || inline("password").map(|m| view! { <span class="form__error">{m}</span> })}
            </div>

            <div class="form-group">
                <label for="signup-password-confirm">"Repetir contraseña"</label>
                <input
                    type="password"
                    id="signup-password-confirm"
                    prop:value=move || form.get().password_confirm
                    on:input=move |ev| form.update(|f| f.password_confirm = event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
                {move || inline("password_confirm").map(|m| view! { <span class="form__error">{m}</span> })}
            </div>

            <button
                type="submit"
                class="btn-primary"
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Creando..." } else { "Crear cuenta" }}
            </button>
        </form>

        <button class="login-box__switch" on:click=move |_| on_login.run(())>
            "Ya tengo cuenta"
        </button>
    }
}
