use leptos::prelude::*;

use crate::shared::format::format_money;
use crate::shared::integrations::currency::{fetch_dollar_quote, DollarQuote};
use crate::shared::integrations::weather::{
    describe_weather_code, fetch_weather, WeatherSnapshot,
};
use crate::system::auth::context::use_session;

// Base de operaciones (Buenos Aires) para la tarjeta de clima.
const BASE_LAT: f64 = -34.6037;
const BASE_LONG: f64 = -58.3816;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    let greeting = move || {
        session
            .user()
            .map(|u| format!("Hola, {}", u.name))
            .unwrap_or_else(|| "Hola".to_string())
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{greeting}</h1>
                </div>
            </div>

            <div class="card-grid">
                <CurrencyCard />
                <WeatherCard />
            </div>
        </div>
    }
}

#[component]
fn CurrencyCard() -> impl IntoView {
    let (quote, set_quote) = signal(Option::<DollarQuote>::None);
    let (error, set_error) = signal(Option::<String>::None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_dollar_quote().await {
            Ok(q) => set_quote.set(Some(q)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__title">"Dólar oficial"</div>
            {move || match (quote.get(), error.get()) {
                (Some(q), _) => view! {
                    <div class="stat-card__body">
                        <div class="stat-card__value">{format_money(q.venta)}</div>
                        <div class="stat-card__detail">
                            {format!("Compra {}", format_money(q.compra))}
                        </div>
                    </div>
                }.into_any(),
                (None, Some(e)) => view! {
                    <div class="stat-card__body stat-card__body--error">{e}</div>
                }.into_any(),
                (None, None) => view! {
                    <div class="stat-card__body">"Cargando..."</div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn WeatherCard() -> impl IntoView {
    let (snapshot, set_snapshot) = signal(Option::<WeatherSnapshot>::None);
    let (error, set_error) = signal(Option::<String>::None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_weather(BASE_LAT, BASE_LONG).await {
            Ok(w) => set_snapshot.set(Some(w)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__title">"Clima en la base"</div>
            {move || match (snapshot.get(), error.get()) {
                (Some(w), _) => view! {
                    <div class="stat-card__body">
                        <div class="stat-card__value">{format!("{:.0}°C", w.temperature)}</div>
                        <div class="stat-card__detail">
                            {format!(
                                "{} · viento {:.0} km/h",
                                describe_weather_code(w.weather_code),
                                w.windspeed
                            )}
                        </div>
                    </div>
                }.into_any(),
                (None, Some(e)) => view! {
                    <div class="stat-card__body stat-card__body--error">{e}</div>
                }.into_any(),
                (None, None) => view! {
                    <div class="stat-card__body">"Cargando..."</div>
                }.into_any(),
            }}
        </div>
    }
}
