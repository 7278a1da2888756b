use leptos::prelude::*;

use crate::routes::Page;

#[component]
pub fn Sidebar() -> impl IntoView {
    let page = use_context::<RwSignal<Page>>().expect("Page signal not found in context");

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"AgroGestión"</div>
            <ul class="sidebar__menu">
                {Page::ALL
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="sidebar__item">
                                <button
                                    class="sidebar__link"
                                    class:sidebar__link--active=move || page.get() == item
                                    on:click=move |_| page.set(item)
                                >
                                    {item.title()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
