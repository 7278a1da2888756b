pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use header::TopHeader;
use sidebar::Sidebar;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <div class="app-main">
                    {children()}
                </div>
            </div>
        </div>
    }
}
