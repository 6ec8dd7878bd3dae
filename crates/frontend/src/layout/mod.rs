pub mod global_context;
pub mod header;
pub mod toast;

use leptos::prelude::*;

use toast::ToastHost;

/// Application frame: header with navigation on top, the active page below,
/// toast stack floating above everything.
#[component]
pub fn Shell(children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="app-shell">
            <header::TopHeader />
            <main class="app-main">{children()}</main>
            <ToastHost />
        </div>
    }
}
