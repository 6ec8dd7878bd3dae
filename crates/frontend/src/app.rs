use crate::layout::global_context::AppGlobalContext;
use crate::layout::toast::ToastService;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Provide ToastService for centralized user-facing notifications.
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
