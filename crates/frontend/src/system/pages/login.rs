use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context;

/// Combined sign-in / sign-up screen shown whenever no valid session
/// exists.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = context::use_auth();
    let (registering, set_registering) = signal(false);
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let email_val = email.get();
        let password_val = password.get();
        let is_register = registering.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            let outcome = if is_register {
                context::do_register(set_auth_state, username_val, email_val, password_val).await
            } else {
                context::do_login(set_auth_state, email_val, password_val).await
            };
            if let Err(e) = outcome {
                set_error_message.set(Some(e));
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Refashion"</h1>
                <h2>{move || if registering.get() { "Create an account" } else { "Sign in" }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || registering.get()>
                        <div class="form-group">
                            <label for="username">"Username"</label>
                            <input
                                type="text"
                                id="username"
                                value=move || username.get()
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || {
                            if is_loading.get() {
                                "Please wait..."
                            } else if registering.get() {
                                "Sign up"
                            } else {
                                "Sign in"
                            }
                        }}
                    </button>
                </form>

                <button
                    class="btn-link"
                    on:click=move |_| set_registering.update(|v| *v = !*v)
                >
                    {move || {
                        if registering.get() {
                            "Already have an account? Sign in"
                        } else {
                            "New to Refashion? Create an account"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
