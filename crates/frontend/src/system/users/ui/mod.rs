use contracts::enums::UserRole;
use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_date;
use crate::system::users::api;

/// Admin back office: user management table with inline role editing.
#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let toast = use_toast();
    let (users, set_users) = signal(Vec::<User>::new());
    let (is_loaded, set_is_loaded) = signal(false);

    // New-user form state.
    let (new_username, set_new_username) = signal(String::new());
    let (new_email, set_new_email) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());

    let reload = move || {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => {
                    set_users.set(list);
                    set_is_loaded.set(true);
                }
                Err(e) => toast.error(e),
            }
        });
    };

    Effect::new(move |_| {
        reload();
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = CreateUserDto {
            username: new_username.get(),
            email: new_email.get(),
            password: new_password.get(),
            role: UserRole::Buyer,
        };
        if dto.username.trim().is_empty() || dto.email.trim().is_empty() {
            toast.error("Username and email are required");
            return;
        }
        spawn_local(async move {
            match api::create_user(dto).await {
                Ok(_) => {
                    toast.success("User created");
                    set_new_username.set(String::new());
                    set_new_email.set(String::new());
                    set_new_password.set(String::new());
                    reload();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let on_role_change = move |user: User, role_str: String| {
        let Some(role) = UserRole::parse(&role_str) else {
            return;
        };
        let dto = UpdateUserDto {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role,
            active: user.active,
        };
        spawn_local(async move {
            match api::update_user(dto).await {
                Ok(_) => {
                    toast.success("Role updated");
                    reload();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let on_toggle_active = move |user: User| {
        let dto = UpdateUserDto {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            active: !user.active,
        };
        spawn_local(async move {
            match api::update_user(dto).await {
                Ok(_) => reload(),
                Err(e) => toast.error(e),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_user(&id).await {
                Ok(_) => {
                    toast.success("User deleted");
                    reload();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page admin-users-page">
            <h1>"Users"</h1>

            <form class="inline-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Username"
                    value=move || new_username.get()
                    on:input=move |ev| set_new_username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    value=move || new_email.get()
                    on:input=move |ev| set_new_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    value=move || new_password.get()
                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Add user"</button>
            </form>

            <Show when=move || is_loaded.get() fallback=|| view! { <p>"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Active"</th>
                            <th>"Joined"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || users.get()
                            key=|user| user.id.clone()
                            children=move |user: User| {
                                let for_role = user.clone();
                                let for_toggle = user.clone();
                                let delete_id = user.id.clone();
                                view! {
                                    <tr>
                                        <td>{user.username.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>
                                            <select on:change=move |ev| {
                                                on_role_change(for_role.clone(), event_target_value(&ev))
                                            }>
                                                <option value="BUYER" selected=user.role == UserRole::Buyer>"Buyer"</option>
                                                <option value="SELLER" selected=user.role == UserRole::Seller>"Seller"</option>
                                                <option value="ADMIN" selected=user.role == UserRole::Admin>"Admin"</option>
                                            </select>
                                        </td>
                                        <td>
                                            <input
                                                type="checkbox"
                                                checked=user.active
                                                on:change=move |_| on_toggle_active(for_toggle.clone())
                                            />
                                        </td>
                                        <td>{format_date(&user.created_at)}</td>
                                        <td>
                                            <button
                                                class="btn-danger"
                                                on:click=move |_| on_delete(delete_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
