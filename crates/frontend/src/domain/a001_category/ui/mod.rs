use contracts::domain::a001_category::{Category, CreateCategoryDto, UpdateCategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api;
use crate::layout::toast::use_toast;

/// Admin back office: category list with inline rename.
#[component]
pub fn AdminCategoriesPage() -> impl IntoView {
    let toast = use_toast();
    let (categories, set_categories) = signal(Vec::<Category>::new());

    let (new_name, set_new_name) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());

    let reload = move || {
        spawn_local(async move {
            match api::fetch_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => toast.error(e),
            }
        });
    };

    Effect::new(move |_| {
        reload();
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = CreateCategoryDto {
            name: new_name.get().trim().to_string(),
            description: new_description.get().trim().to_string(),
        };
        if dto.name.is_empty() {
            toast.error("Category name is required");
            return;
        }
        spawn_local(async move {
            match api::create_category(dto).await {
                Ok(_) => {
                    toast.success("Category created");
                    set_new_name.set(String::new());
                    set_new_description.set(String::new());
                    reload();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    let on_rename = move |category: Category, name: String| {
        let name = name.trim().to_string();
        if name.is_empty() || name == category.name {
            return;
        }
        let dto = UpdateCategoryDto {
            id: category.id.clone(),
            name,
            description: category.description.clone(),
        };
        spawn_local(async move {
            match api::update_category(dto).await {
                Ok(_) => reload(),
                Err(e) => toast.error(e),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_category(&id).await {
                Ok(()) => {
                    toast.success("Category deleted");
                    reload();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page admin-categories-page">
            <h1>"Categories"</h1>

            <form class="inline-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Name"
                    value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    value=move || new_description.get()
                    on:input=move |ev| set_new_description.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary">"Add category"</button>
            </form>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || categories.get()
                        key=|c| c.id.clone()
                        children=move |category: Category| {
                            let for_rename = category.clone();
                            let delete_id = category.id.clone();
                            view! {
                                <tr>
                                    <td>
                                        <input
                                            type="text"
                                            value=category.name.clone()
                                            on:change=move |ev| {
                                                on_rename(for_rename.clone(), event_target_value(&ev))
                                            }
                                        />
                                    </td>
                                    <td>{category.description.clone()}</td>
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
        </div>
    }
}
