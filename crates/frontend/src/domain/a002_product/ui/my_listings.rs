use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::{CreateProductDto, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::money::format_price;
use crate::shared::upload::{file_from_input, upload_image};
use crate::system::auth::context::current_user_id;

/// Seller workspace: create listings and manage existing ones.
#[component]
pub fn MyListingsPage() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (products, set_products) = signal(Vec::<Product>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (reload, set_reload) = signal(0u32);

    // Create form state.
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (category_id, set_category_id) = signal(String::new());
    let (image_urls, set_image_urls) = signal(Vec::<String>::new());
    let (is_uploading, set_is_uploading) = signal(false);
    let (is_saving, set_is_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match category_api::fetch_categories().await {
                Ok(list) => set_categories.set(list),
                Err(e) => toast.error(e),
            }
        });
    });

    Effect::new(move |_| {
        reload.track();
        let seller = current_user_id();
        spawn_local(async move {
            match api::fetch_seller_products(&seller).await {
                Ok(list) => set_products.set(list),
                Err(e) => toast.error(e),
            }
        });
    });

    let on_photo = move |ev: leptos::ev::Event| {
        let Some(file) = file_from_input(&ev) else {
            return;
        };
        set_is_uploading.set(true);
        spawn_local(async move {
            match upload_image(file).await {
                Ok(url) => set_image_urls.update(|urls| urls.push(url)),
                Err(e) => toast.error(e),
            }
            set_is_uploading.set(false);
        });
    };

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_saving.get() || is_uploading.get() {
            return;
        }
        let parsed_price = match price.get().trim().parse::<f64>() {
            Ok(p) if p > 0.0 => p,
            _ => {
                toast.error("Enter a price greater than zero");
                return;
            }
        };
        if name.get().trim().is_empty() {
            toast.error("Enter a listing name");
            return;
        }
        if category_id.get().is_empty() {
            toast.error("Pick a category");
            return;
        }
        let dto = CreateProductDto {
            seller_id: current_user_id(),
            category_id: category_id.get(),
            name: name.get().trim().to_string(),
            description: description.get().trim().to_string(),
            price: parsed_price,
            image_urls: image_urls.get(),
        };
        set_is_saving.set(true);
        spawn_local(async move {
            match api::create_product(dto).await {
                Ok(_) => {
                    toast.success("Listing created");
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_price.set(String::new());
                    set_image_urls.set(Vec::new());
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => toast.error(e),
            }
            set_is_saving.set(false);
        });
    };

    let on_toggle_active = move |id: String, active: bool| {
        spawn_local(async move {
            match api::set_active(&id, active).await {
                Ok(_) => set_reload.update(|n| *n += 1),
                Err(e) => toast.error(e),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    toast.success("Listing removed");
                    set_reload.update(|n| *n += 1);
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page my-listings-page">
            <h1>"My listings"</h1>

            <form class="listing-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="What are you selling?"
                    value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Condition, size, story..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="text"
                    placeholder="Price"
                    value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_category_id.set(event_target_value(&ev))>
                    <option value="">"Category..."</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id.clone()
                        children=|c: Category| {
                            view! { <option value=c.id.clone()>{c.name.clone()}</option> }
                        }
                    />
                </select>
                <input type="file" accept="image/*" on:change=on_photo />
                <Show when=move || is_uploading.get()>
                    <span class="upload-hint">"Uploading photo..."</span>
                </Show>
                <div class="photo-strip">
                    <For
                        each=move || image_urls.get()
                        key=|url| url.clone()
                        children=|url: String| view! { <img class="photo-thumb" src=url /> }
                    />
                </div>
                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_saving.get() || is_uploading.get()
                >
                    "Publish listing"
                </button>
            </form>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Active"</th>
                        <th>"Featured"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || products.get()
                        key=|p| p.id.clone()
                        children=move |p: Product| {
                            let toggle_id = p.id.clone();
                            let delete_id = p.id.clone();
                            let promote_id = p.id.clone();
                            let active = p.active;
                            view! {
                                <tr>
                                    <td>{p.name.clone()}</td>
                                    <td>{format_price(p.price)}</td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            checked=active
                                            on:change=move |_| on_toggle_active(
                                                toggle_id.clone(),
                                                !active,
                                            )
                                        />
                                    </td>
                                    <td>{if p.featured { "Featured" } else { "-" }}</td>
                                    <td>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| {
                                                ctx.navigate(Page::FeaturedRequest {
                                                    product_id: promote_id.clone(),
                                                })
                                            }
                                        >
                                            "Promote"
                                        </button>
                                        <button
                                            class="btn-link danger"
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
