use contracts::domain::a002_product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::api;
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_date;
use crate::shared::money::format_price;

/// Admin back office: listing moderation. Inactive products are shown too,
/// unlike the public catalog.
#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let toast = use_toast();
    let (products, set_products) = signal(Vec::<Product>::new());

    let reload = move || {
        spawn_local(async move {
            match api::fetch_all_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => toast.error(e),
            }
        });
    };

    Effect::new(move |_| {
        reload();
    });

    let on_toggle_active = move |id: String, active: bool| {
        spawn_local(async move {
            match api::set_active(&id, active).await {
                Ok(_) => reload(),
                Err(e) => toast.error(e),
            }
        });
    };

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => {
                    toast.success("Listing deleted");
                    reload();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page admin-products-page">
            <h1>"Listings"</h1>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Seller"</th>
                        <th>"Price"</th>
                        <th>"Listed"</th>
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
                            let active = p.active;
                            view! {
                                <tr class=if active { "" } else { "row-inactive" }>
                                    <td>{p.name.clone()}</td>
                                    <td>{p.seller_id.clone()}</td>
                                    <td>{format_price(p.price)}</td>
                                    <td>{format_date(&p.created_at)}</td>
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
