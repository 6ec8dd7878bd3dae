use contracts::domain::a004_order::Order;
use contracts::enums::{OrderStatus, PaymentStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_order::api;
use crate::domain::a004_order::presentation::{payment_badge, status_badge};
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_datetime;
use crate::shared::money::format_price;

/// Admin back office: every order, filterable by status, with direct
/// status and payment dropdowns bound to the update endpoints.
#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (filter_status, set_filter_status) = signal(String::new());
    let (is_loaded, set_is_loaded) = signal(false);

    // Keeps a slow response for a superseded status filter from
    // overwriting the newer result.
    let fetch_generation = StoredValue::new(0u64);

    let reload = move || {
        let status = filter_status.get_untracked();
        let generation = fetch_generation.with_value(|g| g + 1);
        fetch_generation.set_value(generation);
        spawn_local(async move {
            let filter = if status.is_empty() {
                None
            } else {
                Some(status.as_str())
            };
            match api::fetch_orders(filter).await {
                Ok(list) => {
                    if fetch_generation.get_value() == generation {
                        set_orders.set(list);
                        set_is_loaded.set(true);
                    }
                }
                Err(e) => toast.error(e),
            }
        });
    };

    Effect::new(move |_| {
        // Re-fetch whenever the filter changes.
        filter_status.track();
        reload();
    });

    let on_status_change = move |order_id: String, status: String| {
        spawn_local(async move {
            match api::update_status(&order_id, &status).await {
                Ok(_) => reload(),
                Err(e) => toast.error(e),
            }
        });
    };

    let on_payment_change = move |order_id: String, payment: String| {
        spawn_local(async move {
            match api::update_payment_status(&order_id, &payment).await {
                Ok(_) => reload(),
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page admin-orders-page">
            <h1>"Orders"</h1>

            <label class="filter-label">
                "Status filter"
                <select on:change=move |ev| set_filter_status.set(event_target_value(&ev))>
                    <option value="">"All"</option>
                    {OrderStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <Show when=move || is_loaded.get() fallback=|| view! { <p>"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Created"</th>
                            <th>"Buyer"</th>
                            <th>"Seller"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th>"Payment"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || orders.get()
                            key=|order| order.order_id.clone()
                            children=move |order: Order| {
                                let open_id = order.order_id.clone();
                                let status_id = order.order_id.clone();
                                let payment_id = order.order_id.clone();
                                let badge = status_badge(&order.status);
                                let pay = payment_badge(&order.payment_status);
                                view! {
                                    <tr>
                                        <td
                                            class="row-link"
                                            on:click=move |_| {
                                                ctx.navigate(Page::Order { id: open_id.clone() })
                                            }
                                        >
                                            {order.order_id.clone()}
                                        </td>
                                        <td>{format_datetime(&order.created_at)}</td>
                                        <td>{order.buyer_id.clone()}</td>
                                        <td>{order.seller_id.clone()}</td>
                                        <td>{format_price(order.total_amount)}</td>
                                        <td>
                                            <span class=badge.css_class title=badge.description>
                                                {badge.label}
                                            </span>
                                            <select on:change=move |ev| on_status_change(
                                                status_id.clone(),
                                                event_target_value(&ev),
                                            )>
                                                {OrderStatus::ALL
                                                    .iter()
                                                    .map(|s| {
                                                        view! {
                                                            <option
                                                                value=s.as_str()
                                                                selected=order.status == s.as_str()
                                                            >
                                                                {s.label()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </td>
                                        <td>
                                            <span class=pay.css_class title=pay.description>
                                                {pay.label}
                                            </span>
                                            <select on:change=move |ev| on_payment_change(
                                                payment_id.clone(),
                                                event_target_value(&ev),
                                            )>
                                                {PaymentStatus::ALL
                                                    .iter()
                                                    .map(|s| {
                                                        view! {
                                                            <option
                                                                value=s.as_str()
                                                                selected=order.payment_status == s.as_str()
                                                            >
                                                                {s.label()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
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
