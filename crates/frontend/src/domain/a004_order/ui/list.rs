use contracts::domain::a004_order::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_order::api;
use crate::domain::a004_order::presentation::{payment_badge, status_badge};
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_datetime;
use crate::shared::money::format_price;
use crate::system::auth::context::current_user_id;

/// Which side of the marketplace the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    /// Orders the signed-in user placed.
    Purchases,
    /// Orders on the signed-in user's listings.
    Sales,
}

#[component]
pub fn OrdersListPage(scope: OrderScope) -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (is_loaded, set_is_loaded) = signal(false);

    Effect::new(move |_| {
        let user_id = current_user_id();
        spawn_local(async move {
            let result = match scope {
                OrderScope::Purchases => api::fetch_buyer_orders(&user_id).await,
                OrderScope::Sales => api::fetch_seller_orders(&user_id).await,
            };
            match result {
                Ok(list) => {
                    set_orders.set(list);
                    set_is_loaded.set(true);
                }
                Err(e) => toast.error(e),
            }
        });
    });

    let title = match scope {
        OrderScope::Purchases => "My purchases",
        OrderScope::Sales => "My sales",
    };

    view! {
        <div class="page orders-page">
            <h1>{title}</h1>

            <Show when=move || is_loaded.get() fallback=|| view! { <p>"Loading..."</p> }>
                <Show
                    when=move || !orders.get().is_empty()
                    fallback=|| view! { <p class="empty-state">"No orders yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Created"</th>
                                <th>"Items"</th>
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
                                    let id = order.order_id.clone();
                                    let badge = status_badge(&order.status);
                                    let pay = payment_badge(&order.payment_status);
                                    view! {
                                        <tr
                                            class="row-link"
                                            on:click=move |_| {
                                                ctx.navigate(Page::Order { id: id.clone() })
                                            }
                                        >
                                            <td>{order.order_id.clone()}</td>
                                            <td>{format_datetime(&order.created_at)}</td>
                                            <td>{order.items.len()}</td>
                                            <td>{format_price(order.total_amount)}</td>
                                            <td>
                                                <span class=badge.css_class title=badge.description>
                                                    {badge.label}
                                                </span>
                                            </td>
                                            <td>
                                                <span class=pay.css_class title=pay.description>
                                                    {pay.label}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
        </div>
    }
}
