use contracts::domain::a004_order::Order;
use contracts::enums::{OrderStatus, PaymentStatus, UserRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_order::actions::{actions_for, OrderAction};
use crate::domain::a004_order::api;
use crate::domain::a004_order::fulfillment::FulfillmentFlow;
use crate::domain::a004_order::presentation::{payment_badge, status_badge};
use crate::domain::a005_message::ui::ChatOverlay;
use crate::domain::a005_message::SUPPORT_ADMIN_ID;
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_datetime;
use crate::shared::money::format_price;
use crate::shared::upload;
use crate::system::auth::context::current_user_id;
use crate::system::auth::guard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmKind {
    Ship,
    Delivery,
}

/// Evidence upload + confirm button for one lifecycle checkpoint. The
/// confirm request is only constructible from a successful upload; a failed
/// upload leaves the button disabled and shows the error.
#[component]
fn EvidenceConfirm(
    order_id: String,
    kind: ConfirmKind,
    on_updated: Callback<Order>,
) -> impl IntoView {
    let toast = use_toast();
    let flow = RwSignal::new(FulfillmentFlow::new());

    let on_file = move |ev: leptos::ev::Event| {
        let Some(file) = upload::file_from_input(&ev) else {
            return;
        };
        flow.update(|f| f.start_upload());
        spawn_local(async move {
            let result = upload::upload_image(file).await;
            if let Err(e) = &result {
                toast.error(e.clone());
            }
            flow.update(|f| f.on_upload_result(result));
        });
    };

    let order_id_confirm = order_id.clone();
    let on_confirm = move |_| {
        // No URL means no confirmation call, ever.
        let Some(image_url) = flow.with(|f| f.confirm_url().map(|s| s.to_string())) else {
            return;
        };
        let order_id = order_id_confirm.clone();
        let user_id = current_user_id();
        spawn_local(async move {
            let result = match kind {
                ConfirmKind::Ship => api::confirm_shipped(&order_id, &image_url, &user_id).await,
                ConfirmKind::Delivery => {
                    api::confirm_delivered(&order_id, &image_url, &user_id).await
                }
            };
            match result {
                Ok(order) => {
                    toast.success(match kind {
                        ConfirmKind::Ship => "Shipment confirmed",
                        ConfirmKind::Delivery => "Delivery confirmed",
                    });
                    on_updated.run(order);
                }
                // No optimistic update was made, so nothing to roll back.
                Err(e) => toast.error(e),
            }
        });
    };

    let (prompt, button_label) = match kind {
        ConfirmKind::Ship => ("Package photo", "Confirm shipment"),
        ConfirmKind::Delivery => ("Receipt photo", "Confirm delivery"),
    };

    view! {
        <div class="evidence-confirm">
            <label class="upload-label">
                {prompt}
                <input type="file" accept="image/*" on:change=on_file />
            </label>
            <Show when=move || flow.with(|f| f.is_uploading())>
                <span class="uploading-hint">"Uploading..."</span>
            </Show>
            <Show when=move || flow.with(|f| f.upload_error().is_some())>
                <span class="upload-error">
                    {move || flow.with(|f| f.upload_error().unwrap_or_default().to_string())}
                </span>
            </Show>
            <button
                class="btn-primary"
                disabled=move || flow.with(|f| f.confirm_url().is_none())
                on:click=on_confirm
            >
                {button_label}
            </button>
        </div>
    }
}

#[component]
fn EvidenceImage(label: &'static str, url: Option<String>) -> impl IntoView {
    url.map(|u| {
        view! {
            <figure class="evidence-image">
                <img src=u alt=label />
                <figcaption>{label}</figcaption>
            </figure>
        }
    })
}

#[component]
pub fn OrderDetailsPage(id: String) -> impl IntoView {
    let toast = use_toast();
    let (order, set_order) = signal(Option::<Order>::None);
    // Counterpart of the open chat overlay, None when closed.
    let (chat_with, set_chat_with) = signal(Option::<String>::None);

    let is_admin = guard::is_admin();

    {
        let id = id.clone();
        Effect::new(move |_| {
            let id = id.clone();
            spawn_local(async move {
                match api::fetch_order(&id).await {
                    Ok(o) => set_order.set(Some(o)),
                    Err(e) => toast.error(e),
                }
            });
        });
    }

    // The viewer's relationship to this order decides which lifecycle
    // buttons render. Admins keep their override regardless.
    let viewer_role = move |order: &Order| -> UserRole {
        if is_admin {
            UserRole::Admin
        } else if order.seller_id == current_user_id() {
            UserRole::Seller
        } else {
            UserRole::Buyer
        }
    };

    let on_updated = Callback::new(move |order: Order| set_order.set(Some(order)));

    let on_status_override = move |order_id: String, status: String| {
        spawn_local(async move {
            match api::update_status(&order_id, &status).await {
                Ok(o) => set_order.set(Some(o)),
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page order-details-page">
            {move || {
                let Some(o) = order.get() else {
                    return view! { <p>"Loading..."</p> }.into_any();
                };
                let badge = status_badge(&o.status);
                let pay = payment_badge(&o.payment_status);
                let role = viewer_role(&o);
                let actions = actions_for(o.status(), o.payment_status(), role);
                let counterpart = if role == UserRole::Seller {
                    o.buyer_id.clone()
                } else {
                    o.seller_id.clone()
                };
                let order_id = o.order_id.clone();

                view! {
                    <h1>"Order " {o.order_id.clone()}</h1>
                    <div class="order-meta">
                        <span class=badge.css_class title=badge.description>{badge.label}</span>
                        <span class=pay.css_class title=pay.description>{pay.label}</span>
                        <span class="order-date">{format_datetime(&o.created_at)}</span>
                    </div>
                    <p class="status-description">{badge.description}</p>

                    <table class="data-table order-items">
                        <thead>
                            <tr>
                                <th>"Item"</th>
                                <th>"Price"</th>
                                <th>"Qty"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {o.items
                                .iter()
                                .map(|item| {
                                    view! {
                                        <tr>
                                            <td>{item.product_name.clone()}</td>
                                            <td>{format_price(item.price)}</td>
                                            <td>{item.quantity}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                    <p class="order-total">"Total: " {format_price(o.total_amount)}</p>
                    <p class="shipping-address">"Ship to: " {o.shipping_address.clone()}</p>
                    {o.note.clone().map(|n| view! { <p class="order-note">"Note: " {n}</p> })}

                    <div class="evidence-gallery">
                        <EvidenceImage label="Payment proof" url=o.payment_screenshot_url.clone() />
                        <EvidenceImage
                            label="Package photo"
                            url=o.seller_package_image_url.clone()
                        />
                        <EvidenceImage label="Receipt photo" url=o.buyer_package_image_url.clone() />
                    </div>

                    <div class="order-actions">
                        <button
                            class="btn-secondary"
                            on:click={
                                let counterpart = counterpart.clone();
                                move |_| set_chat_with.set(Some(counterpart.clone()))
                            }
                        >
                            {if role == UserRole::Seller { "Chat with buyer" } else { "Chat with seller" }}
                        </button>

                        {actions
                            .iter()
                            .map(|action| {
                                let order_id = order_id.clone();
                                match action {
                                    OrderAction::ConfirmShipment => view! {
                                        <EvidenceConfirm
                                            order_id=order_id
                                            kind=ConfirmKind::Ship
                                            on_updated=on_updated
                                        />
                                    }
                                    .into_any(),
                                    OrderAction::ConfirmDelivery => view! {
                                        <EvidenceConfirm
                                            order_id=order_id
                                            kind=ConfirmKind::Delivery
                                            on_updated=on_updated
                                        />
                                    }
                                    .into_any(),
                                    OrderAction::ChatWithAdmin => view! {
                                        <button
                                            class="btn-secondary"
                                            on:click=move |_| {
                                                set_chat_with.set(Some(SUPPORT_ADMIN_ID.to_string()))
                                            }
                                        >
                                            "Chat with admin"
                                        </button>
                                    }
                                    .into_any(),
                                    OrderAction::OverrideStatus => view! {
                                        <label class="override-label">
                                            "Set status"
                                            <select on:change={
                                                let order_id = order_id.clone();
                                                move |ev| on_status_override(
                                                    order_id.clone(),
                                                    event_target_value(&ev),
                                                )
                                            }>
                                                {OrderStatus::ALL
                                                    .iter()
                                                    .map(|s| {
                                                        view! {
                                                            <option
                                                                value=s.as_str()
                                                                selected=o.status == s.as_str()
                                                            >
                                                                {s.label()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </label>
                                    }
                                    .into_any(),
                                    OrderAction::SetPaymentStatus => view! {
                                        <label class="override-label">
                                            "Set payment"
                                            <select on:change={
                                                let order_id = order_id.clone();
                                                move |ev| {
                                                    let order_id = order_id.clone();
                                                    let value = event_target_value(&ev);
                                                    spawn_local(async move {
                                                        match api::update_payment_status(&order_id, &value).await {
                                                            Ok(o) => on_updated.run(o),
                                                            Err(e) => toast.error(e),
                                                        }
                                                    });
                                                }
                                            }>
                                                {PaymentStatus::ALL
                                                    .iter()
                                                    .map(|s| {
                                                        view! {
                                                            <option
                                                                value=s.as_str()
                                                                selected=o.payment_status == s.as_str()
                                                            >
                                                                {s.label()}
                                                            </option>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </select>
                                        </label>
                                    }
                                    .into_any(),
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            {move || {
                chat_with
                    .get()
                    .map(|counterpart_id| {
                        view! {
                            <ChatOverlay
                                counterpart_id=counterpart_id
                                on_close=Callback::new(move |_| set_chat_with.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}
