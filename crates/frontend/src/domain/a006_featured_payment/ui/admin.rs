use contracts::domain::a006_featured_payment::FeaturedPayment;
use contracts::enums::FeaturedStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_featured_payment::api;
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_date;
use crate::shared::money::format_price;
use crate::system::auth::context::current_user_id;

/// Admin approval queue for paid promotions.
#[component]
pub fn AdminFeaturedPage() -> impl IntoView {
    let toast = use_toast();
    let (payments, set_payments) = signal(Vec::<FeaturedPayment>::new());

    let reload = move || {
        let admin_id = current_user_id();
        spawn_local(async move {
            match api::fetch_requests(&admin_id).await {
                Ok(list) => set_payments.set(list),
                Err(e) => toast.error(e),
            }
        });
    };

    Effect::new(move |_| {
        reload();
    });

    let on_confirm = move |id: String, approve: bool| {
        spawn_local(async move {
            match api::confirm(&id, approve).await {
                Ok(_) => {
                    toast.success(if approve {
                        "Promotion approved"
                    } else {
                        "Promotion rejected"
                    });
                    reload();
                }
                Err(e) => toast.error(e),
            }
        });
    };

    view! {
        <div class="page admin-featured-page">
            <h1>"Promotion requests"</h1>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th>"Seller"</th>
                        <th>"Amount"</th>
                        <th>"Duration"</th>
                        <th>"Paid"</th>
                        <th>"Proof"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || payments.get()
                        key=|p| p.id.clone()
                        children=move |p: FeaturedPayment| {
                            let approve_id = p.id.clone();
                            let reject_id = p.id.clone();
                            let pending = p.status == FeaturedStatus::Pending;
                            view! {
                                <tr>
                                    <td>{p.product_id.clone()}</td>
                                    <td>{p.seller_id.clone()}</td>
                                    <td>{format_price(p.amount)}</td>
                                    <td>{format!("{} days", p.duration_days)}</td>
                                    <td>{format_date(&p.payment_date)}</td>
                                    <td>
                                        <a
                                            href=p.transfer_proof_image_url.clone()
                                            target="_blank"
                                        >
                                            "View"
                                        </a>
                                    </td>
                                    <td>{p.status.label()}</td>
                                    <td>
                                        <Show when=move || pending>
                                            <button
                                                class="btn-primary"
                                                on:click={
                                                    let id = approve_id.clone();
                                                    move |_| on_confirm(id.clone(), true)
                                                }
                                            >
                                                "Approve"
                                            </button>
                                            <button
                                                class="btn-danger"
                                                on:click={
                                                    let id = reject_id.clone();
                                                    move |_| on_confirm(id.clone(), false)
                                                }
                                            >
                                                "Reject"
                                            </button>
                                        </Show>
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
