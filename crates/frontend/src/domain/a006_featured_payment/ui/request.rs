use chrono::Utc;
use contracts::domain::a006_featured_payment::CreateFeaturedPaymentDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_featured_payment::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::layout::toast::use_toast;
use crate::shared::money::format_price;
use crate::shared::upload::{file_from_input, upload_image};
use crate::system::auth::context::current_user_id;

/// Weekly promotion fee.
const FEATURE_PRICE_PER_WEEK: f64 = 5.0;

/// Seller page for requesting a featured slot on one listing. The fee is
/// transferred out of band; the proof screenshot is uploaded here and an
/// admin approves or rejects the request later.
#[component]
pub fn FeaturedRequestPage(product_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let toast = use_toast();
    let (duration_weeks, set_duration_weeks) = signal(1u32);
    let (proof_url, set_proof_url) = signal(Option::<String>::None);
    let (is_uploading, set_is_uploading) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    let (already_featured, set_already_featured) = signal(false);

    // Pre-check: warn when an approved promotion is still running. The
    // backend enforces the rule; this only saves the seller a rejection.
    {
        let product_id = product_id.clone();
        Effect::new(move |_| {
            let product_id = product_id.clone();
            spawn_local(async move {
                if let Ok(payments) = api::fetch_for_product(&product_id).await {
                    let now = Utc::now();
                    set_already_featured.set(payments.iter().any(|p| p.is_live(now)));
                }
            });
        });
    }

    let on_proof = move |ev: leptos::ev::Event| {
        let Some(file) = file_from_input(&ev) else {
            return;
        };
        set_is_uploading.set(true);
        spawn_local(async move {
            match upload_image(file).await {
                Ok(url) => set_proof_url.set(Some(url)),
                Err(e) => toast.error(e),
            }
            set_is_uploading.set(false);
        });
    };

    let submit_product_id = product_id.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get() {
            return;
        }
        let Some(proof) = proof_url.get() else {
            toast.error("Upload the transfer proof first");
            return;
        };
        let weeks = duration_weeks.get();
        let dto = CreateFeaturedPaymentDto {
            product_id: submit_product_id.clone(),
            seller_id: current_user_id(),
            amount: FEATURE_PRICE_PER_WEEK * weeks as f64,
            duration_days: weeks * 7,
            transfer_proof_image_url: proof,
        };
        set_is_submitting.set(true);
        spawn_local(async move {
            match api::create_request(dto).await {
                Ok(_) => {
                    toast.success("Promotion request submitted");
                    ctx.navigate(Page::MyListings);
                }
                Err(e) => toast.error(e),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page featured-request-page">
            <h1>"Promote your listing"</h1>

            <Show when=move || already_featured.get()>
                <p class="notice">
                    "This listing already has an active promotion. A new request will be rejected until it expires."
                </p>
            </Show>

            <form class="featured-form" on:submit=on_submit>
                <label>
                    "Duration"
                    <select on:change=move |ev| {
                        if let Ok(weeks) = event_target_value(&ev).parse::<u32>() {
                            set_duration_weeks.set(weeks);
                        }
                    }>
                        <option value="1">"1 week"</option>
                        <option value="2">"2 weeks"</option>
                        <option value="4">"4 weeks"</option>
                    </select>
                </label>

                <p class="fee">
                    "Fee: "
                    {move || format_price(FEATURE_PRICE_PER_WEEK * duration_weeks.get() as f64)}
                </p>
                <p class="instructions">
                    "Transfer the fee to the marketplace account, then upload a screenshot of the transfer."
                </p>

                <input type="file" accept="image/*" on:change=on_proof />
                <Show when=move || is_uploading.get()>
                    <span class="upload-hint">"Uploading proof..."</span>
                </Show>
                {move || {
                    proof_url
                        .get()
                        .map(|url| view! { <img class="proof-preview" src=url /> })
                }}

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || {
                        is_submitting.get() || is_uploading.get() || proof_url.get().is_none()
                    }
                >
                    "Submit request"
                </button>
            </form>
        </div>
    }
}
