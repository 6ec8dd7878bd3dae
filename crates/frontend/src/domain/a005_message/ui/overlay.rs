use contracts::domain::a005_message::SendMessageDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_message::api;
use crate::domain::a005_message::feed::ChatFeed;
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_time;
use crate::system::auth::context::current_user_id;

/// Poll interval for the conversation re-fetch.
const POLL_MS: u32 = 3000;

/// Floating chat window over the current page.
///
/// Opens with an immediate conversation fetch, then re-fetches on a fixed
/// timer until closed. This is polling, not a live transport: a slow
/// response racing the next tick is not deduplicated. Sending appends the
/// message locally only after the server acknowledges it.
#[component]
pub fn ChatOverlay(counterpart_id: String, on_close: Callback<()>) -> impl IntoView {
    let toast = use_toast();
    let feed = RwSignal::new(ChatFeed::new());
    let (draft, set_draft) = signal(String::new());
    let (is_sending, set_is_sending) = signal(false);

    let my_id = current_user_id();
    // Cleared on unmount so the poll loop stops with the overlay.
    let alive = StoredValue::new(true);

    {
        let counterpart = counterpart_id.clone();
        let me = my_id.clone();
        spawn_local(async move {
            let _ = api::mark_read(&me, &counterpart).await;
            loop {
                if !alive.get_value() {
                    break;
                }
                match api::fetch_conversation(&me, &counterpart).await {
                    Ok(messages) => {
                        feed.update(|f| {
                            let _ = f.apply_fetch(messages);
                        });
                    }
                    Err(e) => {
                        // Keep polling; the chat shows stale data rather
                        // than closing on a transient failure.
                        log::warn!("chat poll failed: {}", e);
                    }
                }
                gloo_timers::future::TimeoutFuture::new(POLL_MS).await;
            }
        });
    }

    on_cleanup(move || alive.set_value(false));

    let counterpart_send = counterpart_id.clone();
    let me_send = my_id.clone();
    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get().trim().to_string();
        if text.is_empty() || is_sending.get() {
            return;
        }
        let dto = SendMessageDto {
            sender_id: me_send.clone(),
            receiver_id: counterpart_send.clone(),
            message: text,
        };
        set_is_sending.set(true);
        spawn_local(async move {
            match api::send_message(dto).await {
                Ok(message) => {
                    feed.update(|f| f.push_sent(message));
                    set_draft.set(String::new());
                }
                Err(e) => toast.error(e),
            }
            set_is_sending.set(false);
        });
    };

    let me_render = my_id.clone();

    view! {
        <div class="chat-overlay">
            <div class="chat-header">
                <span>"Chat"</span>
                <button class="btn-link" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>

            <div class="chat-messages">
                {move || {
                    let me = me_render.clone();
                    feed.with(|f| {
                        f.messages()
                            .iter()
                            .map(|m| {
                                let mine = m.sender_id == me;
                                view! {
                                    <div class=if mine { "chat-bubble mine" } else { "chat-bubble" }>
                                        <p>{m.message.clone()}</p>
                                        <span class="chat-time">{format_time(&m.sent_at)}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>

            <form class="chat-compose" on:submit=on_send>
                <input
                    type="text"
                    placeholder="Write a message..."
                    value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn-primary" disabled=move || is_sending.get()>
                    "Send"
                </button>
            </form>
        </div>
    }
}
