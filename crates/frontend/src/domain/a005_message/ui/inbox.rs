use contracts::domain::a005_message::Message;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_message::api;
use crate::domain::a005_message::ui::ChatOverlay;
use crate::layout::toast::use_toast;
use crate::shared::date_utils::format_datetime;
use crate::system::auth::context::current_user_id;

/// One row per counterpart, derived client-side from the flat message list.
#[derive(Debug, Clone)]
struct ConversationRow {
    counterpart_id: String,
    last_message: String,
    last_sent_at: String,
    unread: usize,
}

/// Group a flat message list into per-counterpart rows, preserving server
/// order so the latest message wins.
fn group_conversations(user_id: &str, messages: &[Message]) -> Vec<ConversationRow> {
    let mut rows: Vec<ConversationRow> = Vec::new();
    for m in messages {
        let counterpart = if m.sender_id == user_id {
            m.receiver_id.clone()
        } else {
            m.sender_id.clone()
        };
        let unread_inc = usize::from(m.receiver_id == user_id && !m.is_read);
        match rows.iter_mut().find(|r| r.counterpart_id == counterpart) {
            Some(row) => {
                row.last_message = m.message.clone();
                row.last_sent_at = m.sent_at.clone();
                row.unread += unread_inc;
            }
            None => rows.push(ConversationRow {
                counterpart_id: counterpart,
                last_message: m.message.clone(),
                last_sent_at: m.sent_at.clone(),
                unread: unread_inc,
            }),
        }
    }
    rows
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let toast = use_toast();
    let (rows, set_rows) = signal(Vec::<ConversationRow>::new());
    let (open_chat, set_open_chat) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let user_id = current_user_id();
        spawn_local(async move {
            match api::fetch_user_messages(&user_id).await {
                Ok(messages) => set_rows.set(group_conversations(&user_id, &messages)),
                Err(e) => toast.error(e),
            }
        });
    });

    view! {
        <div class="page messages-page">
            <h1>"Messages"</h1>

            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <p class="empty-state">"No conversations yet."</p> }
            >
                <ul class="conversation-list">
                    <For
                        each=move || rows.get()
                        key=|row| row.counterpart_id.clone()
                        children=move |row: ConversationRow| {
                            let open_id = row.counterpart_id.clone();
                            let unread = row.unread;
                            view! {
                                <li
                                    class="conversation-row"
                                    on:click=move |_| set_open_chat.set(Some(open_id.clone()))
                                >
                                    <span class="counterpart">{row.counterpart_id.clone()}</span>
                                    <span class="preview">{row.last_message.clone()}</span>
                                    <span class="when">{format_datetime(&row.last_sent_at)}</span>
                                    <Show when={move || unread > 0}>
                                        <span class="unread-badge">{unread}</span>
                                    </Show>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            {move || {
                open_chat
                    .get()
                    .map(|counterpart_id| {
                        view! {
                            <ChatOverlay
                                counterpart_id=counterpart_id
                                on_close=Callback::new(move |_| set_open_chat.set(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: &str, from: &str, to: &str, text: &str, read: bool) -> Message {
        Message {
            id: id.into(),
            sender_id: from.into(),
            receiver_id: to.into(),
            message: text.into(),
            sent_at: "2026-04-01T10:00:00Z".into(),
            is_read: read,
        }
    }

    #[test]
    fn test_grouping_and_unread_counts() {
        let messages = vec![
            msg("1", "alice", "me", "hi", true),
            msg("2", "me", "alice", "hello", true),
            msg("3", "bob", "me", "price?", false),
            msg("4", "alice", "me", "still there?", false),
        ];
        let rows = group_conversations("me", &messages);
        assert_eq!(rows.len(), 2);

        let alice = rows.iter().find(|r| r.counterpart_id == "alice").unwrap();
        assert_eq!(alice.last_message, "still there?");
        assert_eq!(alice.unread, 1);

        let bob = rows.iter().find(|r| r.counterpart_id == "bob").unwrap();
        assert_eq!(bob.unread, 1);
    }
}
