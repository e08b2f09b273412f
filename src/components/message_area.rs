//! Message area rendering a page's `MessageBoard`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::state::messages::{Lifetime, Message, MessageBody, MessageBoard, Severity};
use crate::util::timer::TimerScope;

/// Append a message and, for expiring messages, schedule its removal.
/// Returns the message id.
pub fn notify(
    board: RwSignal<MessageBoard>,
    timers: &TimerScope,
    severity: Severity,
    body: MessageBody,
    lifetime: Lifetime,
) -> u64 {
    let id = board.try_update(|b| b.push(severity, body)).unwrap_or_default();
    if let Lifetime::Expires(ttl) = lifetime {
        timers.schedule(ttl, move || {
            board.try_update(|b| b.remove(id));
        });
    }
    id
}

#[component]
pub fn MessageArea(board: RwSignal<MessageBoard>, #[prop(default = "mensagens")] id: &'static str) -> impl IntoView {
    view! {
        <div class="mensagens" id=id aria-live="polite">
            {move || {
                board
                    .get()
                    .items()
                    .iter()
                    .cloned()
                    .map(|message| view! { <MessageAlert message=message/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn MessageAlert(message: Message) -> impl IntoView {
    let class = format!("alert {}", message.severity.css_class());
    let content = match message.body {
        MessageBody::Text(text) => text.into_any(),
        MessageBody::Formatted { heading, lines } => view! {
            <strong>{heading}</strong>
            {lines.into_iter().map(|line| view! { <br/>{line} }).collect::<Vec<_>>()}
        }
        .into_any(),
    };
    view! { <div class=class>{content}</div> }
}
