use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::send_message;
use crate::components::{ChatLog, ChatMessage, NavLink, Section};
use crate::config::CONFIG;

/// Chat view at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    let (messages, set_messages) = signal(vec![ChatMessage::greeting()]);
    let (draft, set_draft) = signal(String::new());
    let (waiting, set_waiting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked().trim().to_string();
        // One in-flight request at a time keeps the log ordered.
        if text.is_empty() || waiting.get_untracked() {
            return;
        }
        set_draft.set(String::new());
        set_messages.update(|log| log.push(ChatMessage::from_user(&text)));
        set_waiting.set(true);

        spawn_local(async move {
            let reply = send_message(&text).await;
            set_messages.update(|log| {
                log.push(match reply {
                    Some(reply) => ChatMessage::from_assistant(reply.reply),
                    None => ChatMessage::unavailable(),
                });
            });
            set_waiting.set(false);
        });
    };

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold">{CONFIG.name}</h1>
                <div class="text-[var(--ink-light)] mt-2">{CONFIG.tagline}</div>
            </header>

            <Section id="chat" title="Asistente">
                <ChatLog messages=messages waiting=waiting />
                <form class="mt-4 flex gap-2" on:submit=submit>
                    <input
                        class="flex-1 border border-[var(--rule)] bg-white px-2 py-1"
                        type="text"
                        placeholder="Escribe tu consulta..."
                        prop:value=draft
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <button
                        class="border border-[var(--rule)] px-4 py-1 font-bold"
                        type="submit"
                        disabled=move || waiting.get()
                    >
                        "Enviar"
                    </button>
                </form>
            </Section>

            <Section id="pages" title="Páginas">
                <div>
                    <NavLink to="Dashboard">"panel de soporte"</NavLink>
                </div>
            </Section>

            <footer class="text-center text-[var(--ink-light)]">
                "Contacto: " {CONFIG.contact.email}
            </footer>
        </main>
    }
}
