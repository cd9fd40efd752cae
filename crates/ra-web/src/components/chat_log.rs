use leptos::prelude::*;

/// Who authored a chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    fn label(self) -> &'static str {
        match self {
            Speaker::User => "Usuario",
            Speaker::Assistant => "Asistente",
        }
    }
}

/// One line of the conversation as shown in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    /// Opening line shown before the user has typed anything.
    pub fn greeting() -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: "Hola, soy el asistente de Retail Assist. ¿En qué te puedo ayudar?".to_string(),
        }
    }

    pub fn from_user(text: &str) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.to_string(),
        }
    }

    pub fn from_assistant(text: String) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text,
        }
    }

    /// Shown in place of a reply when the backend request fails.
    pub fn unavailable() -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: "No puedo responder en este momento. Intenta de nuevo más tarde.".to_string(),
        }
    }
}

/// Conversation log with a typing indicator while a reply is pending.
#[component]
pub fn ChatLog(
    messages: ReadSignal<Vec<ChatMessage>>,
    waiting: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {move || {
                messages
                    .get()
                    .iter()
                    .map(|msg| {
                        let align = match msg.speaker {
                            Speaker::User => "text-right",
                            Speaker::Assistant => "text-left",
                        };
                        view! {
                            <div class=align>
                                <strong class="text-sm uppercase text-[var(--ink-light)]">
                                    {msg.speaker.label()}
                                </strong>
                                <p class="mt-1">{msg.text.clone()}</p>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            {move || {
                waiting.get().then(|| view! {
                    <div class="text-[var(--ink-light)]">"Asistente está escribiendo..."</div>
                })
            }}
        </div>
    }
}
