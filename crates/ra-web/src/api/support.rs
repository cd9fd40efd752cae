use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::config::CONFIG;

/// Outgoing chat message.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Assistant reply to one chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    /// Agent that produced the answer, when the backend reports it.
    #[serde(default)]
    pub agent: Option<String>,
}

/// Send one user message through the assistant pipeline.
pub async fn send_message(message: &str) -> Option<ChatReply> {
    let url = format!("{}/chat", CONFIG.api_base);

    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(&ChatRequest { message })
        .ok()?
        .send()
        .await
        .ok()?;

    if !response.ok() {
        web_sys::console::error_1(&format!("Chat API error: {}", response.status()).into());
        return None;
    }

    // The backend answers a bare `null` when the agent pipeline gives up
    let text = response.text().await.ok()?;
    if text == "null" {
        return None;
    }

    serde_json::from_str(&text).ok()
}

/// Aggregate support counters shown on the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct SupportSummary {
    pub open_tickets: u32,
    pub resolved_today: u32,
    pub faq_entries: u32,
    #[serde(default)]
    pub escalations: u32,
}

/// One row of the recent-activity list.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketSummary {
    pub id: String,
    pub subject: String,
    pub status: String,
}

/// Fetch the dashboard counters.
pub async fn get_support_summary() -> Option<SupportSummary> {
    get_json(&format!("{}/dashboard/summary", CONFIG.api_base)).await
}

/// Fetch the most recent tickets, newest first.
pub async fn get_recent_tickets(limit: usize) -> Option<Vec<TicketSummary>> {
    get_json(&format!("{}/tickets/recent?limit={limit}", CONFIG.api_base)).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Option<T> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .ok()?;

    if !response.ok() {
        web_sys::console::error_1(&format!("Support API error: {}", response.status()).into());
        return None;
    }

    response.json().await.ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_reply_without_agent_field() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"Hola"}"#).unwrap();
        assert_eq!(reply.reply, "Hola");
        assert!(reply.agent.is_none());
    }

    #[test]
    fn test_chat_reply_with_agent_field() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"reply":"Revisa tu boleta","agent":"DatabaseAgent"}"#)
                .unwrap();
        assert_eq!(reply.agent.as_deref(), Some("DatabaseAgent"));
    }

    #[test]
    fn test_summary_defaults_missing_escalations() {
        let summary: SupportSummary =
            serde_json::from_str(r#"{"open_tickets":4,"resolved_today":7,"faq_entries":120}"#)
                .unwrap();
        assert_eq!(summary.open_tickets, 4);
        assert_eq!(summary.escalations, 0);
    }
}
