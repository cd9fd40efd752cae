use leptos::prelude::*;

use crate::api::{SupportSummary, TicketSummary, get_recent_tickets, get_support_summary};
use crate::components::{NavLink, Section};
use crate::config::CONFIG;

/// All data the dashboard needs.
#[derive(Clone)]
struct DashboardData {
    summary: SupportSummary,
    tickets: Vec<TicketSummary>,
}

/// Fetch dashboard data. The summary is required; the ticket list can fail
/// independently.
async fn fetch_dashboard() -> Option<DashboardData> {
    let (summary, tickets) = futures::join!(get_support_summary(), get_recent_tickets(5));

    Some(DashboardData {
        summary: summary?,
        tickets: tickets.unwrap_or_default(),
    })
}

/// Support metrics view at `/dashboard`.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let data = LocalResource::new(fetch_dashboard);

    view! {
        <main class="max-w-[80ch] mx-auto px-4 py-8 md:py-12">
            <header class="mb-8 text-center">
                <h1 class="text-xl font-bold">{CONFIG.name} " · Panel de soporte"</h1>
                <div class="mt-4">
                    <NavLink to="Home">"← volver al asistente"</NavLink>
                </div>
            </header>

            <Section id="metrics" title="Métricas">
                <Suspense fallback=move || view! {
                    <div class="text-[var(--ink-light)]">"Cargando métricas..."</div>
                }>
                    {move || {
                        data.get().map(|result| {
                            // Dereference SendWrapper to access inner Option
                            match &*result {
                                Some(data) => view! { <DashboardContent data=data.clone() /> }.into_any(),
                                None => view! {
                                    <div class="text-[var(--ink-light)]">
                                        "Métricas no disponibles por el momento."
                                    </div>
                                }.into_any(),
                            }
                        })
                    }}
                </Suspense>
            </Section>
        </main>
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let s = data.summary.clone();

    view! {
        <div class="space-y-4">
            <div>
                <strong>{s.open_tickets}</strong> " tickets abiertos · "
                <strong>{s.resolved_today}</strong> " resueltos hoy · "
                <strong>{s.escalations}</strong> " derivados a servicio al cliente"
            </div>
            <div>
                "Base de conocimiento: " <strong>{s.faq_entries}</strong> " preguntas frecuentes"
            </div>

            <div>
                <h3 class="font-bold mb-2">"Tickets recientes"</h3>
                {if data.tickets.is_empty() {
                    view! {
                        <div class="text-[var(--ink-light)]">"Sin actividad reciente."</div>
                    }
                        .into_any()
                } else {
                    data.tickets
                        .iter()
                        .map(|ticket| {
                            view! {
                                <div class="flex justify-between border-b border-[var(--rule)] py-1">
                                    <span>{ticket.id.clone()} " · " {ticket.subject.clone()}</span>
                                    <span class="uppercase text-sm">{ticket.status.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
