//! Family dashboard: profile summary, registered families, and the
//! registration modal.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use roster::dashboard::{DashboardState, EMPTY_MESSAGE, ListView};
use roster::types::{Family, User};

use crate::components::family_card::FamilyCard;
use crate::components::family_registration::FamilyRegistration;
use crate::state::auth::{SessionContext, greeting};
use crate::util::auth::AuthGate;

/// Label/value pairs for the profile panel; phone only when present.
fn profile_rows(user: &User) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Name", user.display_name()), ("Email", user.email.clone())];
    if let Some(phone) = user.phone.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        rows.push(("Phone", phone.to_owned()));
    }
    rows
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AuthGate>
            <DashboardContent/>
        </AuthGate>
    }
}

/// Fetch the family list into `state`, signing out on an auth failure.
///
/// Overlapping reads are fine: only the latest ticket's result is applied.
fn load_families(session: SessionContext, state: RwSignal<DashboardState>) {
    let token = session.token_untracked();
    if token.is_none() {
        return;
    }
    let Some(ticket) = state.try_update(DashboardState::begin_load) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let transport = crate::net::api::transport();
        let result = roster::family::FamilyClient::new(&transport).list(token.as_deref()).await;
        if let Some(Some(e)) = state.try_update(|s| s.apply(ticket, result)) {
            session.sign_out(&e);
        }
    });

    #[cfg(not(feature = "csr"))]
    let _ = ticket;
}

/// Cards for a family slice.
fn family_cards(families: &[Family]) -> AnyView {
    let cards = families
        .iter()
        .cloned()
        .map(|family| view! { <FamilyCard family=family/> })
        .collect::<Vec<_>>();
    view! { <ul class="dashboard-page__cards">{cards}</ul> }.into_any()
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = SessionContext::expect();
    let state = RwSignal::new(DashboardState::default());
    let show_form = RwSignal::new(false);

    load_families(session, state);

    let on_close = Callback::new(move |()| show_form.set(false));
    let on_success = Callback::new(move |()| load_families(session, state));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || greeting(session.user().as_ref())}</h1>
                <button class="btn btn--primary" on:click=move |_| show_form.set(true)>
                    "Register Family"
                </button>
            </header>

            <section class="dashboard-page__profile">
                <h2>"Your Profile"</h2>
                <dl>
                    {move || {
                        session
                            .user()
                            .map(|user| {
                                profile_rows(&user)
                                    .into_iter()
                                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </dl>
            </section>

            <section class="dashboard-page__families">
                <h2>"Registered Families"</h2>
                {move || {
                    state
                        .with(|s| match s.view() {
                            ListView::Loading => view! { <p>"Loading families..."</p> }.into_any(),
                            ListView::Error(message) => {
                                view! { <div class="alert alert--error">{message.to_owned()}</div> }.into_any()
                            }
                            ListView::Empty => view! { <p class="dashboard-page__empty">{EMPTY_MESSAGE}</p> }.into_any(),
                            ListView::Families(families) => family_cards(families),
                            ListView::Stale { families, error } => {
                                view! {
                                    <div class="alert alert--error">{error.to_owned()}</div>
                                    {family_cards(families)}
                                }
                                    .into_any()
                            }
                        })
                }}
            </section>

            <Show when=move || show_form.get()>
                <FamilyRegistration on_close=on_close on_success=on_success/>
            </Show>
        </div>
    }
}
