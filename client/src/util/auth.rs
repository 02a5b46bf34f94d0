//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical redirect behavior: nothing while the
//! session is restoring, `/login` once it resolves anonymous.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use roster::gate::GateDecision;

use crate::state::auth::SessionContext;

/// Redirect whenever the gate says so. Never fires while restoring.
pub fn install_unauth_redirect<F>(session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GateDecision::Redirect(path) = session.decision() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Render `children` only for an authenticated session.
#[component]
pub fn AuthGate(children: ChildrenFn) -> impl IntoView {
    let session = SessionContext::expect();
    install_unauth_redirect(session, use_navigate());

    move || match session.decision() {
        GateDecision::Render => children().into_any(),
        GateDecision::Pending => view! { <p class="auth-gate__pending">"Loading..."</p> }.into_any(),
        GateDecision::Redirect(_) => ().into_any(),
    }
}
