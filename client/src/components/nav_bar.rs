//! Top navigation with session-aware account links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{SessionContext, greeting};

#[component]
pub fn NavBar() -> impl IntoView {
    let session = SessionContext::expect();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">
                <span class="nav-bar__brand-mark">"SportsID"</span>
            </a>
            <div class="nav-bar__links">
                <a href="/programs">"Sports"</a>
                <a href="/features">"Features"</a>
                <a href="/about">"About"</a>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/login" class="nav-bar__pill">"Login"</a>
                            <a href="/register" class="nav-bar__pill nav-bar__pill--primary">"Register"</a>
                        }
                    }
                >
                    <span class="nav-bar__greeting">{move || greeting(session.user().as_ref())}</span>
                    <a href="/dashboard">"Dashboard"</a>
                    <button class="nav-bar__pill" on:click=on_logout.clone()>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}
