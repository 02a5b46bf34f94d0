//! Marketing landing page.

use leptos::prelude::*;

use crate::state::auth::SessionContext;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = SessionContext::expect();

    view! {
        <div class="landing-page">
            <section class="hero">
                <h1 class="hero__title">"One sign-up for every season"</h1>
                <p class="hero__subtitle">
                    "SportsID keeps your family's details in one place so registering for youth sports takes minutes, not evenings."
                </p>
                <div class="hero__actions">
                    <a href="/programs" class="btn btn--primary">"Browse Programs"</a>
                    <Show
                        when=move || session.is_authenticated()
                        fallback=|| view! { <a href="/register" class="btn">"Create an Account"</a> }
                    >
                        <a href="/dashboard" class="btn">"Go to Dashboard"</a>
                    </Show>
                </div>
            </section>

            <section class="landing-page__steps">
                <div class="landing-step">
                    <h3>"Create your account"</h3>
                    <p>"Parents sign up once with an email and password."</p>
                </div>
                <div class="landing-step">
                    <h3>"Register your family"</h3>
                    <p>"Add your household and address from the dashboard."</p>
                </div>
                <div class="landing-step">
                    <h3>"Join programs"</h3>
                    <p>"Pick a league, camp, or clinic and sign your kids up."</p>
                </div>
            </section>
        </div>
    }
}
