//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <h1>"About SportsID"</h1>
            <p>
                "SportsID started with parents who were tired of filling out the same paper forms for every league. "
                "We connect families with local youth sports organizations and keep registration simple."
            </p>
            <p>"Questions? Reach us at support@sportsid.example."</p>
        </div>
    }
}
