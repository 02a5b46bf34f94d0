//! Feature overview page.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    ("Single family profile", "Enter household details once and reuse them for every registration."),
    ("Program catalog", "Search leagues, camps, and clinics by sport, location, or organization."),
    ("Secure sessions", "Your sign-in lasts for the browser tab and is checked with the server on reload."),
    ("Family dashboard", "See every family you have registered in one list."),
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <div class="content-page">
            <h1>"Features"</h1>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="feature-grid__item">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
