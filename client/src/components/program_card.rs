//! Catalog card for a single program.

#[cfg(test)]
#[path = "program_card_test.rs"]
mod program_card_test;

use leptos::prelude::*;
use roster::types::Program;

/// `$120.00`, or `Free` for a zero price; `None` when unknown.
pub fn format_price(price: Option<f64>) -> Option<String> {
    let price = price?;
    if price <= 0.0 {
        return Some("Free".to_owned());
    }
    Some(format!("${price:.2}"))
}

#[component]
pub fn ProgramCard(program: Program) -> impl IntoView {
    let href = format!("/programs/{}", program.id);
    let price = format_price(program.price);

    view! {
        <div class="program-card">
            <h3 class="program-card__name">{program.name.clone()}</h3>
            {program.sport_type.clone().map(|s| view! { <p class="program-card__sport">{s}</p> })}
            {program.age_range.clone().map(|a| view! { <p class="program-card__line">"Ages: " {a}</p> })}
            {program.location.clone().map(|l| view! { <p class="program-card__line">"Location: " {l}</p> })}
            {price.map(|p| view! { <p class="program-card__line">"Price: " {p}</p> })}
            <a class="program-card__link" href=href>"Register →"</a>
        </div>
    }
}
