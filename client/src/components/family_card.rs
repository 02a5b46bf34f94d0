//! Card summarizing one registered family.

#[cfg(test)]
#[path = "family_card_test.rs"]
mod family_card_test;

use leptos::prelude::*;
use roster::types::Family;

/// Date portion of an ISO 8601 timestamp, e.g. `2026-10-16`.
fn registered_on(created_at: Option<&str>) -> Option<String> {
    let raw = created_at?.trim();
    let date = raw.split(['T', ' ']).next().unwrap_or(raw);
    (!date.is_empty()).then(|| date.to_owned())
}

#[component]
pub fn FamilyCard(family: Family) -> impl IntoView {
    let locality = family.locality();
    let address = family.address.clone().filter(|a| !a.trim().is_empty());
    let registered = registered_on(family.created_at.as_deref());

    view! {
        <li class="family-card">
            <h3 class="family-card__name">{family.family_name.clone()}</h3>
            {address.map(|a| view! { <p class="family-card__line">{a}</p> })}
            {locality.map(|l| view! { <p class="family-card__line">{l}</p> })}
            {registered.map(|d| view! { <p class="family-card__meta">"Registered " {d}</p> })}
        </li>
    }
}
