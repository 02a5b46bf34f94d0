//! Program catalog with search and filter controls.

#[cfg(test)]
#[path = "programs_test.rs"]
mod programs_test;

use leptos::prelude::*;
use roster::ApiError;
use roster::programs::{self, ProgramFilter};
use roster::types::Program;

use crate::components::program_card::ProgramCard;

/// Result count line above the grid.
fn result_summary(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "program" } else { "programs" };
    if shown == total {
        format!("{total} {noun}")
    } else {
        format!("Showing {shown} of {total} {noun}")
    }
}

#[component]
pub fn ProgramsPage() -> impl IntoView {
    let catalog = LocalResource::new(|| async {
        let transport = crate::net::api::transport();
        programs::list_programs(&transport).await
    });
    let filter = RwSignal::new(ProgramFilter::default());

    let sports = move || match catalog.get() {
        Some(Ok(list)) => programs::sport_types(&list),
        _ => Vec::new(),
    };

    view! {
        <div class="programs-page">
            <header class="programs-page__header">
                <h1>"Find a Program"</h1>
            </header>

            <div class="programs-page__filters">
                <input
                    class="form-field__input"
                    type="search"
                    placeholder="Search programs"
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="form-field__input"
                    prop:value=move || filter.with(|f| f.sport_type.clone())
                    on:change=move |ev| filter.update(|f| f.sport_type = event_target_value(&ev))
                >
                    <option value="">"All sports"</option>
                    {move || {
                        sports()
                            .into_iter()
                            .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Location"
                    prop:value=move || filter.with(|f| f.location.clone())
                    on:input=move |ev| filter.update(|f| f.location = event_target_value(&ev))
                />
                <Show when=move || !filter.with(ProgramFilter::is_empty)>
                    <button class="btn" on:click=move |_| filter.set(ProgramFilter::default())>
                        "Clear"
                    </button>
                </Show>
            </div>

            <Suspense fallback=move || view! { <p>"Loading programs..."</p> }>
                {move || catalog.get().map(|result| catalog_view(result, filter))}
            </Suspense>
        </div>
    }
}

fn catalog_view(result: Result<Vec<Program>, ApiError>, filter: RwSignal<ProgramFilter>) -> AnyView {
    let list = match result {
        Ok(list) => list,
        Err(e) => return view! { <div class="alert alert--error">{e.to_string()}</div> }.into_any(),
    };

    (move || {
        let shown: Vec<Program> = filter.with(|f| f.apply(&list).into_iter().cloned().collect());
        let summary = result_summary(shown.len(), list.len());
        if shown.is_empty() {
            return view! { <p class="programs-page__empty">"No programs match your filters."</p> }.into_any();
        }
        view! {
            <p class="programs-page__count">{summary}</p>
            <div class="programs-page__grid">
                {shown.into_iter().map(|p| view! { <ProgramCard program=p/> }).collect::<Vec<_>>()}
            </div>
        }
            .into_any()
    })
        .into_any()
}
