//! Program detail with the quick registration form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use roster::programs;
use roster::types::{Program, ProgramRegistration};

use crate::components::program_card::format_price;

#[component]
pub fn ProgramDetailPage() -> impl IntoView {
    let params = use_params_map();
    let program_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let program = LocalResource::new(move || {
        let id = program_id();
        async move {
            let transport = crate::net::api::transport();
            programs::get_program(&transport, &id).await
        }
    });

    view! {
        <div class="program-detail">
            <a href="/programs" class="program-detail__back">"← All programs"</a>
            <Suspense fallback=move || view! { <p>"Loading program..."</p> }>
                {move || {
                    program
                        .get()
                        .map(|result| match result {
                            Ok(p) => view! { <ProgramSummary program=p/> }.into_any(),
                            Err(e) => view! { <div class="alert alert--error">{e.to_string()}</div> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProgramSummary(program: Program) -> impl IntoView {
    let price = format_price(program.price);

    view! {
        <article class="program-detail__body">
            <h1>{program.name.clone()}</h1>
            {program.organization.clone().map(|o| view! { <p class="program-detail__org">{o}</p> })}
            {program.description.clone().map(|d| view! { <p>{d}</p> })}
            <dl class="program-detail__facts">
                {program.sport_type.clone().map(|s| view! { <dt>"Sport"</dt><dd>{s}</dd> })}
                {program.age_range.clone().map(|a| view! { <dt>"Ages"</dt><dd>{a}</dd> })}
                {program.location.clone().map(|l| view! { <dt>"Location"</dt><dd>{l}</dd> })}
                {price.map(|p| view! { <dt>"Price"</dt><dd>{p}</dd> })}
            </dl>
            <ProgramRegistrationForm program_id=program.id.clone()/>
        </article>
    }
}

#[component]
fn ProgramRegistrationForm(program_id: String) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let child = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = ProgramRegistration {
            name: name.get_untracked().trim().to_owned(),
            child: child.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            program_id: program_id.clone(),
        };
        if let Err(e) = programs::validate_registration(&registration) {
            error.set(Some(e.to_string()));
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::api::transport();
            match programs::register_for_program(&transport, &registration).await {
                Ok(()) => submitted.set(true),
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = registration;
        }
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| view! { <div class="alert alert--success">"Registration submitted!"</div> }
        >
            <form class="program-detail__form" on:submit=on_submit.clone()>
                <h2>"Register"</h2>
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Parent name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Child name"
                    prop:value=move || child.get()
                    on:input=move |ev| child.set(event_target_value(&ev))
                />
                <input
                    class="form-field__input"
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Registration" }}
                </button>
            </form>
        </Show>
    }
}
