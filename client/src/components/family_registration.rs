//! Modal form for registering a family.
//!
//! The form state machine lives in `roster::form`; this component only binds
//! it to inputs and runs the create call. On success it fires `on_success`
//! (the dashboard re-fetches) and then `on_close`.
//!
//! The modal cannot be dismissed while a create is in flight. Follow-ups are
//! still driven from the response alone, never from the form signal, so a
//! refresh or sign-out is not lost if the form is disposed first.

#[cfg(test)]
#[path = "family_registration_test.rs"]
mod family_registration_test;

use leptos::prelude::*;
use roster::form::{FamilyField, FamilyForm};

use crate::state::auth::SessionContext;

/// Input `id`/`name` attribute, matching the API field name.
fn field_id(field: FamilyField) -> &'static str {
    match field {
        FamilyField::FamilyName => "family_name",
        FamilyField::Address => "address",
        FamilyField::City => "city",
        FamilyField::State => "state",
        FamilyField::ZipCode => "zip_code",
    }
}

fn field_label(field: FamilyField) -> &'static str {
    match field {
        FamilyField::FamilyName => "Family Name *",
        FamilyField::Address => "Address",
        FamilyField::City => "City",
        FamilyField::State => "State",
        FamilyField::ZipCode => "ZIP Code",
    }
}

/// Run the owner's follow-ups for a finished create.
#[cfg(any(test, feature = "csr"))]
fn complete(
    outcome: &roster::form::SubmitOutcome,
    registered: impl FnOnce(),
    signed_out: impl FnOnce(&roster::ApiError),
) {
    use roster::form::SubmitOutcome;

    match outcome {
        SubmitOutcome::Registered => registered(),
        SubmitOutcome::SignedOut(e) => signed_out(e),
        SubmitOutcome::Failed(message) => log::warn!("family registration failed: {message}"),
    }
}

/// Dismissal is refused mid-submit.
fn can_close(form: &FamilyForm) -> bool {
    !form.is_submitting()
}

#[component]
pub fn FamilyRegistration(on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let session = SessionContext::expect();
    let form = RwSignal::new(FamilyForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(fields)) = form.try_update(FamilyForm::begin_submit) else {
            return;
        };
        let token = session.token_untracked();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::api::transport();
            let outcome = roster::form::send(&transport, token.as_deref(), &fields).await;
            // Disposed when the modal is already gone.
            let _ = form.try_update(|f| f.settle(&outcome));
            complete(
                &outcome,
                || {
                    on_success.run(());
                    on_close.run(());
                },
                |e| session.sign_out(e),
            );
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = (fields, token);
        }
    };

    let request_close = move || {
        if form.try_with_untracked(can_close).unwrap_or(true) {
            on_close.run(());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            request_close();
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| request_close()>
            <div
                class="dialog dialog--family"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Register Family"</h2>
                    <button
                        class="dialog__close"
                        type="button"
                        disabled=move || !form.with(can_close)
                        on:click=move |_| request_close()
                    >
                        "✕"
                    </button>
                </div>

                <form class="dialog__form" on:submit=on_submit>
                    <FamilyInput form=form field=FamilyField::FamilyName required=true/>
                    <FamilyInput form=form field=FamilyField::Address/>
                    <div class="dialog__row">
                        <FamilyInput form=form field=FamilyField::City/>
                        <FamilyInput form=form field=FamilyField::State/>
                    </div>
                    <FamilyInput form=form field=FamilyField::ZipCode/>

                    <Show when=move || form.with(|f| f.error().is_some())>
                        <div class="alert alert--error">
                            {move || form.with(|f| f.error().unwrap_or_default().to_owned())}
                        </div>
                    </Show>

                    <div class="dialog__actions">
                        <button
                            class="btn"
                            type="button"
                            disabled=move || !form.with(can_close)
                            on:click=move |_| request_close()
                        >
                            "Cancel"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || !form.with(FamilyForm::can_submit)
                        >
                            {move || form.with(FamilyForm::submit_label)}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// One text input bound to a form field.
#[component]
fn FamilyInput(
    form: RwSignal<FamilyForm>,
    field: FamilyField,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let id = field_id(field);

    view! {
        <div class="form-field">
            <label for=id class="form-field__label">{field_label(field)}</label>
            <input
                id=id
                name=id
                type="text"
                class="form-field__input"
                required=required
                prop:value=move || form.with(|f| f.field(field).to_owned())
                prop:disabled=move || form.with(FamilyForm::is_submitting)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set(field, value));
                }
            />
        </div>
    }
}
