//! Login and registration page.
//!
//! One component serves both `/login` and `/register`; the mode only changes
//! which fields render and which endpoint the submit hits. Field checks run
//! client-side first so obviously incomplete forms never reach the API.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use roster::ApiError;
use roster::auth;
use roster::types::{Credentials, NewAccount};

use crate::state::auth::SessionContext;

const AFTER_SIGN_IN: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Register => "Create Your Account",
        }
    }

    fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging in...",
            (Self::Register, false) => "Create Account",
            (Self::Register, true) => "Creating account...",
        }
    }

    /// Path of the page for the other mode.
    fn switch_href(self) -> &'static str {
        match self {
            Self::Login => "/register",
            Self::Register => "/login",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Need an account? Register",
            Self::Register => "Already registered? Login",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthField {
    FirstName,
    LastName,
    Email,
    Password,
    Phone,
}

/// Raw form input, trimmed on the way out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AuthFields {
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    phone: String,
}

impl AuthFields {
    fn get(&self, field: AuthField) -> &str {
        match field {
            AuthField::FirstName => &self.first_name,
            AuthField::LastName => &self.last_name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::Phone => &self.phone,
        }
    }

    fn set(&mut self, field: AuthField, value: String) {
        let slot = match field {
            AuthField::FirstName => &mut self.first_name,
            AuthField::LastName => &mut self.last_name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Phone => &mut self.phone,
        };
        *slot = value;
    }

    fn credentials(&self) -> Credentials {
        Credentials { email: self.email.trim().to_owned(), password: self.password.clone() }
    }

    fn new_account(&self) -> NewAccount {
        let phone = self.phone.trim();
        NewAccount {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            phone: (!phone.is_empty()).then(|| phone.to_owned()),
        }
    }
}

/// Validated request for the selected mode.
enum AuthRequest {
    Login(Credentials),
    Register(NewAccount),
}

fn prepare(mode: AuthMode, fields: &AuthFields) -> Result<AuthRequest, ApiError> {
    match mode {
        AuthMode::Login => {
            let credentials = fields.credentials();
            auth::validate_credentials(&credentials)?;
            Ok(AuthRequest::Login(credentials))
        }
        AuthMode::Register => {
            let account = fields.new_account();
            auth::validate_new_account(&account)?;
            Ok(AuthRequest::Register(account))
        }
    }
}

#[component]
pub fn AuthPage(mode: AuthMode) -> impl IntoView {
    let session = SessionContext::expect();
    let navigate = use_navigate();
    let fields = RwSignal::new(AuthFields::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Already signed in: nothing to do here.
    let redirect = navigate.clone();
    Effect::new(move || {
        if session.is_authenticated() {
            redirect(AFTER_SIGN_IN, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match fields.with_untracked(|f| prepare(mode, f)) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::transport();
                let result = match request {
                    AuthRequest::Login(credentials) => auth::login(&transport, &credentials).await,
                    AuthRequest::Register(account) => auth::register(&transport, &account).await,
                };
                match result {
                    Ok(response) => {
                        session.establish(response);
                        navigate(AFTER_SIGN_IN, NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = (request, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{mode.title()}</h1>
                <form class="auth-form" on:submit=on_submit>
                    {(mode == AuthMode::Register)
                        .then(|| {
                            view! {
                                <div class="auth-form__row">
                                    <AuthInput fields=fields placeholder="First name" kind="text" field=AuthField::FirstName/>
                                    <AuthInput fields=fields placeholder="Last name" kind="text" field=AuthField::LastName/>
                                </div>
                            }
                        })}
                    <AuthInput fields=fields placeholder="Email" kind="email" field=AuthField::Email/>
                    <AuthInput fields=fields placeholder="Password" kind="password" field=AuthField::Password/>
                    {(mode == AuthMode::Register)
                        .then(|| {
                            view! {
                                <AuthInput fields=fields placeholder="Phone (optional)" kind="tel" field=AuthField::Phone/>
                            }
                        })}
                    <Show when=move || error.get().is_some()>
                        <div class="alert alert--error">{move || error.get().unwrap_or_default()}</div>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || mode.submit_label(busy.get())}
                    </button>
                </form>
                <a class="auth-card__switch" href=mode.switch_href()>{mode.switch_prompt()}</a>
            </div>
        </div>
    }
}

/// Text input bound to one `AuthFields` member.
#[component]
fn AuthInput(
    fields: RwSignal<AuthFields>,
    placeholder: &'static str,
    kind: &'static str,
    field: AuthField,
) -> impl IntoView {
    view! {
        <input
            class="form-field__input"
            type=kind
            placeholder=placeholder
            prop:value=move || fields.with(|f| f.get(field).to_owned())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                fields.update(|f| f.set(field, value));
            }
        />
    }
}
