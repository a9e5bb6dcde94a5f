//! Login page with a simulated credential check.
//!
//! Any non-empty username/password pair is accepted after a fixed delay and
//! starts a session with a placeholder token. There is no backend call.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::state::session::SessionError;
use crate::state::session_store::SessionStore;
use crate::util::guard::Route;

/// Token issued by the simulated login.
pub const PLACEHOLDER_TOKEN: &str = "fake_token";

/// Fixed latency of the simulated login request.
pub const SIMULATED_LOGIN_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Enter a username.")]
    MissingUsername,
    #[error("Enter a password.")]
    MissingPassword,
}

/// Check both fields are filled in. Returns the trimmed username.
///
/// # Errors
///
/// Returns the first missing field.
pub fn validate_credentials(username: &str, password: &str) -> Result<String, CredentialsError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(CredentialsError::MissingUsername);
    }
    if password.is_empty() {
        return Err(CredentialsError::MissingPassword);
    }
    Ok(username.to_owned())
}

/// Resolve the simulated request: start a non-permanent placeholder session.
///
/// # Errors
///
/// Propagates cookie failures from the session store.
pub fn complete_login(store: SessionStore) -> Result<Route, SessionError> {
    store.login(PLACEHOLDER_TOKEN, false)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(user) => user,
            Err(e) => {
                info.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        log::debug!("simulated login for {user}");

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(SIMULATED_LOGIN_DELAY_MS).await;
                busy.set(false);
                match complete_login(store) {
                    Ok(route) => navigate(&route.href(), NavigateOptions::default()),
                    Err(e) => info.set(e.to_string()),
                }
            });
        }

        #[cfg(not(feature = "csr"))]
        {
            let _ = store;
        }
    };

    view! {
        <div class="login-page">
            <div class="card login-card">
                <form class="login-form" on:submit=on_submit>
                    <h2 class="login-card__title">"Login"</h2>
                    <label class="login-form__label" for="username">"Username"</label>
                    <input
                        id="username"
                        class="login-input"
                        type="text"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="login-form__label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        <Show when=move || busy.get()>
                            <span class="spinner" aria-hidden="true"></span>
                        </Show>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
