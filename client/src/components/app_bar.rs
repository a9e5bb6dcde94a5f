//! Top app bar with the brand and the login/logout action.

#[cfg(test)]
#[path = "app_bar_test.rs"]
mod app_bar_test;

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::session_store::SessionStore;
use crate::util::guard::Route;

/// The single action the app bar offers for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Login,
    Logout,
}

impl NavAction {
    pub fn for_session(session: &Session) -> Self {
        if session.is_authenticated() { NavAction::Logout } else { NavAction::Login }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavAction::Login => "Login",
            NavAction::Logout => "Logout",
        }
    }
}

/// Logging out does not navigate; the route guard redirects on the next check.
#[component]
pub fn AppBar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.session();

    let on_logout = move |_| {
        if let Err(e) = store.logout() {
            log::warn!("logout: {e}");
        }
    };

    view! {
        <header class="app-bar">
            <span class="app-bar__brand">"O11y"</span>
            <span class="app-bar__spacer"></span>
            {move || match NavAction::for_session(&session.get()) {
                NavAction::Login => {
                    view! {
                        <a class="app-bar__action" href=Route::Login.href()>
                            {NavAction::Login.label()}
                        </a>
                    }
                        .into_any()
                }
                NavAction::Logout => {
                    view! {
                        <button class="app-bar__action" on:click=on_logout>
                            {NavAction::Logout.label()}
                        </button>
                    }
                        .into_any()
                }
            }}
        </header>
    }
}
