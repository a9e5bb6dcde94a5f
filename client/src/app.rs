//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Style, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{app_bar::AppBar, footer::Footer, require_session::RequireSession};
use crate::pages::{about::AboutPage, contact::ContactPage, home::HomePage, login::LoginPage};
use crate::state::session_store::SessionStore;
use crate::util::{cookie::default_jar, guard::install_route_guard, theme};

/// Root application component.
///
/// Builds the session store once and provides it to everything below.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionStore::new(default_jar()));

    view! {
        <Title text="O11y"/>
        <Style>{theme::css_variables()}</Style>

        <Router>
            <Shell/>
        </Router>
    }
}

/// Navigation shell. Lives inside `Router` so the guard can observe the
/// location and navigate.
#[component]
fn Shell() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_route_guard(store.session(), use_location().pathname, use_navigate());

    view! {
        <div class="app">
            <AppBar/>
            <main class="app__container">
                <Routes fallback=|| view! { <RequireSession>"Page not found."</RequireSession> }>
                    <Route path=StaticSegment("ui") view=|| view! { <RequireSession><HomePage/></RequireSession> }/>
                    <Route
                        path=(StaticSegment("ui"), StaticSegment("about"))
                        view=|| view! { <RequireSession><AboutPage/></RequireSession> }
                    />
                    <Route
                        path=(StaticSegment("ui"), StaticSegment("contact"))
                        view=|| view! { <RequireSession><ContactPage/></RequireSession> }
                    />
                    <Route path=(StaticSegment("ui"), StaticSegment("login")) view=LoginPage/>
                </Routes>
            </main>
            <Footer/>
        </div>
    }
}
