//! Wrapper that renders its children only for an authenticated session.
//!
//! The route guard handles navigation; this keeps protected markup out of the
//! DOM while a redirect is pending.

use leptos::prelude::*;

use crate::state::session_store::SessionStore;

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>().session();
    view! {
        <Show when=move || session.get().is_authenticated()>
            {children()}
        </Show>
    }
}
