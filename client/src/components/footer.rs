//! Page footer shown under every route.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p class="app-footer__text">"\u{a9} 2021 My App. All rights reserved."</p>
        </footer>
    }
}
