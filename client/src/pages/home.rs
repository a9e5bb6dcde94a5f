//! Home page: alert overview.

use leptos::prelude::*;

use crate::components::alert_table::AlertTable;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page--home">
            <h1 class="page__title">"Alerts"</h1>
            <AlertTable/>
        </section>
    }
}
