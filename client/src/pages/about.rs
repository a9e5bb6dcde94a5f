use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1 class="page__title">"About"</h1>
            <p>
                "O11y collects metrics, logs and alerts from your hosts and shows them in one place. "
                "This interface is an early preview; the alert list is sample data."
            </p>
        </section>
    }
}
