use leptos::prelude::*;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page page--contact">
            <h1 class="page__title">"Contact"</h1>
            <p>"Questions or feedback? Open an issue on the project tracker or reach the maintainers on the mailing list."</p>
        </section>
    }
}
