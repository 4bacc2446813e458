use leptos::prelude::*;

/// Site header with the guide's title.
#[component]
pub fn Banner(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="text-center gradient p-6">
            <h1 class="text-white mt-5 text-4xl font-bold">{title}</h1>
        </header>
    }
}
