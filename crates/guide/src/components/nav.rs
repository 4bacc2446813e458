//! Navigation menu.
//!
//! Always visible; it only reads from the [`Router`] to mark the current
//! entry and asks it to navigate when a link is activated.

use leptos::prelude::*;

use crate::router::Router;
use crate::routes::{NavSection, RouteEntry};

#[component]
pub fn NavigationShell() -> impl IntoView {
    let router = expect_context::<Router>();
    let sections = router.table().sections().to_vec();

    view! {
        <nav class="flex flex-col w-250 min-w-250">
            {sections
                .into_iter()
                .enumerate()
                .map(|(idx, section)| view! { <NavGroup section=section first={idx == 0} /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn NavGroup(section: NavSection, first: bool) -> impl IntoView {
    let heading_class = if first { "font-bold mb-3" } else { "font-bold mt-3 mb-3" };

    view! {
        <p class=heading_class>{section.heading}</p>
        {section
            .entries
            .into_iter()
            .map(|entry| view! { <NavLink entry=entry /> })
            .collect_view()}
    }
}

#[component]
fn NavLink(entry: RouteEntry) -> impl IntoView {
    let router = expect_context::<Router>();
    let href = router.href(&entry.path);
    let label = entry.label.clone();

    let on_click = {
        let router = router.clone();
        let path = entry.path.clone();
        move |ev: web_sys::MouseEvent| {
            // Let the browser handle new-tab and other modified clicks.
            if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
                return;
            }
            ev.prevent_default();
            router.navigate(&path);
        }
    };
    let aria_current = move || router.is_current(&entry).then_some("page");

    view! {
        <a
            href=href
            class="font-regular text-dolphin-blue mb-2 no-underline hover:underline"
            aria-current=aria_current
            on:click=on_click
        >
            {label}
        </a>
    }
}
