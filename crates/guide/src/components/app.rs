use leptos::prelude::*;

use super::{Banner, ContentPage, NavigationShell, NotFound};
use crate::router::Router;
use crate::routes::{PageId, Resolution};

/// Application root: banner, menu, and the routed page.
#[component]
pub fn App(#[prop(into)] title: String, router: Router) -> impl IntoView {
    provide_context(router);

    view! {
        <div>
            <Banner title=title.clone() />
            <div class="flex items-center justify-center">
                <div class="w-1000 flex mt-12">
                    <NavigationShell />
                    <Outlet site_title=title />
                </div>
            </div>
        </div>
    }
}

/// Shows the page the router currently selects. Memoized on the
/// resolution, so paths that resolve to the same page do not re-render.
#[component]
fn Outlet(site_title: String) -> impl IntoView {
    let router = expect_context::<Router>();
    let active = Memo::new(move |_| router.active());

    Effect::new(move |_| {
        let title = window_title(&active.get(), &site_title);
        match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document.set_title(&title),
            None => log::warn!("no document to set title {title:?} on"),
        }
    });

    move || match active.get() {
        Resolution::Page(page) => view! { <ContentPage page=page /> }.into_any(),
        Resolution::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
    }
}

fn window_title(active: &Resolution, site_title: &str) -> String {
    let page = active.page().map(PageId::title).unwrap_or("Page not found");
    format!("{page} | {site_title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        let title = window_title(&Resolution::Page(PageId::JavascriptSyntaxGuide), "Web Guide & Tips");
        assert_eq!(title, "Javascript Syntax Guide | Web Guide & Tips");

        let title = window_title(&Resolution::NotFound("/nope".into()), "Web Guide & Tips");
        assert_eq!(title, "Page not found | Web Guide & Tips");
    }
}
