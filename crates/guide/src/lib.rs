//! Web Guide & Tips.
//!
//! A client-rendered documentation site: a fixed menu on the left and one of
//! two content pages on the right, selected by the path in the address bar.
//!
//! - [`routes`]: which page each path shows (pure)
//! - [`router`]: owns the current path and follows navigation
//! - [`location`]: browser and in-memory host address adapters
//! - [`pages`], [`markdown`], [`highlight`]: page content as inert text
//! - [`components`]: Leptos views

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub mod components;
pub mod config;
pub mod error;
pub mod highlight;
pub mod location;
pub mod logging;
pub mod markdown;
pub mod pages;
pub mod router;
pub mod routes;

pub use config::SiteConfig;
pub use error::{GuideError, Result};
pub use router::Router;
pub use routes::{PageId, Resolution, RouteEntry, RouteTable};

use components::App;
use location::{BrowserLocation, Location};

/// Start the guide in the current browser window using the embedded config.
pub fn mount() -> Result<()> {
    let config = SiteConfig::embedded()?;
    log::set_max_level(config.log_level);

    let root = mount_point(&config.mount_id)?;
    let location = Arc::new(BrowserLocation::new(config.history));
    let router = mount_with(root, &config, location)?;
    log::info!(
        "{} mounted into #{} at {}",
        config.title,
        config.mount_id,
        router.current_path()
    );
    Ok(())
}

/// Mount into `root` with an explicit host location. The view stays mounted
/// for the rest of the session.
pub fn mount_with(
    root: web_sys::HtmlElement,
    config: &SiteConfig,
    location: Arc<dyn Location>,
) -> Result<Router> {
    let table = RouteTable::from_config(config)?;
    let router = Router::new(table, location);
    router.listen()?;

    let title = config.title.clone();
    let app_router = router.clone();
    leptos::mount::mount_to(root, move || view! { <App title=title router=app_router /> }).forget();
    Ok(router)
}

/// Look up the host element with id `id`.
pub fn mount_point(id: &str) -> Result<web_sys::HtmlElement> {
    let document = web_sys::window()
        .ok_or(GuideError::NoWindow)?
        .document()
        .ok_or(GuideError::NoDocument)?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| GuideError::MissingMountPoint { id: id.to_string() })?;
    element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| GuideError::Host(format!("#{id} is not an HTML element")))
}
