use inkscribe_shared::{ContentStore, SiteConfig};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Articles injected by the app root. Falls back to the sample articles when
/// a component is mounted outside the provider.
#[hook]
pub fn use_content_store() -> ContentStore {
    use_context::<ContentStore>().unwrap_or_default()
}

#[hook]
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
///
/// Call this hook inside top-level pages (e.g. `HomePage`) to keep navigation
/// consistent.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();
    let path = location.map(|loc| loc.path().to_string());

    use_effect_with(path, move |path| {
        if path.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
