mod components;
mod config;
mod hooks;
mod i18n;
mod pages;
mod router;
mod utils;

use inkscribe_shared::{ContentStore, SiteConfig};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    // 内容与站点配置通过 context 注入各页面
    let store = use_memo((), |_| ContentStore::sample());
    let config = use_memo((), |_| SiteConfig::default());

    html! {
        <ContextProvider<ContentStore> context={(*store).clone()}>
            <ContextProvider<SiteConfig> context={(*config).clone()}>
                <router::AppRouter />
            </ContextProvider<SiteConfig>>
        </ContextProvider<ContentStore>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
