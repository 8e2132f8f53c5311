use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;
use dioxus::prelude::*;
use site::config::SiteConfig;
use site::theme;

fn main() {
    let config = SiteConfig::from_build_env();
    dioxus_logger::init(config.log_level).expect("failed to init logger");

    // Phase one of theme initialization: the webview has no localStorage
    // shared with us, so the head script is rendered from the prefs file.
    let storage = ui::compat::platform_storage();
    let initial = theme::get_initial_theme(&storage);
    drop(storage);

    let window = WindowBuilder::new().with_title(ui::PAGE_TITLE);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(theme::prepaint_head(initial)),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
