use dioxus::prelude::*;
use site::config::SiteConfig;

// The theme is applied by the inline script in `index.html` before the wasm
// bundle loads; `ui::App` then re-reads the same storage key when it mounts.
fn main() {

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    dioxus_logger::init(config.log_level).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}

#[cfg(test)]
mod tests {
    use site::theme::PREPAINT_SCRIPT;

    const SHELL: &str = include_str!("../index.html");

    #[test]
    fn shell_embeds_prepaint_script() {
        assert!(SHELL.contains(PREPAINT_SCRIPT));
    }

    #[test]
    fn prepaint_runs_before_app_mounts() {
        let script = SHELL.find(PREPAINT_SCRIPT).unwrap();
        let mount = SHELL.find(r#"<div id="main">"#).unwrap();
        assert!(script < mount);
    }

    #[test]
    fn shell_uses_page_title() {
        assert!(SHELL.contains(ui::PAGE_TITLE));
    }

    #[test]
    fn public_dir_lists_every_image() {
        let manifest = include_str!("../public/README.md");
        for src in site::content::local_images() {
            let name = src.trim_start_matches('/');
            assert!(manifest.contains(&format!("`{name}`")), "{name} missing");
        }
    }
}
