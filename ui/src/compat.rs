// Platform glue: timers, durable storage, the theme marker and scroll reveals.
//
// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    use dioxus_logger::tracing::debug;
    use site::reveal;
    use site::storage::DurableStorage;
    use site::storage::StorageError;
    use site::theme::MarkerError;
    use site::theme::ThemeMarker;
    use site::theme::ThemePreference;
    use site::theme::MARKER_ATTRIBUTE;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use web_sys::IntersectionObserver;
    use web_sys::IntersectionObserverEntry;
    use web_sys::IntersectionObserverInit;

    pub type PlatformStorage = LocalStorage;
    pub type PlatformMarker = DocumentRoot;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub fn platform_storage() -> PlatformStorage {
        LocalStorage
    }

    /// The browser's `window.localStorage`.
    ///
    /// Looked up on every access: private browsing modes and blocked cookies
    /// make it throw or return `null`, and that is reported, not cached.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LocalStorage;

    impl LocalStorage {
        fn handle() -> Result<web_sys::Storage, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
            window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(js_reason(&e)))?
                .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_owned()))
        }
    }

    impl DurableStorage for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Self::handle()?
                .get_item(key)
                .map_err(|e| StorageError::Read {
                    key: key.to_owned(),
                    reason: js_reason(&e),
                })
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            Self::handle()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_owned(),
                    reason: js_reason(&e),
                })
        }
    }

    /// `document.documentElement`, i.e. `<html>`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct DocumentRoot;

    impl ThemeMarker for DocumentRoot {
        fn apply(&mut self, pref: ThemePreference) -> Result<(), MarkerError> {
            let root = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| doc.document_element())
                .ok_or_else(|| MarkerError("no document root".to_owned()))?;
            root.set_attribute(MARKER_ATTRIBUTE, pref.as_str())
                .map_err(|e| MarkerError(js_reason(&e)))
        }
    }

    /// Starts revealing `.reveal` blocks as they scroll into view.
    pub fn observe_reveals() {
        if let Err(e) = try_observe_reveals() {
            debug!("scroll reveal disabled: {}", js_reason(&e));
        }
    }

    fn try_observe_reveals() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|win| win.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(e) = target.class_list().add_1(reveal::IN_VIEW_CLASS) {
                        debug!("reveal failed: {}", js_reason(&e));
                    }
                    observer.unobserve(&target);
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(reveal::THRESHOLD));
        let callback: &js_sys::Function = on_intersect.as_ref().unchecked_ref();
        let observer = IntersectionObserver::new_with_options(callback, &options)?;
        // lives as long as the page
        on_intersect.forget();

        if let Some(root) = document.document_element() {
            root.class_list().add_1(reveal::READY_CLASS)?;
        }
        let pending = document.query_selector_all(&reveal::pending_selector())?;
        for i in 0..pending.length() {
            let el = pending.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok());
            if let Some(el) = el {
                observer.observe(&el);
            }
        }
        Ok(())
    }

    fn js_reason(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    use dioxus::prelude::*;
    use dioxus_logger::tracing::debug;
    use dioxus_logger::tracing::info;
    use site::storage::file::FileStorage;
    use site::storage::DurableStorage;
    use site::reveal::REVEAL_SCRIPT;
    use site::storage::MemoryStorage;
    use site::theme::MarkerError;
    use site::theme::ThemeMarker;
    use site::theme::ThemePreference;
    use site::theme::MARKER_ATTRIBUTE;

    pub type PlatformStorage = Box<dyn DurableStorage>;
    pub type PlatformMarker = WebviewRoot;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// The JSON prefs file in the user's config directory, or memory when the
    /// platform has no such directory.
    pub fn platform_storage() -> PlatformStorage {
        match FileStorage::open_default() {
            Ok(file) => {
                info!("preferences file: {}", file.path().display());
                Box::new(file)
            }
            Err(e) => {
                debug!("{e}; preferences will not survive a restart");
                Box::new(MemoryStorage::new())
            }
        }
    }

    /// The webview's `<html>` element, reached through script evaluation.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct WebviewRoot;

    impl ThemeMarker for WebviewRoot {
        fn apply(&mut self, pref: ThemePreference) -> Result<(), MarkerError> {
            let js = format!(
                "document.documentElement.setAttribute('{MARKER_ATTRIBUTE}', '{}');",
                pref.as_str()
            );
            // fire and forget; nothing to read back
            let _ = document::eval(&js);
            Ok(())
        }
    }

    /// Starts revealing `.reveal` blocks as they scroll into view.
    pub fn observe_reveals() {
        let _ = document::eval(REVEAL_SCRIPT);
    }
}
