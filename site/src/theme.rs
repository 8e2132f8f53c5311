//! Light/dark theme preference.
//!
//! The preference lives in two places that must agree: durable storage under
//! [`STORAGE_KEY`], and the [`MARKER_ATTRIBUTE`] on the document root that the
//! stylesheet selects palettes with. Initialization happens in two phases:
//!
//! 1. [`prepaint`] runs before first paint (the inline [`PREPAINT_SCRIPT`] on
//!    the web, [`prepaint_head`] on desktop) and sets the marker from storage.
//! 2. [`ThemeSettings::mount`] runs when the interactive root mounts. It reads
//!    the same storage key, never the marker, and re-applies the marker.
//!
//! Neither phase writes storage, so both observe the same value.

use dioxus_logger::tracing::debug;
use serde::de::value::Error as ValueError;
use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::Deserialize;
use serde::Serialize;

use crate::storage::DurableStorage;
use crate::storage::StorageError;

/// Key the preference is persisted under.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document root carrying the active theme.
pub const MARKER_ATTRIBUTE: &str = "data-theme";

/// Inline, blocking script for the web page shell.
///
/// Must be kept in sync with [`get_initial_theme`]: anything other than the
/// exact strings `dark` / `light`, or any storage exception, yields `dark`.
pub const PREPAINT_SCRIPT: &str = "(function(){var t='dark';try{var s=localStorage.getItem('theme');if(s==='light'||s==='dark'){t=s;}}catch(e){}document.documentElement.setAttribute('data-theme',t);})();";

/// The user's display mode.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// The value written to storage and to the marker attribute.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Caption of the toggle button; it names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "🌞 Light",
            Self::Light => "🌙 Dark",
        }
    }

    /// Compact caption for the mobile toggle.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "🌞",
            Self::Light => "🌙",
        }
    }
}

/// Why a stored preference could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("no theme has been stored yet")]
    Missing,

    #[error("stored theme `{0}` is neither `dark` nor `light`")]
    Malformed(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The marker attribute could not be set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("theme marker not set: {0}")]
pub struct MarkerError(pub String);

/// Sink for the rendering-context marker (the root element's attribute).
pub trait ThemeMarker {
    fn apply(&mut self, pref: ThemePreference) -> Result<(), MarkerError>;
}

/// Reads the stored preference, reporting every way it can be unusable.
///
/// The stored string is the serde form of [`ThemePreference`], so matching is
/// exact: `Light` or ` dark` are malformed.
pub fn read_theme<S: DurableStorage + ?Sized>(
    storage: &S,
) -> Result<ThemePreference, ThemeError> {
    let raw = storage.get(STORAGE_KEY)?.ok_or(ThemeError::Missing)?;
    let de: StrDeserializer<'_, ValueError> = raw.as_str().into_deserializer();
    match ThemePreference::deserialize(de) {
        Ok(pref) => Ok(pref),
        Err(_) => Err(ThemeError::Malformed(raw)),
    }
}

/// The preference to start with. Unusable storage degrades to the default.
pub fn get_initial_theme<S: DurableStorage + ?Sized>(storage: &S) -> ThemePreference {
    match read_theme(storage) {
        Ok(pref) => pref,
        Err(e) => {
            debug!("using default theme: {e}");
            ThemePreference::default()
        }
    }
}

/// Sets the marker. A failure leaves the page on its previous palette and is
/// only logged.
pub fn apply_theme<M: ThemeMarker + ?Sized>(marker: &mut M, pref: ThemePreference) {
    if let Err(e) = marker.apply(pref) {
        debug!("{e}");
    }
}

pub fn toggle_theme(current: ThemePreference) -> ThemePreference {
    current.toggled()
}

pub fn try_persist_theme<S: DurableStorage + ?Sized>(
    storage: &mut S,
    pref: ThemePreference,
) -> Result<(), StorageError> {
    storage.set(STORAGE_KEY, pref.as_str())
}

/// Best-effort write. The session keeps the new value even if this fails.
pub fn persist_theme<S: DurableStorage + ?Sized>(storage: &mut S, pref: ThemePreference) {
    if let Err(e) = try_persist_theme(storage, pref) {
        debug!("theme preference not persisted: {e}");
    }
}

/// Phase 1: read storage and set the marker. Performs no writes.
pub fn prepaint<S, M>(storage: &S, marker: &mut M) -> ThemePreference
where
    S: DurableStorage + ?Sized,
    M: ThemeMarker + ?Sized,
{
    let pref = get_initial_theme(storage);
    apply_theme(marker, pref);
    pref
}

/// Head fragment for shells that know the preference before the page loads.
pub fn prepaint_head(pref: ThemePreference) -> String {
    format!(
        "<script>document.documentElement.setAttribute('{MARKER_ATTRIBUTE}','{}');</script>",
        pref.as_str()
    )
}

/// The interactive root's view of the theme: an in-memory mirror plus the
/// storage and marker it keeps in step.
#[derive(Debug)]
pub struct ThemeSettings<S, M> {
    storage: S,
    marker: M,
    current: ThemePreference,
}

impl<S: DurableStorage, M: ThemeMarker> ThemeSettings<S, M> {
    /// Phase 2: seed the mirror from storage and re-apply the marker.
    pub fn mount(storage: S, mut marker: M) -> Self {
        let current = prepaint(&storage, &mut marker);
        Self {
            storage,
            marker,
            current,
        }
    }

    pub fn get(&self) -> ThemePreference {
        self.current
    }

    /// Marker and mirror are updated before the write is attempted, so a
    /// failed write never rolls the session back.
    pub fn set(&mut self, pref: ThemePreference) {
        self.current = pref;
        apply_theme(&mut self.marker, pref);
        persist_theme(&mut self.storage, pref);
    }

    pub fn toggle(&mut self) -> ThemePreference {
        let next = toggle_theme(self.current);
        self.set(next);
        next
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    /// Marker that remembers every value applied to it.
    #[derive(Debug, Default)]
    struct RecordingMarker(Vec<ThemePreference>);

    impl RecordingMarker {
        fn last(&self) -> Option<ThemePreference> {
            self.0.last().copied()
        }
    }

    impl ThemeMarker for RecordingMarker {
        fn apply(&mut self, pref: ThemePreference) -> Result<(), MarkerError> {
            self.0.push(pref);
            Ok(())
        }
    }

    /// Marker whose document has no root element.
    #[derive(Debug, Default)]
    struct DetachedMarker {
        attempts: usize,
    }

    impl ThemeMarker for DetachedMarker {
        fn apply(&mut self, _: ThemePreference) -> Result<(), MarkerError> {
            self.attempts += 1;
            Err(MarkerError("no document root".to_owned()))
        }
    }

    const BOTH: [ThemePreference; 2] = [ThemePreference::Dark, ThemePreference::Light];

    #[test]
    fn defaults_to_dark_when_nothing_stored() {
        assert_eq!(get_initial_theme(&MemoryStorage::new()), ThemePreference::Dark);
        assert_eq!(read_theme(&MemoryStorage::new()), Err(ThemeError::Missing));
    }

    #[test]
    fn defaults_to_dark_when_storage_unavailable() {
        let storage = MemoryStorage::unavailable();
        assert_eq!(get_initial_theme(&storage), ThemePreference::Dark);
        assert!(matches!(read_theme(&storage), Err(ThemeError::Storage(_))));
    }

    #[test]
    fn malformed_values_fall_back() {
        for raw in ["", "blue", "Light", " dark", "DARK"] {
            let storage = MemoryStorage::new().with_value(STORAGE_KEY, raw);
            assert_eq!(
                read_theme(&storage),
                Err(ThemeError::Malformed(raw.to_owned()))
            );
            assert_eq!(get_initial_theme(&storage), ThemePreference::Dark);
        }
    }

    #[test]
    fn persisted_value_survives_reload() {
        for pref in BOTH {
            let mut storage = MemoryStorage::new();
            persist_theme(&mut storage, pref);
            assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some(pref.as_str()));
            assert_eq!(get_initial_theme(&storage), pref);
        }
    }

    #[test]
    fn wire_form_is_lowercase() {
        for pref in BOTH {
            let json = serde_json::to_string(&pref).unwrap();
            assert_eq!(json, format!("\"{}\"", pref.as_str()));
            assert_eq!(serde_json::from_str::<ThemePreference>(&json).unwrap(), pref);
        }
        assert!(serde_json::from_str::<ThemePreference>("\"Light\"").is_err());

        // What `read_theme` accepts is exactly the serde form.
        for pref in BOTH {
            let storage = MemoryStorage::new().with_value(STORAGE_KEY, pref.as_str());
            assert_eq!(read_theme(&storage), Ok(pref));
        }
    }

    #[test]
    fn double_toggle_is_identity() {
        for pref in BOTH {
            assert_ne!(toggle_theme(pref), pref);
            assert_eq!(toggle_theme(toggle_theme(pref)), pref);
        }
    }

    #[test]
    fn string_forms() {
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(ThemePreference::Light.as_str(), "light");
        assert_eq!(ThemePreference::Dark.toggle_label(), "🌞 Light");
        assert_eq!(ThemePreference::Light.toggle_icon(), "🌙");
    }

    #[test]
    fn marker_tracks_last_persisted_value() {
        let mut settings = ThemeSettings::mount(MemoryStorage::new(), RecordingMarker::default());
        for _ in 0..5 {
            settings.toggle();
            let stored = read_theme(settings.storage()).unwrap();
            assert_eq!(settings.marker().last(), Some(stored));
            assert_eq!(settings.get(), stored);
        }
        assert_eq!(settings.get(), ThemePreference::Light);
    }

    #[test]
    fn failed_write_keeps_session_state() {
        let storage = MemoryStorage::new()
            .with_value(STORAGE_KEY, "dark")
            .read_only();
        let mut settings = ThemeSettings::mount(storage, RecordingMarker::default());

        assert_eq!(settings.toggle(), ThemePreference::Light);
        assert_eq!(settings.get(), ThemePreference::Light);
        assert_eq!(settings.marker().last(), Some(ThemePreference::Light));
        // The write failed, so a reload would still see the old value.
        assert_eq!(get_initial_theme(settings.storage()), ThemePreference::Dark);
    }

    #[test]
    fn unavailable_storage_still_toggles() {
        let mut settings =
            ThemeSettings::mount(MemoryStorage::unavailable(), RecordingMarker::default());
        assert_eq!(settings.get(), ThemePreference::Dark);
        settings.set(ThemePreference::Light);
        assert_eq!(settings.marker().last(), Some(ThemePreference::Light));
    }

    #[test]
    fn marker_failure_still_persists() {
        let mut settings = ThemeSettings::mount(MemoryStorage::new(), DetachedMarker::default());
        assert_eq!(settings.get(), ThemePreference::Dark);

        assert_eq!(settings.toggle(), ThemePreference::Light);
        assert_eq!(settings.get(), ThemePreference::Light);
        assert_eq!(read_theme(settings.storage()), Ok(ThemePreference::Light));
        // mount + one toggle
        assert_eq!(settings.marker().attempts, 2);
    }

    #[test]
    fn both_phases_agree() {
        for stored in [None, Some("light"), Some("dark"), Some("garbage")] {
            let storage = match stored {
                Some(v) => MemoryStorage::new().with_value(STORAGE_KEY, v),
                None => MemoryStorage::new(),
            };
            let mut shell = RecordingMarker::default();
            let painted = prepaint(&storage, &mut shell);

            let settings = ThemeSettings::mount(storage, RecordingMarker::default());
            assert_eq!(shell.last(), Some(painted));
            assert_eq!(settings.get(), painted);
            assert_eq!(settings.marker().last(), Some(painted));
        }
    }

    #[test]
    fn mount_does_not_write() {
        let settings = ThemeSettings::mount(MemoryStorage::new(), RecordingMarker::default());
        assert_eq!(settings.storage().get(STORAGE_KEY), Ok(None));
    }

    #[test]
    fn prepaint_script_matches_constants() {
        assert!(PREPAINT_SCRIPT.contains(&format!("localStorage.getItem('{STORAGE_KEY}')")));
        assert!(PREPAINT_SCRIPT.contains(&format!("setAttribute('{MARKER_ATTRIBUTE}'")));
        assert!(PREPAINT_SCRIPT.contains(&format!("var t='{}'", ThemePreference::default())));
        for pref in BOTH {
            assert!(PREPAINT_SCRIPT.contains(&format!("s==='{pref}'")));
        }
    }

    #[test]
    fn prepaint_head_sets_attribute() {
        assert_eq!(
            prepaint_head(ThemePreference::Light),
            "<script>document.documentElement.setAttribute('data-theme','light');</script>"
        );
    }
}
