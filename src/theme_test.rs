use super::*;

#[derive(Default)]
struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, theme: Theme) {
        self.value = Some(theme.as_str().to_owned());
        self.writes += 1;
    }
}

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn as_str_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn read_preference_uses_store() {
    let mut store = MemoryStore::default();
    assert_eq!(read_preference(&store), Theme::Light);
    store.value = Some("dark".to_owned());
    assert_eq!(read_preference(&store), Theme::Dark);
}

#[test]
fn double_toggle_is_identity_and_store_tracks_applied() {
    let mut store = MemoryStore::default();
    let applied = read_preference(&store);
    assert_eq!(applied, Theme::Light);

    let applied = toggle(&mut store, applied);
    assert_eq!(applied, Theme::Dark);
    assert_eq!(store.value.as_deref(), Some("dark"));

    let applied = toggle(&mut store, applied);
    assert_eq!(applied, Theme::Light);
    assert_eq!(store.value.as_deref(), Some("light"));
    assert_eq!(store.writes, 2);
}
