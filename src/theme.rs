use crate::errors::StoreError;
use crate::storage::StateStore;

/// Store key holding the display preference.
pub const THEME_KEY: &str = "theme";

/// Binary display preference, persisted independently of ledger state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Human-facing label shown by the theme view.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light Mode",
            Theme::Dark => "Dark Mode",
        }
    }

    /// Loads the persisted preference; absent or unrecognized values fall
    /// back to light.
    pub fn load(store: &dyn StateStore) -> Result<Self, StoreError> {
        Ok(store
            .get(THEME_KEY)?
            .as_deref()
            .and_then(Self::parse)
            .unwrap_or_default())
    }

    pub fn persist(self, store: &mut dyn StateStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn absent_preference_defaults_to_light() {
        let store = MemoryStore::new();
        assert_eq!(Theme::load(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn persisted_preference_round_trips() {
        let mut store = MemoryStore::new();
        Theme::Dark.persist(&mut store).unwrap();
        assert_eq!(Theme::load(&store).unwrap(), Theme::Dark);
    }

    #[test]
    fn unrecognized_values_fall_back_to_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(Theme::load(&store).unwrap(), Theme::Light);
    }

    #[test]
    fn toggle_flips_between_the_two_modes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
