//! Theme selection and persistence.
//!
//! The selected theme is a single desktop-wide value. [`ThemeStore`] owns it,
//! writes it through a [`ThemeStorage`] backend on every change, and notifies
//! subscribers so renderers never read a hidden global.
//!
//! Palettes are opaque `name -> color` tables; the core only validates keys.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Deserialize;

use crate::config::{DEFAULT_THEME, THEME_STORAGE_KEY, THEMES_TOML};
use crate::error::{DatasetError, StorageError, ThemeError};

// ============================================================================
// Theme Catalog
// ============================================================================

/// A named color palette.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Theme {
    /// Lower-case key used by the `theme` command and in storage.
    pub key: String,
    /// Human readable name.
    pub name: String,
    pub palette: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    themes: Vec<Theme>,
}

/// All themes available to the user, in presentation order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
}

impl ThemeCatalog {
    /// Decode a catalog from a TOML document with a `[[themes]]` array.
    pub fn from_toml(source: &str) -> Result<Self, DatasetError> {
        let doc: CatalogDocument = toml::from_str(source).map_err(|e| DatasetError::Parse {
            document: "theme",
            message: e.message().to_string(),
        })?;
        if doc.themes.is_empty() {
            return Err(DatasetError::Empty("theme"));
        }
        Ok(Self { themes: doc.themes })
    }

    /// The catalog bundled with the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Self::from_toml(THEMES_TOML)
    }

    pub fn get(&self, key: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Theme keys in presentation order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }

    /// Key used when nothing valid is persisted.
    fn fallback_key(&self) -> &str {
        if self.contains(DEFAULT_THEME) {
            DEFAULT_THEME
        } else {
            // Catalog construction guarantees at least one theme
            &self.themes[0].key
        }
    }
}

// ============================================================================
// Storage Backends
// ============================================================================

/// Key/value backend holding the theme preference.
pub trait ThemeStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage, used when no browser storage exists and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Theme Store
// ============================================================================

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Theme) + Send + Sync>;

/// The desktop-wide selected theme.
pub struct ThemeStore {
    catalog: ThemeCatalog,
    current: String,
    storage: Box<dyn ThemeStorage>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ThemeStore {
    /// Create a store, restoring the persisted selection.
    ///
    /// An absent or unrecognized value falls back to the default theme.
    pub fn load(catalog: ThemeCatalog, storage: Box<dyn ThemeStorage>) -> Self {
        let current = match storage.load(THEME_STORAGE_KEY) {
            Some(saved) if catalog.contains(&saved) => saved,
            Some(saved) => {
                log::warn!("ignoring unrecognized saved theme '{}'", saved);
                catalog.fallback_key().to_string()
            }
            None => catalog.fallback_key().to_string(),
        };
        log::debug!("theme restored: {}", current);

        Self {
            catalog,
            current,
            storage,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn current_key(&self) -> &str {
        &self.current
    }

    pub fn current(&self) -> &Theme {
        self.catalog
            .get(&self.current)
            .unwrap_or(&self.catalog.themes[0])
    }

    /// Select, persist and broadcast a theme.
    ///
    /// Nothing changes if the key is unknown or the write fails.
    pub fn set(&mut self, key: &str) -> Result<&Theme, ThemeError> {
        if !self.catalog.contains(key) {
            return Err(ThemeError::Unknown(key.to_string()));
        }
        self.storage.save(THEME_STORAGE_KEY, key)?;
        self.current = key.to_string();
        log::info!("theme switched to {}", key);

        let theme = self.current();
        for (_, listener) in &self.listeners {
            listener(theme);
        }
        Ok(theme)
    }

    /// Register a callback invoked after every successful [`set`](Self::set).
    pub fn subscribe(&mut self, listener: impl Fn(&Theme) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Read the persisted value directly from the backend.
    pub fn persisted(&self) -> Option<String> {
        self.storage.load(THEME_STORAGE_KEY)
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current)
            .field("themes", &self.catalog.keys().collect::<Vec<_>>())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
