//! theme state
use {
    crate::{
        error::{PaletteError, Result},
        palette::PaletteGenerator,
        theme::{Theme, ThemePatch},
    },
    rand::Rng,
    std::sync::{Arc, RwLock},
    tracing::debug,
};

/// owns the current theme
///
/// every revision is an immutable snapshot: [`ThemeStore::merge`] never
/// touches the previous [`Theme`], it installs a new one
#[derive(Debug, Clone)]
pub struct ThemeStore {
    /// the current snapshot
    current: Arc<Theme>,
    /// how many merges have been applied
    revision: u64,
}

impl ThemeStore {
    /// make a store holding the default theme
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// make a store holding `theme`
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            current: Arc::new(theme),
            revision: 0,
        }
    }

    /// the current theme
    pub fn current(&self) -> Arc<Theme> {
        Arc::clone(&self.current)
    }

    /// the number of merges applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// install a new theme with every token in `patch` overwritten
    ///
    /// tokens missing from `patch` keep their current value. always produces a
    /// new snapshot, even for an empty patch
    pub fn merge(&mut self, patch: &ThemePatch) -> Arc<Theme> {
        let next = Arc::new(patch.apply_to(&self.current));

        self.current = Arc::clone(&next);
        self.revision += 1;

        debug!(
            revision = self.revision,
            changed = patch.len(),
            "merged theme patch"
        );

        next
    }

    /// go back to the default theme
    pub fn reset(&mut self) -> Arc<Theme> {
        self.merge(&ThemePatch::from(Theme::default()))
    }

    /// generate a palette and merge all of it
    pub fn shuffle<R: Rng + ?Sized>(
        &mut self,
        generator: &PaletteGenerator,
        rng: &mut R,
    ) -> Arc<Theme> {
        let palette = generator.generate(rng);
        self.merge(&ThemePatch::from(palette))
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// a [`ThemeStore`] that can be shared between threads
///
/// merges take the write lock, so concurrent read-modify-writes are serialized
#[derive(Debug, Clone, Default)]
pub struct SharedThemeStore {
    /// the wrapped store
    inner: Arc<RwLock<ThemeStore>>,
}

impl SharedThemeStore {
    /// wrap a store
    pub fn new(store: ThemeStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// see [`ThemeStore::current`]
    ///
    /// # Errors
    ///
    /// returns an error if the lock is poisoned
    pub fn current(&self) -> Result<Arc<Theme>> {
        self.inner
            .read()
            .map(|store| store.current())
            .map_err(|e| PaletteError::LockPoisoned(e.to_string()))
    }

    /// see [`ThemeStore::revision`]
    ///
    /// # Errors
    ///
    /// returns an error if the lock is poisoned
    pub fn revision(&self) -> Result<u64> {
        self.inner
            .read()
            .map(|store| store.revision())
            .map_err(|e| PaletteError::LockPoisoned(e.to_string()))
    }

    /// see [`ThemeStore::merge`]
    ///
    /// # Errors
    ///
    /// returns an error if the lock is poisoned
    pub fn merge(&self, patch: &ThemePatch) -> Result<Arc<Theme>> {
        self.inner
            .write()
            .map(|mut store| store.merge(patch))
            .map_err(|e| PaletteError::LockPoisoned(e.to_string()))
    }
}
