//! the global config instance
use {
    crate::config::options::PaletteCss,
    color_eyre::{
        Result,
        eyre::{Context, eyre},
    },
    std::sync::{LazyLock, RwLock, RwLockReadGuard},
};

/// global config instance
///
/// holds the built-in defaults until [`init_config`] loads the files
static CONFIG: LazyLock<RwLock<PaletteCss>> =
    LazyLock::new(|| RwLock::new(PaletteCss::default()));

/// load the config files into the global instance
///
/// # Errors
///
/// returns an error if the config fails to load or validate, the defaults stay in place
pub fn init_config() -> Result<()> {
    install(&CONFIG, PaletteCss::load())
}

/// replace `target` with a freshly loaded config, leaving it untouched on failure
fn install(target: &RwLock<PaletteCss>, loaded: Result<PaletteCss>) -> Result<()> {
    let loaded = loaded.wrap_err("Failed to load configuration")?;
    let mut cfg = target
        .write()
        .map_err(|e| eyre!("Configuration lock poisoned: {}", e))?;

    *cfg = loaded;
    Ok(())
}

/// get a ro ref to the config
pub fn config() -> Result<RwLockReadGuard<'static, PaletteCss>> {
    CONFIG
        .read()
        .map_err(|e| eyre!("Configuration lock poisoned: {}", e))
}

/// get a specific config value with a default fallback
pub fn get_or_default<T, F>(getter: F, default: T) -> T
where
    F: FnOnce(&PaletteCss) -> Option<T>,
    T: Clone,
{
    config()
        .ok()
        .and_then(|cfg| getter(&cfg))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::config::options::{DisplayCfg, GeneratorCfg},
        crate::palette::PaletteMode,
    };

    #[test]
    fn test_failed_load_keeps_defaults() {
        let target = RwLock::new(PaletteCss::default());
        let err = install(&target, Err(eyre!("display.swatch_width: must be between 1 and 32")))
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to load configuration");
        assert!(format!("{:?}", err).contains("swatch_width"));
        assert_eq!(*target.read().unwrap(), PaletteCss::default());
    }

    #[test]
    fn test_loaded_config_replaces_defaults() {
        let target = RwLock::new(PaletteCss::default());
        let loaded = PaletteCss {
            generator: Some(GeneratorCfg {
                mode: Some(PaletteMode::Light),
                seed: Some(3),
            }),
            display: Some(DisplayCfg {
                colored: Some(false),
                swatch_width: Some(2),
            }),
            ..Default::default()
        };

        install(&target, Ok(loaded.clone())).unwrap();

        assert_eq!(*target.read().unwrap(), loaded);
    }
}
