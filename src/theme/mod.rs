//! Light/dark theme and color palette selection, persisted across visits.
//!
//! The controller owns a [`KeyValueStore`] and remembers, per theme, the
//! palette in use (`paletteIndexDark` / `paletteIndexLight`) and the one
//! picked on the previous visit (`lastPaletteIndexDark` /
//! `lastPaletteIndexLight`). Each page load picks a fresh palette that
//! differs from the last one whenever the dice allow.

pub mod palette;
pub mod store;

pub use palette::{Palette, DARK_PALETTES, LIGHT_PALETTES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
pub use store::{KeyValueStore, MemoryStore};

use crate::options::ThemeOptions;

/// Store key holding `"dark"` or `"light"`.
pub const THEME_KEY: &str = "theme";

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background; the document root carries the `dark` class.
    Dark,
}

impl Theme {
    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but the two literals is unknown.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Whether this is the dark scheme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other scheme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Palettes available in this scheme.
    #[must_use]
    pub fn palettes(self) -> &'static [Palette] {
        match self {
            Self::Light => &LIGHT_PALETTES,
            Self::Dark => &DARK_PALETTES,
        }
    }

    /// Store key of the palette in use.
    #[must_use]
    pub fn palette_key(self) -> &'static str {
        match self {
            Self::Light => "paletteIndexLight",
            Self::Dark => "paletteIndexDark",
        }
    }

    /// Store key of the palette picked on the previous visit.
    #[must_use]
    pub fn last_palette_key(self) -> &'static str {
        match self {
            Self::Light => "lastPaletteIndexLight",
            Self::Dark => "lastPaletteIndexDark",
        }
    }
}

/// Rendered theme state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeView {
    /// Active scheme.
    pub theme: Theme,
    /// Active palette within the scheme.
    pub palette_index: usize,
    /// CSS custom properties to set on the document root.
    pub variables: Vec<(String, String)>,
    /// `aria-label` of the theme toggles.
    pub toggle_label: &'static str,
    /// `aria-pressed` of the theme toggles (and of the active swatch).
    pub toggle_pressed: bool,
}

/// Theme and palette state over a persistent store.
pub struct ThemeController {
    store: Box<dyn KeyValueStore>,
    options: ThemeOptions,
    theme: Theme,
    palette_index: usize,
    rng: StdRng,
}

impl ThemeController {
    /// Controller seeded from the thread RNG.
    #[must_use]
    pub fn new(store: Box<dyn KeyValueStore>, options: ThemeOptions) -> Self {
        Self::with_rng(store, options, StdRng::from_rng(&mut rand::rng()))
    }

    /// Controller with an explicit RNG (deterministic tests).
    #[must_use]
    pub fn with_rng(
        store: Box<dyn KeyValueStore>,
        options: ThemeOptions,
        rng: StdRng,
    ) -> Self {
        Self {
            store,
            options,
            theme: Theme::Light,
            palette_index: 0,
            rng,
        }
    }

    /// Active scheme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Active palette index.
    #[must_use]
    pub fn palette_index(&self) -> usize {
        self.palette_index
    }

    /// Replace tuning; applies from the next palette pick.
    pub fn set_options(&mut self, options: ThemeOptions) {
        self.options = options;
    }

    /// Read access to the backing store.
    #[must_use]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Current state for rendering.
    #[must_use]
    pub fn view(&self) -> ThemeView {
        let palettes = self.theme.palettes();
        let variables = palettes
            .get(self.palette_index)
            .map(Palette::css_variables)
            .unwrap_or_default();
        let dark = self.theme.is_dark();
        ThemeView {
            theme: self.theme,
            palette_index: self.palette_index,
            variables,
            toggle_label: if dark {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            },
            toggle_pressed: dark,
        }
    }

    /// Page-load setup: stored theme, else the host preference, then a
    /// freshly picked palette.
    pub fn initialize(&mut self, prefers_dark: bool) -> ThemeView {
        let stored = self
            .store
            .get(THEME_KEY)
            .and_then(|v| Theme::from_stored(&v));
        let theme = stored.unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        });
        log::debug!(
            "theme init: {} ({})",
            theme.as_str(),
            if stored.is_some() { "stored" } else { "preference" }
        );
        let _ = self.apply_theme(theme);
        self.randomize_palette()
    }

    /// Switch scheme, persist it, and restore that scheme's palette.
    pub fn apply_theme(&mut self, theme: Theme) -> ThemeView {
        self.theme = theme;
        self.persist(THEME_KEY, theme.as_str());
        let index = self
            .store
            .get(theme.palette_key())
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(self.options.default_palette as i64);
        self.apply_palette_signed(index)
    }

    /// Flip between light and dark.
    pub fn toggle(&mut self) -> ThemeView {
        self.apply_theme(self.theme.toggled())
    }

    /// Select palette `index` (clamped) for the current scheme and persist
    /// it.
    pub fn apply_palette(&mut self, index: usize) -> ThemeView {
        self.apply_palette_signed(i64::try_from(index).unwrap_or(i64::MAX))
    }

    /// Pick this visit's palette.
    ///
    /// With no record of a previous visit the default palette is used;
    /// otherwise a random one, re-rolled a few times to avoid repeating
    /// the previous pick.
    pub fn randomize_palette(&mut self) -> ThemeView {
        let count = self.theme.palettes().len();
        let last_key = self.theme.last_palette_key();
        let last = self.store.get(last_key);
        let first_visit =
            matches!(last.as_deref().map(str::trim), None | Some("-1"));

        let next = if first_visit || count == 0 {
            self.options.default_palette
        } else {
            let last = last.and_then(|v| v.trim().parse::<usize>().ok());
            let mut next = self.rng.random_range(0..count);
            if count > 1 {
                let mut attempts = 0;
                while Some(next) == last && attempts < self.options.reroll_attempts
                {
                    next = self.rng.random_range(0..count);
                    attempts += 1;
                }
            }
            next
        };

        self.persist(last_key, &next.to_string());
        self.apply_palette(next)
    }

    fn apply_palette_signed(&mut self, index: i64) -> ThemeView {
        let max = self.theme.palettes().len().saturating_sub(1) as i64;
        let safe = index.clamp(0, max) as usize;
        self.palette_index = safe;
        self.persist(self.theme.palette_key(), &safe.to_string());
        self.view()
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("failed to persist {key}={value}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(entries: &[(&'static str, &'static str)]) -> ThemeController {
        ThemeController::with_rng(
            Box::new(MemoryStore::with_entries(entries.iter().copied())),
            ThemeOptions::default(),
            StdRng::seed_from_u64(7),
        )
    }

    fn stored(c: &ThemeController, key: &str) -> Option<String> {
        c.store().get(key)
    }

    #[test]
    fn first_visit_uses_default_palette_and_preference() {
        let mut c = controller(&[]);
        let view = c.initialize(true);
        assert_eq!(view.theme, Theme::Dark);
        assert_eq!(view.palette_index, 2);
        assert_eq!(stored(&c, "theme").as_deref(), Some("dark"));
        assert_eq!(stored(&c, "lastPaletteIndexDark").as_deref(), Some("2"));
        assert_eq!(stored(&c, "paletteIndexDark").as_deref(), Some("2"));
    }

    #[test]
    fn stored_theme_beats_preference() {
        let mut c = controller(&[("theme", "light")]);
        assert_eq!(c.initialize(true).theme, Theme::Light);
    }

    #[test]
    fn later_visits_avoid_last_palette() {
        for seed in 0..50 {
            let mut c = ThemeController::with_rng(
                Box::new(MemoryStore::with_entries([
                    ("theme", "light"),
                    ("lastPaletteIndexLight", "1"),
                ])),
                ThemeOptions {
                    reroll_attempts: 64,
                    ..ThemeOptions::default()
                },
                StdRng::seed_from_u64(seed),
            );
            let view = c.initialize(false);
            assert_ne!(view.palette_index, 1, "seed {seed}");
            assert!(view.palette_index < 4);
            assert_eq!(
                stored(&c, "lastPaletteIndexLight"),
                Some(view.palette_index.to_string())
            );
        }
    }

    #[test]
    fn apply_palette_clamps_and_persists() {
        let mut c = controller(&[]);
        let _ = c.apply_theme(Theme::Dark);
        let view = c.apply_palette(9);
        assert_eq!(view.palette_index, 3);
        assert_eq!(stored(&c, "paletteIndexDark").as_deref(), Some("3"));
        assert_eq!(view.variables, DARK_PALETTES[3].css_variables());
    }

    #[test]
    fn theme_switch_restores_per_theme_palette() {
        let mut c = controller(&[
            ("paletteIndexDark", "0"),
            ("paletteIndexLight", "garbage"),
        ]);
        assert_eq!(c.apply_theme(Theme::Dark).palette_index, 0);
        // Unparsable falls back to the default.
        assert_eq!(c.apply_theme(Theme::Light).palette_index, 2);
        assert_eq!(c.apply_theme(Theme::Dark).palette_index, 0);
    }

    #[test]
    fn negative_stored_palette_clamps_to_first() {
        let mut c = controller(&[("paletteIndexLight", "-4")]);
        assert_eq!(c.apply_theme(Theme::Light).palette_index, 0);
    }

    #[test]
    fn toggle_flips_and_labels() {
        let mut c = controller(&[("theme", "dark")]);
        let _ = c.initialize(false);
        let view = c.toggle();
        assert_eq!(view.theme, Theme::Light);
        assert_eq!(view.toggle_label, "Switch to dark mode");
        assert!(!view.toggle_pressed);
        assert_eq!(stored(&c, "theme").as_deref(), Some("light"));

        let view = c.toggle();
        assert_eq!(view.toggle_label, "Switch to light mode");
        assert!(view.toggle_pressed);
    }
}
