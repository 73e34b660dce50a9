//! The application context: [`FolioEngine`] owns every controller, turns
//! input into commands and commands into [`FolioEffect`]s, and steps the
//! animation loop.

mod animation;
/// The engine's command vocabulary.
pub mod command;
/// Effects and frames handed to the presenter.
pub mod effect;
mod input;
mod options;
/// Page geometry source.
pub mod viewport;


pub use command::FolioCommand;
pub use effect::{FolioEffect, Frame};
use rand::rngs::StdRng;
pub use viewport::{StaticViewport, Viewport};

use crate::deck::{CursorHint, DeckNavigator, SwipeTracker};
use crate::gallery::{Carousel, LightboxController};
use crate::input::InputProcessor;
use crate::modal::ModalController;
use crate::motion::MotionLoop;
use crate::options::Options;
use crate::theme::{KeyValueStore, ThemeController};
use crate::util::frame_timing::FrameTiming;

/// What the page offers, discovered once at startup.
#[derive(Debug, Clone, Default)]
pub struct PageSetup {
    /// Number of deck cards.
    pub card_count: usize,
    /// Number of modal tabs; `None` when the page has no modal, which
    /// makes every modal command a silent no-op.
    pub modal_tabs: Option<usize>,
    /// One instance per carousel root, in document order.
    pub carousels: Vec<Carousel>,
    /// The host prefers a dark color scheme.
    pub prefers_dark: bool,
}

/// Application context owning every interaction controller.
///
/// The controllers are independent state machines; the engine routes
/// commands to them and collects the effects the presenter must apply.
/// The motion loop shares the deck's card set and is stepped through
/// [`tick`](Self::tick) by whatever frame scheduler the host has.
///
/// # Usage
///
/// ```ignore
/// let mut engine = FolioEngine::new(setup, Options::default(), store);
/// apply(engine.startup());
/// // per event:
/// apply(engine.handle_event(event, &viewport));
/// // per animation frame:
/// if let Some(frame) = engine.tick(timestamp_ms) { write(frame) }
/// ```
pub struct FolioEngine {
    options: Options,
    prefers_dark: bool,
    started: bool,

    motion: MotionLoop,
    deck: DeckNavigator,
    swipe: SwipeTracker,
    modal: Option<ModalController>,
    carousels: Vec<Carousel>,
    lightbox: LightboxController,
    theme: ThemeController,

    input: InputProcessor,
    cursor: CursorHint,
    timing: FrameTiming,
}

impl FolioEngine {
    /// Build every controller for `setup`.
    #[must_use]
    pub fn new(
        setup: PageSetup,
        options: Options,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let theme = ThemeController::new(store, options.theme.clone());
        Self::assemble(setup, options, theme)
    }

    /// Like [`new`](Self::new) with a deterministic palette RNG.
    #[must_use]
    pub fn with_seed(
        setup: PageSetup,
        options: Options,
        store: Box<dyn KeyValueStore>,
        seed: u64,
    ) -> Self {
        use rand::SeedableRng;
        let theme = ThemeController::with_rng(
            store,
            options.theme.clone(),
            StdRng::seed_from_u64(seed),
        );
        Self::assemble(setup, options, theme)
    }

    fn assemble(
        setup: PageSetup,
        options: Options,
        theme: ThemeController,
    ) -> Self {
        log::info!(
            "folio engine: {} cards, {} modal tabs, {} carousels",
            setup.card_count,
            setup.modal_tabs.unwrap_or(0),
            setup.carousels.len()
        );
        Self {
            motion: MotionLoop::new(
                setup.card_count,
                options.magnet.clone(),
                options.drift.clone(),
            ),
            deck: DeckNavigator::new(setup.card_count),
            swipe: SwipeTracker::new(options.swipe.clone()),
            modal: setup.modal_tabs.map(ModalController::new),
            carousels: setup.carousels,
            lightbox: LightboxController::new(),
            theme,
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            cursor: CursorHint::Default,
            timing: FrameTiming::new(),
            prefers_dark: setup.prefers_dark,
            started: false,
            options,
        }
    }

    /// Page-ready initialization. Only the first call has any effect.
    ///
    /// Activates the first card, starts the animation loop, restores the
    /// theme and palette, and shows the first slide of every carousel.
    pub fn startup(&mut self) -> Vec<FolioEffect> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        let mut effects = Vec::new();
        if let Some(change) = self.deck.go_to(0) {
            effects.push(self.deck_effect(change));
        }
        if self.motion.start() {
            effects.push(FolioEffect::RequestFrame);
        }
        effects.push(FolioEffect::Theme(
            self.theme.initialize(self.prefers_dark),
        ));
        for carousel in 0..self.carousels.len() {
            self.show_slide(carousel, 0, &mut effects);
            let src = self.carousels[carousel].preload_source().to_owned();
            effects.push(FolioEffect::PreloadImage { src });
        }
        effects
    }

    // ── Accessors ─────────────────────────────────────────────────────

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Deck state.
    #[must_use]
    pub fn deck(&self) -> &DeckNavigator {
        &self.deck
    }

    /// Motion loop state.
    #[must_use]
    pub fn motion(&self) -> &MotionLoop {
        &self.motion
    }

    /// Swipe state.
    #[must_use]
    pub fn swipe(&self) -> &SwipeTracker {
        &self.swipe
    }

    /// Modal state, `None` without a modal.
    #[must_use]
    pub fn modal(&self) -> Option<&ModalController> {
        self.modal.as_ref()
    }

    /// Carousel instances.
    #[must_use]
    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    /// Lightbox state.
    #[must_use]
    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    /// Theme state.
    #[must_use]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    /// Current deck cursor hint.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        self.cursor
    }

    /// Smoothed frames per second of the animation loop.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}
