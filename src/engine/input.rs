//! Command dispatch for FolioEngine

use glam::Vec2;

use super::command::FolioCommand;
use super::effect::FolioEffect;
use super::viewport::Viewport;
use super::FolioEngine;
use crate::deck::{
    side_of, Announcement, CursorHint, DeckChange, Side, SwipeOutcome,
    SwipeStart,
};
use crate::gallery::{
    lightbox_request, Carousel, LightboxImage, LightboxView, SlideChange,
};
use crate::input::{InputEvent, Routing};
use crate::modal::{ModalView, Step};

// ── Unified input handler ──

impl FolioEngine {
    /// Process a platform-agnostic input event.
    ///
    /// The event is translated into commands by the engine's
    /// [`InputProcessor`](crate::input::InputProcessor) (honoring keyboard
    /// routing: open lightbox, then focused carousel, then deck) and each
    /// command is executed in order.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        viewport: &dyn Viewport,
    ) -> Vec<FolioEffect> {
        let routing = Routing {
            lightbox_open: self.lightbox.is_open(),
        };
        let commands = self.input.handle_event(event, routing);
        commands
            .into_iter()
            .flat_map(|cmd| self.execute(cmd, viewport))
            .collect()
    }

    /// Execute one command and return the effects to apply.
    ///
    /// Commands aimed at absent collaborators (no modal, unknown carousel,
    /// closed lightbox) produce no effects.
    pub fn execute(
        &mut self,
        cmd: FolioCommand,
        viewport: &dyn Viewport,
    ) -> Vec<FolioEffect> {
        let mut effects = Vec::new();
        match cmd {
            // Deck
            FolioCommand::DeckNext => {
                let change = self.deck.next();
                self.push_deck(change, &mut effects);
            }
            FolioCommand::DeckPrevious => {
                let change = self.deck.previous();
                self.push_deck(change, &mut effects);
            }
            FolioCommand::DeckGoTo(index) => {
                let change = self.deck.go_to(index);
                self.push_deck(change, &mut effects);
            }
            FolioCommand::ClickCard { x, y } => {
                self.click_card(Vec2::new(x, y), viewport, &mut effects);
            }

            // Pointer
            FolioCommand::TrackPointer { x, y } => {
                let rects = viewport.card_rects();
                if self.motion.pointer_moved(Vec2::new(x, y), &rects) {
                    effects.push(FolioEffect::RequestFrame);
                }
            }
            FolioCommand::ResetMagnet => {
                if self.motion.reset_magnet() {
                    effects.push(FolioEffect::RequestFrame);
                }
                self.set_cursor(CursorHint::Default, &mut effects);
            }
            FolioCommand::UpdateCursor {
                x,
                y,
                over_title_link,
            } => {
                let rects = viewport.card_rects();
                let active_rect =
                    self.deck.active().and_then(|i| rects.get(i));
                let hint = CursorHint::for_pointer(
                    active_rect,
                    Vec2::new(x, y),
                    over_title_link,
                );
                self.set_cursor(hint, &mut effects);
            }

            // Swipe
            FolioCommand::BeginSwipe { card, x, touch } => {
                let start = SwipeStart {
                    card,
                    active: self.deck.active(),
                    x,
                    mobile: self.options.viewport.is_mobile(viewport.width()),
                    touch,
                };
                if self.swipe.begin(start) {
                    self.motion.suspend_tracking();
                }
            }
            FolioCommand::MoveSwipe { x } => {
                let _ = self.swipe.update(x);
            }
            FolioCommand::EndSwipe => self.end_swipe(&mut effects),

            // Modal
            FolioCommand::OpenModal(index) => {
                let narrow = self.options.viewport.is_mobile(viewport.width());
                let view = self.modal.as_mut().and_then(|m| m.open(index, narrow));
                push_modal(view, &mut effects);
            }
            FolioCommand::CloseModal => {
                let view = self.modal.as_mut().and_then(|m| m.close());
                push_modal(view, &mut effects);
            }
            FolioCommand::SelectTab(index) => {
                let view = self.modal.as_mut().and_then(|m| m.select_tab(index));
                push_modal(view, &mut effects);
            }
            FolioCommand::ModalBack => self.step_modal(Step::Back, &mut effects),
            FolioCommand::ModalForward => {
                self.step_modal(Step::Forward, &mut effects);
            }

            // Carousel
            FolioCommand::CarouselShow { carousel, index } => {
                self.show_slide(carousel, index, &mut effects);
            }
            FolioCommand::CarouselNext(carousel) => {
                self.move_slide(carousel, Carousel::next, &mut effects);
            }
            FolioCommand::CarouselPrevious(carousel) => {
                self.move_slide(carousel, Carousel::previous, &mut effects);
            }
            FolioCommand::CarouselLoaded { carousel, ticket } => {
                if let Some(swap) = self
                    .carousels
                    .get_mut(carousel)
                    .and_then(|c| c.on_loaded(ticket))
                {
                    effects.push(FolioEffect::SwapSlide { carousel, swap });
                }
            }
            FolioCommand::CarouselLoadFailed { carousel, ticket } => {
                if let Some(c) = self.carousels.get_mut(carousel) {
                    c.on_load_failed(ticket);
                }
            }

            // Lightbox
            FolioCommand::OpenLightbox { images, start } => {
                self.open_lightbox(images, start, &mut effects);
            }
            FolioCommand::OpenImage(click) => {
                match lightbox_request(&click, &self.carousels) {
                    Some((images, start)) => {
                        self.open_lightbox(images, start, &mut effects);
                    }
                    None => log::trace!("image click on {} ignored", click.src),
                }
            }
            FolioCommand::CloseLightbox => {
                if let Some(id) = self.lightbox.close() {
                    effects.push(FolioEffect::LightboxClosed(id));
                }
            }
            FolioCommand::LightboxNext => {
                let view = self.lightbox.next();
                push_lightbox(view, &mut effects);
            }
            FolioCommand::LightboxPrevious => {
                let view = self.lightbox.previous();
                push_lightbox(view, &mut effects);
            }

            // Theme
            FolioCommand::ToggleTheme => {
                effects.push(FolioEffect::Theme(self.theme.toggle()));
            }
            FolioCommand::SelectPalette(index) => {
                effects.push(FolioEffect::Theme(self.theme.apply_palette(index)));
            }
        }
        effects
    }

    // ── Deck ──

    pub(super) fn deck_effect(&self, change: DeckChange) -> FolioEffect {
        FolioEffect::DeckChanged {
            previous: change.previous,
            active: change.active,
            announcement: Announcement {
                message: change.message,
                clear_after_ms: self.options.viewport.announcement_ms,
            },
        }
    }

    fn push_deck(
        &self,
        change: Option<DeckChange>,
        effects: &mut Vec<FolioEffect>,
    ) {
        if let Some(change) = change {
            effects.push(self.deck_effect(change));
        }
    }

    /// Click on the deck: the active card's left half goes back, the
    /// right half forward; clicks elsewhere do nothing.
    fn click_card(
        &mut self,
        point: Vec2,
        viewport: &dyn Viewport,
        effects: &mut Vec<FolioEffect>,
    ) {
        let Some(active) = self.deck.active() else {
            return;
        };
        let rects = viewport.card_rects();
        let change = match rects.get(active).and_then(|r| side_of(r, point)) {
            Some(Side::Left) => self.deck.previous(),
            Some(Side::Right) => self.deck.next(),
            None => None,
        };
        self.push_deck(change, effects);
    }

    fn set_cursor(&mut self, hint: CursorHint, effects: &mut Vec<FolioEffect>) {
        if hint != self.cursor {
            self.cursor = hint;
            effects.push(FolioEffect::Cursor(hint));
        }
    }

    fn end_swipe(&mut self, effects: &mut Vec<FolioEffect>) {
        let Some(release) = self.swipe.end() else {
            return;
        };
        self.motion.resume_tracking();
        let change = match release.outcome {
            SwipeOutcome::Next => self.deck.next(),
            SwipeOutcome::Previous => self.deck.previous(),
            SwipeOutcome::Cancelled => None,
        };
        self.push_deck(change, effects);
    }

    // ── Modal ──

    fn step_modal(&mut self, step: Step, effects: &mut Vec<FolioEffect>) {
        if let Some(view) = self.modal.as_mut().and_then(|m| m.step(step)) {
            effects.push(FolioEffect::Modal(view));
            effects.push(FolioEffect::ScrollModalToTop);
        }
    }

    // ── Carousel ──

    pub(super) fn show_slide(
        &mut self,
        carousel: usize,
        index: isize,
        effects: &mut Vec<FolioEffect>,
    ) {
        self.move_slide(carousel, |c| c.show(index), effects);
    }

    /// Apply `step` to carousel `carousel`; unknown carousels are ignored.
    fn move_slide(
        &mut self,
        carousel: usize,
        step: impl FnOnce(&mut Carousel) -> SlideChange,
        effects: &mut Vec<FolioEffect>,
    ) {
        let Some(c) = self.carousels.get_mut(carousel) else {
            return;
        };
        let change = step(c);
        effects.push(FolioEffect::CarouselIndex {
            carousel,
            index: change.index,
        });
        if let Some(request) = change.load {
            effects.push(FolioEffect::LoadSlide { carousel, request });
        }
    }

    // ── Lightbox ──

    fn open_lightbox(
        &mut self,
        images: Vec<LightboxImage>,
        start: usize,
        effects: &mut Vec<FolioEffect>,
    ) {
        if let Some(opened) = self.lightbox.open(images, start) {
            if let Some(old) = opened.replaced {
                effects.push(FolioEffect::LightboxClosed(old));
            }
            effects.push(FolioEffect::LightboxOpened(opened.view));
        }
    }
}

fn push_modal(view: Option<ModalView>, effects: &mut Vec<FolioEffect>) {
    if let Some(view) = view {
        effects.push(FolioEffect::Modal(view));
    }
}

fn push_lightbox(view: Option<LightboxView>, effects: &mut Vec<FolioEffect>) {
    if let Some(view) = view {
        effects.push(FolioEffect::LightboxUpdated(view));
    }
}
