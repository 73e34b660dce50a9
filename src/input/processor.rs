//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns the key-binding map and the keyboard routing
//! rules. It is the only thing that sits between raw page events and the
//! engine's [`execute`](crate::FolioEngine::execute) method.

use super::event::{HitTarget, InputEvent, KeyFocus, PointerKind};
use crate::engine::command::FolioCommand;
use crate::options::{KeyAction, KeybindingOptions};

/// Which surfaces currently claim the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Routing {
    /// A lightbox session is showing; it consumes every bound key.
    pub lightbox_open: bool,
}

/// Converts page events into [`FolioCommand`]s.
///
/// # Usage
///
/// ```ignore
/// for cmd in processor.handle_event(event, Routing { lightbox_open }) {
///     effects.extend(engine.execute(cmd, &viewport));
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self { key_bindings }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Process one event into zero or more commands, in execution order.
    #[must_use]
    pub fn handle_event(
        &self,
        event: InputEvent,
        routing: Routing,
    ) -> Vec<FolioCommand> {
        match event {
            InputEvent::PointerMoved { x, y, target } => vec![
                FolioCommand::MoveSwipe { x },
                FolioCommand::TrackPointer { x, y },
                FolioCommand::UpdateCursor {
                    x,
                    y,
                    over_title_link: matches!(
                        target,
                        HitTarget::CardTitleLink(_)
                    ),
                },
            ],
            InputEvent::PointerDown {
                x,
                kind,
                target,
                touch_capable,
                ..
            } => vec![FolioCommand::BeginSwipe {
                card: target.card(),
                x,
                touch: kind == PointerKind::Touch || touch_capable,
            }],
            InputEvent::PointerUp | InputEvent::PointerCancel => {
                vec![FolioCommand::EndSwipe]
            }
            InputEvent::PointerLeft | InputEvent::WindowBlurred => {
                vec![FolioCommand::ResetMagnet]
            }
            InputEvent::Click { x, y, target } => {
                Self::click_command(x, y, target).into_iter().collect()
            }
            InputEvent::KeyDown { key, focus } => self
                .key_command(&key, focus, routing)
                .into_iter()
                .collect(),
        }
    }

    /// Command for a bound key, honoring routing precedence: an open
    /// lightbox first, then a focused carousel or toggle, then the deck.
    #[must_use]
    pub fn key_command(
        &self,
        key: &str,
        focus: KeyFocus,
        routing: Routing,
    ) -> Option<FolioCommand> {
        let action = self.key_bindings.lookup(key)?;

        if routing.lightbox_open {
            return Some(match action {
                KeyAction::Close => FolioCommand::CloseLightbox,
                KeyAction::Previous => FolioCommand::LightboxPrevious,
                KeyAction::Next | KeyAction::Advance => {
                    FolioCommand::LightboxNext
                }
            });
        }

        match (focus, action) {
            (KeyFocus::Carousel(c), KeyAction::Previous) => {
                Some(FolioCommand::CarouselPrevious(c))
            }
            (KeyFocus::Carousel(c), KeyAction::Next) => {
                Some(FolioCommand::CarouselNext(c))
            }
            (KeyFocus::ThemeToggle, KeyAction::Advance) => {
                Some(FolioCommand::ToggleTheme)
            }
            (_, KeyAction::Previous) => Some(FolioCommand::DeckPrevious),
            (_, KeyAction::Next) => Some(FolioCommand::DeckNext),
            (_, KeyAction::Close | KeyAction::Advance) => None,
        }
    }

    fn click_command(x: f32, y: f32, target: HitTarget) -> Option<FolioCommand> {
        let cmd = match target {
            HitTarget::Card(_) => FolioCommand::ClickCard { x, y },
            HitTarget::CardTitleLink(i) => FolioCommand::OpenModal(i),
            HitTarget::ModalBackdrop | HitTarget::ModalClose => {
                FolioCommand::CloseModal
            }
            HitTarget::ModalTab(i) => FolioCommand::SelectTab(i),
            HitTarget::ModalPrevious => FolioCommand::ModalBack,
            HitTarget::ModalNext => FolioCommand::ModalForward,
            HitTarget::CarouselPrevious(c) => FolioCommand::CarouselPrevious(c),
            HitTarget::CarouselNext(c) => FolioCommand::CarouselNext(c),
            HitTarget::Image(click) => FolioCommand::OpenImage(click),
            HitTarget::LightboxBackdrop | HitTarget::LightboxClose => {
                FolioCommand::CloseLightbox
            }
            HitTarget::LightboxPrevious => FolioCommand::LightboxPrevious,
            HitTarget::LightboxNext => FolioCommand::LightboxNext,
            HitTarget::PaletteSwatch(i) => FolioCommand::SelectPalette(i),
            HitTarget::ThemeToggle => FolioCommand::ToggleTheme,
            HitTarget::None | HitTarget::LightboxStage => return None,
        };
        Some(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ImageClick, ImageContext};

    fn key(processor: &InputProcessor, key: &str, focus: KeyFocus, lightbox: bool) -> Vec<FolioCommand> {
        processor.handle_event(
            InputEvent::KeyDown {
                key: key.into(),
                focus,
            },
            Routing {
                lightbox_open: lightbox,
            },
        )
    }

    #[test]
    fn arrows_drive_deck_by_default() {
        let p = InputProcessor::new();
        assert_eq!(
            key(&p, "ArrowLeft", KeyFocus::Document, false),
            vec![FolioCommand::DeckPrevious]
        );
        assert_eq!(
            key(&p, "ArrowRight", KeyFocus::Document, false),
            vec![FolioCommand::DeckNext]
        );
        assert!(key(&p, "Escape", KeyFocus::Document, false).is_empty());
        assert!(key(&p, "KeyQ", KeyFocus::Document, false).is_empty());
    }

    #[test]
    fn open_lightbox_consumes_keys() {
        let p = InputProcessor::new();
        let focus = KeyFocus::Carousel(0);
        assert_eq!(
            key(&p, "Escape", focus, true),
            vec![FolioCommand::CloseLightbox]
        );
        assert_eq!(
            key(&p, "ArrowLeft", focus, true),
            vec![FolioCommand::LightboxPrevious]
        );
        for k in ["ArrowRight", " ", "Enter"] {
            assert_eq!(key(&p, k, focus, true), vec![FolioCommand::LightboxNext]);
        }
    }

    #[test]
    fn focused_carousel_consumes_arrows() {
        let p = InputProcessor::new();
        assert_eq!(
            key(&p, "ArrowLeft", KeyFocus::Carousel(1), false),
            vec![FolioCommand::CarouselPrevious(1)]
        );
        assert_eq!(
            key(&p, "ArrowRight", KeyFocus::Carousel(1), false),
            vec![FolioCommand::CarouselNext(1)]
        );
    }

    #[test]
    fn theme_toggle_activates_on_enter_and_space() {
        let p = InputProcessor::new();
        assert_eq!(
            key(&p, "Enter", KeyFocus::ThemeToggle, false),
            vec![FolioCommand::ToggleTheme]
        );
        assert!(key(&p, "Enter", KeyFocus::Document, false).is_empty());
    }

    #[test]
    fn pointer_move_feeds_swipe_magnet_and_cursor() {
        let p = InputProcessor::new();
        let cmds = p.handle_event(
            InputEvent::PointerMoved {
                x: 5.0,
                y: 6.0,
                target: HitTarget::CardTitleLink(0),
            },
            Routing::default(),
        );
        assert_eq!(
            cmds,
            vec![
                FolioCommand::MoveSwipe { x: 5.0 },
                FolioCommand::TrackPointer { x: 5.0, y: 6.0 },
                FolioCommand::UpdateCursor {
                    x: 5.0,
                    y: 6.0,
                    over_title_link: true
                },
            ]
        );
    }

    #[test]
    fn pointer_down_reports_touch_and_card() {
        let p = InputProcessor::new();
        let cmds = p.handle_event(
            InputEvent::PointerDown {
                x: 40.0,
                y: 0.0,
                kind: PointerKind::Mouse,
                target: HitTarget::Card(2),
                touch_capable: true,
            },
            Routing::default(),
        );
        assert_eq!(
            cmds,
            vec![FolioCommand::BeginSwipe {
                card: Some(2),
                x: 40.0,
                touch: true
            }]
        );
    }

    #[test]
    fn cancel_ends_swipe_like_release() {
        let p = InputProcessor::new();
        for event in [InputEvent::PointerUp, InputEvent::PointerCancel] {
            assert_eq!(
                p.handle_event(event, Routing::default()),
                vec![FolioCommand::EndSwipe]
            );
        }
    }

    #[test]
    fn clicks_map_to_surface_commands() {
        let p = InputProcessor::new();
        let click = |target| {
            p.handle_event(
                InputEvent::Click {
                    x: 1.0,
                    y: 2.0,
                    target,
                },
                Routing::default(),
            )
        };
        assert_eq!(click(HitTarget::CardTitleLink(1)), vec![FolioCommand::OpenModal(1)]);
        assert_eq!(click(HitTarget::ModalBackdrop), vec![FolioCommand::CloseModal]);
        assert_eq!(click(HitTarget::ModalNext), vec![FolioCommand::ModalForward]);
        assert_eq!(click(HitTarget::PaletteSwatch(3)), vec![FolioCommand::SelectPalette(3)]);
        assert!(click(HitTarget::LightboxStage).is_empty());
        assert!(click(HitTarget::None).is_empty());

        let image = ImageClick {
            src: "a.png".into(),
            alt: String::new(),
            context: ImageContext::Standalone,
        };
        assert_eq!(
            click(HitTarget::Image(image.clone())),
            vec![FolioCommand::OpenImage(image)]
        );
    }

    #[test]
    fn custom_bindings_are_honored() {
        let mut bindings = KeybindingOptions::default();
        let _ = bindings
            .bindings
            .insert(KeyAction::Next, vec!["l".to_owned()]);
        let p = InputProcessor::with_key_bindings(bindings);
        assert_eq!(
            key(&p, "l", KeyFocus::Document, false),
            vec![FolioCommand::DeckNext]
        );
        assert!(key(&p, "ArrowRight", KeyFocus::Document, false).is_empty());
    }
}
