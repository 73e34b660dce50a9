//! Headless preview of the interaction layer.
//!
//! Runs a [`FolioEngine`] against fixed card geometry and a scripted input
//! sequence (pointer sweep, keyboard, touch swipe, modal) and logs every
//! effect and a sample of frames. Pass a TOML options file as the first
//! argument to preview a tuning; set `RUST_LOG=debug` for controller
//! transitions.

use std::path::Path;

use folio::engine::{PageSetup, StaticViewport};
use folio::gallery::Carousel;
use folio::input::{HitTarget, InputEvent, KeyFocus, PointerKind};
use folio::options::Options;
use folio::theme::MemoryStore;
use folio::{FolioEffect, FolioEngine};

const FRAME_MS: f64 = 1000.0 / 60.0;
const CARD_W: f32 = 240.0;
const CARD_H: f32 = 320.0;
const GAP: f32 = 24.0;

struct Preview {
    engine: FolioEngine,
    viewport: StaticViewport,
    now_ms: f64,
}

fn log_effects(effects: Vec<FolioEffect>) {
    for effect in effects {
        log::info!("  effect: {effect:?}");
    }
}

impl Preview {
    fn send(&mut self, event: InputEvent) {
        log::info!("event: {event:?}");
        let effects = self.engine.handle_event(event, &self.viewport);
        log_effects(effects);
    }

    /// Advance `count` frames, logging every `every`-th one.
    fn run(&mut self, count: usize, every: usize) {
        for i in 0..count {
            self.now_ms += FRAME_MS;
            let Some(frame) = self.engine.tick(self.now_ms) else {
                return;
            };
            if i % every == 0 {
                let cards: Vec<String> = frame
                    .cards
                    .iter()
                    .map(|t| format!("({:.1}, {:.1}, {:.2}deg)", t.tx(), t.ty(), t.rot_deg))
                    .collect();
                log::info!("frame {:8.1}ms: {}", frame.timestamp_ms, cards.join(" "));
                if let Some(drag) = frame.drag {
                    log::info!(
                        "  drag card {}: ({:.1}px, {:.2}deg)",
                        drag.card,
                        drag.transform.tx(),
                        drag.transform.rot_deg
                    );
                }
            }
        }
    }

    fn key(&mut self, key: &str) {
        self.send(InputEvent::KeyDown {
            key: key.to_owned(),
            focus: KeyFocus::Document,
        });
    }
}

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => {
            log::info!("loaded options from {arg}");
            options
        }
        Err(e) => {
            log::error!("{arg}: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let options = load_options();

    let carousels = Carousel::from_attribute(
        "Research summary",
        "img/summary-1.png | img/summary-2.png | img/summary-3.png",
    )
    .into_iter()
    .collect();
    let setup = PageSetup {
        card_count: 3,
        modal_tabs: Some(3),
        carousels,
        prefers_dark: false,
    };
    let mut preview = Preview {
        engine: FolioEngine::new(setup, options, Box::new(MemoryStore::new())),
        viewport: StaticViewport::row(3, CARD_W, CARD_H, GAP).with_width(1280.0),
        now_ms: 0.0,
    };

    log::info!("== startup");
    let effects = preview.engine.startup();
    log_effects(effects);
    preview.run(30, 10);

    log::info!("== pointer sweep across the middle card");
    let left = CARD_W + GAP;
    for step in 0..=20 {
        let x = left - 80.0 + step as f32 * (CARD_W + 160.0) / 20.0;
        preview.send(InputEvent::PointerMoved {
            x,
            y: CARD_H / 2.0,
            target: HitTarget::None,
        });
        preview.run(3, 3);
    }
    preview.send(InputEvent::PointerLeft);
    preview.run(60, 20);

    log::info!("== keyboard");
    preview.key("ArrowRight");
    preview.key("ArrowLeft");
    preview.key("ArrowLeft");

    log::info!("== touch swipe on a phone");
    preview.viewport = preview.viewport.clone().with_width(375.0);
    let active = preview.engine.deck().active().unwrap_or(0);
    let start_x = active as f32 * (CARD_W + GAP) + CARD_W / 2.0;
    preview.send(InputEvent::PointerDown {
        x: start_x,
        y: CARD_H / 2.0,
        kind: PointerKind::Touch,
        target: HitTarget::Card(active),
        touch_capable: true,
    });
    for step in 1..=6 {
        preview.send(InputEvent::PointerMoved {
            x: start_x + step as f32 * 20.0,
            y: CARD_H / 2.0,
            target: HitTarget::Card(active),
        });
        preview.run(2, 2);
    }
    preview.send(InputEvent::PointerUp);
    preview.run(15, 3);

    log::info!("== modal");
    let active = preview.engine.deck().active().unwrap_or(0);
    preview.send(InputEvent::Click {
        x: 0.0,
        y: 0.0,
        target: HitTarget::CardTitleLink(active),
    });
    preview.send(InputEvent::Click {
        x: 0.0,
        y: 0.0,
        target: HitTarget::ModalNext,
    });
    preview.send(InputEvent::Click {
        x: 0.0,
        y: 0.0,
        target: HitTarget::ModalBackdrop,
    });

    log::info!("== theme");
    preview.send(InputEvent::Click {
        x: 0.0,
        y: 0.0,
        target: HitTarget::ThemeToggle,
    });

    preview.engine.stop();
    log::info!("stopped after {:.0}ms at {:.1} fps", preview.now_ms, preview.engine.fps());
}
