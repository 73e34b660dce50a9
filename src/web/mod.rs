//! Browser entry point (feature `web`).
//!
//! Discovers the page, builds a [`FolioEngine`], forwards DOM events to it,
//! drives [`FolioEngine::tick`] from `requestAnimationFrame`, and applies the
//! returned effects through the presenter.

mod dom;
mod loader;
mod presenter;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
pub use storage::LocalStorage;
use wasm_bindgen::prelude::*;
use web_sys::{Event, KeyboardEvent, MouseEvent, PointerEvent};

use self::dom::{DomViewport, PageDom};
use self::presenter::{LightboxDom, Presenter};
use crate::engine::{FolioCommand, FolioEffect, FolioEngine};
use crate::gallery::{LightboxView, LoadRequest};
use crate::input::{HitTarget, InputEvent, KeyFocus, PointerKind};
use crate::options::Options;
use crate::theme::{KeyValueStore, MemoryStore};

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// Start the interaction layer on the current document.
///
/// Safe to call more than once; later calls do nothing.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    if APP.with(|app| app.borrow().is_some()) {
        return Ok(());
    }
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window =
        web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let store: Box<dyn KeyValueStore> = match LocalStorage::open(&window) {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{e}; theme choices will not persist");
            Box::new(MemoryStore::new())
        }
    };
    let (page, setup) = PageDom::discover(window)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let options = page
        .options_source()
        .map_or_else(Options::default, |source| {
            Options::from_toml_str(&source).unwrap_or_else(|e| {
                log::warn!("ignoring #folio-options: {e}");
                Options::default()
            })
        });

    let app = Rc::new(App {
        engine: RefCell::new(FolioEngine::new(setup, options, store)),
        presenter: RefCell::new(Presenter::new(page)),
        frame: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });
    app.install_listeners();
    let effects = app.engine.borrow_mut().startup();
    app.apply(effects);
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Stop the animation loop. Interactions keep working.
#[wasm_bindgen]
pub fn stop() {
    APP.with(|slot| {
        if let Some(app) = slot.borrow().as_ref() {
            app.engine.borrow_mut().stop();
            app.frame.borrow_mut().take();
        }
    });
}

/// Change one tuning option live, e.g. `set_option("magnet", "radius", "300")`.
///
/// `value_json` is the new value as JSON.
#[wasm_bindgen]
pub fn set_option(
    section: &str,
    field: &str,
    value_json: &str,
) -> Result<(), JsValue> {
    let value: serde_json::Value = serde_json::from_str(value_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    APP.with(|slot| {
        let slot = slot.borrow();
        let Some(app) = slot.as_ref() else {
            return Err(JsValue::from_str("folio is not started"));
        };
        app.engine
            .borrow_mut()
            .set_option(section, field, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// What one dispatched event did.
#[derive(Debug, Clone, Copy)]
struct Dispatched {
    /// The engine produced at least one effect.
    handled: bool,
    /// The active card changed.
    moved_deck: bool,
}

/// Page-lifetime state shared by every listener.
struct App {
    engine: RefCell<FolioEngine>,
    presenter: RefCell<Presenter>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

fn pointer_xy(event: &Event) -> (f32, f32) {
    event
        .dyn_ref::<MouseEvent>()
        .map_or((0.0, 0.0), |m| (m.client_x() as f32, m.client_y() as f32))
}

impl App {
    // ── Event intake ──

    fn resolve(&self, event: &Event) -> HitTarget {
        self.presenter
            .try_borrow()
            .map(|p| p.page().resolve(event.target()))
            .unwrap_or_default()
    }

    fn dispatch(self: &Rc<Self>, event: InputEvent) -> Dispatched {
        let effects = {
            let Ok(presenter) = self.presenter.try_borrow() else {
                return Dispatched {
                    handled: false,
                    moved_deck: false,
                };
            };
            let viewport = DomViewport::new(presenter.page());
            self.engine.borrow_mut().handle_event(event, &viewport)
        };
        let outcome = Dispatched {
            handled: !effects.is_empty(),
            moved_deck: effects.iter().any(FolioEffect::moves_deck),
        };
        self.apply(effects);
        outcome
    }

    fn execute(self: &Rc<Self>, cmd: FolioCommand) {
        let effects = {
            let presenter = self.presenter.borrow();
            let viewport = DomViewport::new(presenter.page());
            self.engine.borrow_mut().execute(cmd, &viewport)
        };
        self.apply(effects);
    }

    fn install_listeners(self: &Rc<Self>) {
        let presenter = self.presenter.borrow();
        let page = presenter.page();
        let mut listeners = Vec::new();

        let app = Rc::clone(self);
        listeners.push(EventListener::new(&page.window, "pointermove", move |e| {
            let (x, y) = pointer_xy(e);
            let target = app.resolve(e);
            let _ = app.dispatch(InputEvent::PointerMoved { x, y, target });
        }));

        if let Some(deck) = &page.deck {
            let app = Rc::clone(self);
            let touch_capable = page.touch_capable();
            listeners.push(EventListener::new(deck, "pointerdown", move |e| {
                let (x, y) = pointer_xy(e);
                let kind = e
                    .dyn_ref::<PointerEvent>()
                    .map_or(PointerKind::Mouse, |p| {
                        PointerKind::from_pointer_type(&p.pointer_type())
                    });
                let target = app.resolve(e);
                let _ = app.dispatch(InputEvent::PointerDown {
                    x,
                    y,
                    kind,
                    target,
                    touch_capable,
                });
            }));
        }

        for (name, event) in [
            ("pointerup", InputEvent::PointerUp),
            ("pointercancel", InputEvent::PointerCancel),
            ("blur", InputEvent::WindowBlurred),
        ] {
            let app = Rc::clone(self);
            listeners.push(EventListener::new(&page.window, name, move |_| {
                let _ = app.dispatch(event.clone());
            }));
        }

        let app = Rc::clone(self);
        listeners.push(EventListener::new(&page.root, "pointerleave", move |_| {
            let _ = app.dispatch(InputEvent::PointerLeft);
        }));

        let app = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &page.document,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |e| {
                let (x, y) = pointer_xy(e);
                let target = app.resolve(e);
                let suppress_default = matches!(
                    target,
                    HitTarget::CardTitleLink(_)
                        | HitTarget::ModalClose
                        | HitTarget::ModalPrevious
                        | HitTarget::ModalNext
                );
                let is_image = matches!(target, HitTarget::Image(_));
                let handled = app.dispatch(InputEvent::Click { x, y, target }).handled;
                if suppress_default || (is_image && handled) {
                    e.prevent_default();
                }
            },
        ));

        let app = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &page.document,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |e| {
                let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
                else {
                    return;
                };
                let lightbox_open = app.engine.borrow().lightbox().is_open();
                let focus = app
                    .presenter
                    .try_borrow()
                    .map(|p| p.page().key_focus())
                    .unwrap_or_default();
                let captured = lightbox_open || focus != KeyFocus::Document;
                let outcome = app.dispatch(InputEvent::KeyDown { key, focus });
                // Deck arrows must not also scroll the page.
                if (outcome.handled && captured) || outcome.moved_deck {
                    e.prevent_default();
                }
            },
        ));

        drop(presenter);
        self.listeners.borrow_mut().extend(listeners);
    }

    // ── Frame loop ──

    fn schedule_frame(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let app = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            app.on_frame(timestamp);
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let frame = self.engine.borrow_mut().tick(timestamp);
        if let Some(frame) = frame {
            self.presenter.borrow_mut().write_frame(&frame);
        }
        if self.engine.borrow().is_animating() {
            self.schedule_frame();
        }
    }

    // ── Effects ──

    fn apply(self: &Rc<Self>, effects: Vec<FolioEffect>) {
        for effect in effects {
            match effect {
                FolioEffect::RequestFrame => self.schedule_frame(),
                FolioEffect::LoadSlide { carousel, request } => {
                    self.load_slide(carousel, request);
                }
                FolioEffect::PreloadImage { src } => loader::preload(&src),
                FolioEffect::LightboxOpened(view) => self.open_lightbox(&view),
                other => self.present(&other),
            }
        }
    }

    fn present(&self, effect: &FolioEffect) {
        let mut presenter = self.presenter.borrow_mut();
        match effect {
            FolioEffect::DeckChanged {
                active,
                announcement,
                ..
            } => presenter.deck_changed(*active, announcement),
            FolioEffect::Cursor(hint) => presenter.cursor(*hint),
            FolioEffect::Modal(view) => presenter.modal(view),
            FolioEffect::ScrollModalToTop => presenter.scroll_modal_to_top(),
            FolioEffect::CarouselIndex { carousel, index } => {
                presenter.carousel_index(*carousel, *index);
            }
            FolioEffect::SwapSlide { carousel, swap } => {
                presenter.swap_slide(*carousel, swap);
            }
            FolioEffect::LightboxUpdated(view) => presenter.lightbox_updated(view),
            FolioEffect::LightboxClosed(session) => {
                presenter.lightbox_closed(*session);
            }
            FolioEffect::Theme(view) => presenter.theme(view),
            FolioEffect::RequestFrame
            | FolioEffect::LoadSlide { .. }
            | FolioEffect::PreloadImage { .. }
            | FolioEffect::LightboxOpened(_) => {}
        }
    }

    fn load_slide(self: &Rc<Self>, carousel: usize, request: LoadRequest) {
        let app = Rc::downgrade(self);
        wasm_bindgen_futures::spawn_local(async move {
            let ticket = request.ticket;
            let outcome = loader::decode(request.src).await;
            let Some(app) = app.upgrade() else {
                return;
            };
            let cmd = match outcome {
                Ok(()) => FolioCommand::CarouselLoaded { carousel, ticket },
                Err(e) => {
                    log::debug!("slide load failed: {e}");
                    FolioCommand::CarouselLoadFailed { carousel, ticket }
                }
            };
            app.execute(cmd);
        });
    }

    fn open_lightbox(self: &Rc<Self>, view: &LightboxView) {
        let app = Rc::downgrade(self);
        let built = {
            let presenter = self.presenter.borrow();
            LightboxDom::build(&presenter.page().document, view, move |e| {
                let Some(app) = app.upgrade() else {
                    return;
                };
                let (x, y) = pointer_xy(e);
                let target = app.resolve(e);
                let _ = app.dispatch(InputEvent::Click { x, y, target });
            })
        };
        match built {
            Ok(dom) => self.presenter.borrow_mut().lightbox_opened(dom),
            Err(e) => {
                log::warn!("lightbox overlay failed: {e}");
                self.execute(FolioCommand::CloseLightbox);
            }
        }
    }
}
