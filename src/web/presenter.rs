//! Writes engine frames and effects to the document.

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Element, Event, HtmlElement,
    HtmlImageElement, ScrollBehavior, ScrollToOptions,
};

use super::dom::{js_error, PageDom};
use crate::deck::{Announcement, CursorHint};
use crate::engine::Frame;
use crate::error::FolioError;
use crate::gallery::{LightboxView, SessionId, SlideSwap};
use crate::modal::ModalView;
use crate::theme::ThemeView;

/// Body styles that freeze background scrolling while the modal is open
/// on a narrow viewport.
const SCROLL_LOCK: [(&str, &str); 4] = [
    ("overflow", "hidden"),
    ("position", "fixed"),
    ("width", "100%"),
    ("height", "100%"),
];

fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
    element.dyn_ref::<HtmlElement>().map(HtmlElement::style)
}

fn set_style(style: &CssStyleDeclaration, name: &str, value: &str) {
    let result = if value.is_empty() {
        style.remove_property(name).map(drop)
    } else {
        style.set_property(name, value)
    };
    if let Err(e) = result {
        log::warn!("{}", js_error(name, &e));
    }
}

fn set_attr(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        log::warn!("{}", js_error(name, &e));
    }
}

fn toggle_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

// ── Live region ──

/// Off-screen `aria-live` node, removed from the document when its own
/// timer fires.
struct LiveRegion {
    node: Element,
    _timer: Timeout,
}

impl LiveRegion {
    fn expired(&self) -> bool {
        !self.node.is_connected()
    }
}

impl Drop for LiveRegion {
    fn drop(&mut self) {
        self.node.remove();
    }
}

// ── Lightbox ──

/// Overlay of one lightbox session. Dropping it removes the overlay and
/// its click listener together.
pub(super) struct LightboxDom {
    session: SessionId,
    overlay: Element,
    img: HtmlImageElement,
    arrows: [Element; 2],
    _click: EventListener,
}

impl LightboxDom {
    /// Build and attach the overlay for `view`. Every click inside it is
    /// handed to `on_click` and stops there.
    pub(super) fn build(
        document: &Document,
        view: &LightboxView,
        on_click: impl Fn(&Event) + 'static,
    ) -> Result<Self, FolioError> {
        let make = |tag: &str, class: &str| -> Result<Element, FolioError> {
            let e = document
                .create_element(tag)
                .map_err(|err| js_error(tag, &err))?;
            e.set_class_name(class);
            Ok(e)
        };
        let overlay = make("div", "lightbox-overlay")?;
        set_attr(&overlay, "role", "dialog");
        set_attr(&overlay, "aria-modal", "true");
        let stage = make("div", "lightbox-stage")?;
        let img = make("img", "lightbox-img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| FolioError::Dom("img is not an image".into()))?;

        let button = |class: &str, label: &str, glyph: &str| {
            let b = make("button", class)?;
            set_attr(&b, "aria-label", label);
            b.set_text_content(Some(glyph));
            Ok::<_, FolioError>(b)
        };
        let close = button("lightbox-close", "Close", "\u{d7}")?;
        let prev = button("lightbox-arrow lightbox-prev", "Previous", "\u{2039}")?;
        let next = button("lightbox-arrow lightbox-next", "Next", "\u{203a}")?;

        let append = |parent: &Element, child: &Element| {
            parent
                .append_child(child)
                .map(drop)
                .map_err(|e| js_error("appendChild", &e))
        };
        append(&stage, &img)?;
        append(&stage, &prev)?;
        append(&stage, &next)?;
        append(&overlay, &stage)?;
        append(&overlay, &close)?;
        let body = document
            .body()
            .ok_or_else(|| FolioError::Dom("no body".into()))?;
        append(&body, &overlay)?;

        let click = EventListener::new(&overlay, "click", move |event| {
            event.stop_propagation();
            on_click(event);
        });
        let dom = Self {
            session: view.session,
            overlay,
            img,
            arrows: [prev, next],
            _click: click,
        };
        dom.render(view);
        Ok(dom)
    }

    /// Session this overlay belongs to.
    pub(super) fn session(&self) -> SessionId {
        self.session
    }

    /// Show `view`'s image.
    pub(super) fn render(&self, view: &LightboxView) {
        self.img.set_src(&view.image.src);
        self.img.set_alt(&view.image.alt);
        let display = if view.arrows_visible { "" } else { "none" };
        for arrow in &self.arrows {
            if let Some(style) = style_of(arrow) {
                set_style(&style, "display", display);
            }
        }
    }
}

impl Drop for LightboxDom {
    fn drop(&mut self) {
        self.overlay.remove();
    }
}

// ── Presenter ──

/// Document writer. Owns the discovered page and any nodes it created.
pub(super) struct Presenter {
    page: PageDom,
    dragged: Option<usize>,
    live_regions: Vec<LiveRegion>,
    lightbox: Option<LightboxDom>,
}

impl Presenter {
    pub(super) fn new(page: PageDom) -> Self {
        Self {
            page,
            dragged: None,
            live_regions: Vec::new(),
            lightbox: None,
        }
    }

    pub(super) fn page(&self) -> &PageDom {
        &self.page
    }

    /// Write one animation step.
    pub(super) fn write_frame(&mut self, frame: &Frame) {
        for (card, t) in self.page.cards.iter().zip(&frame.cards) {
            let Some(style) = style_of(card) else { continue };
            set_style(&style, "--tx", &format!("{}px", t.tx()));
            set_style(&style, "--ty", &format!("{}px", t.ty()));
            set_style(&style, "--rot", &format!("{}deg", t.rot_deg));
        }

        match frame.drag {
            Some(drag) => {
                if let Some(previous) = self.dragged.filter(|&c| c != drag.card) {
                    self.release_card(previous);
                }
                if let Some(style) =
                    self.page.cards.get(drag.card).and_then(style_of)
                {
                    let t = drag.transform;
                    set_style(&style, "transition", "transform 0s");
                    set_style(
                        &style,
                        "transform",
                        &format!(
                            "translate({}px, {}px) rotate({}deg)",
                            t.tx(),
                            t.ty(),
                            t.rot_deg
                        ),
                    );
                }
                self.dragged = Some(drag.card);
            }
            None => {
                if let Some(card) = self.dragged.take() {
                    self.release_card(card);
                }
            }
        }
    }

    /// Hand a card back to its custom properties.
    fn release_card(&self, card: usize) {
        if let Some(style) = self.page.cards.get(card).and_then(style_of) {
            set_style(&style, "transform", "");
            set_style(&style, "transition", "");
        }
    }

    pub(super) fn deck_changed(
        &mut self,
        active: usize,
        announcement: &Announcement,
    ) {
        for (i, card) in self.page.cards.iter().enumerate() {
            toggle_class(card, "is-active", i == active);
        }
        self.live_regions.retain(|region| !region.expired());
        match self.announce(announcement) {
            Ok(region) => self.live_regions.push(region),
            Err(e) => log::warn!("announcement dropped: {e}"),
        }
    }

    fn announce(
        &self,
        announcement: &Announcement,
    ) -> Result<LiveRegion, FolioError> {
        let node = self
            .page
            .document
            .create_element("div")
            .map_err(|e| js_error("div", &e))?;
        set_attr(&node, "aria-live", "polite");
        set_attr(&node, "aria-atomic", "true");
        if let Some(style) = style_of(&node) {
            set_style(&style, "position", "absolute");
            set_style(&style, "left", "-10000px");
            set_style(&style, "width", "1px");
            set_style(&style, "height", "1px");
            set_style(&style, "overflow", "hidden");
        }
        node.set_text_content(Some(&announcement.message));
        let body = self
            .page
            .body
            .as_ref()
            .ok_or_else(|| FolioError::Dom("no body".into()))?;
        let _ = body
            .append_child(&node)
            .map_err(|e| js_error("appendChild", &e))?;

        let expired = node.clone();
        let timer = Timeout::new(announcement.clear_after_ms, move || {
            expired.remove();
        });
        Ok(LiveRegion {
            node,
            _timer: timer,
        })
    }

    pub(super) fn cursor(&self, hint: CursorHint) {
        if let Some(deck) = &self.page.deck {
            set_style(&deck.style(), "cursor", hint.css());
        }
    }

    pub(super) fn modal(&self, view: &ModalView) {
        let Some(modal) = &self.page.modal else {
            return;
        };
        toggle_class(&modal.overlay, "is-open", view.open);
        set_attr(&modal.overlay, "aria-hidden", bool_attr(!view.open));
        toggle_class(&self.page.root, "modal-open", view.open);

        if let Some(body) = &self.page.body {
            let style = body.style();
            for (name, value) in SCROLL_LOCK {
                set_style(&style, name, if view.scroll_locked { value } else { "" });
            }
        }
        if let Some(title) = &modal.title {
            title.set_text_content(Some(&view.title));
        }
        if let Some(stack) = &modal.stack {
            for i in 0..view.tab_count {
                toggle_class(stack, &format!("theme-proj-{i}"), false);
            }
            toggle_class(stack, &view.theme_tag, true);
        }
        for (i, tab) in modal.tabs.iter().enumerate() {
            let selected = view.tab_selected(i);
            set_attr(tab, "aria-selected", bool_attr(selected));
            toggle_class(tab, "is-active", selected);
        }
        for (i, panel) in modal.panels.iter().enumerate() {
            panel.set_hidden(view.panel_hidden(i));
        }
    }

    pub(super) fn scroll_modal_to_top(&self) {
        let Some(content) =
            self.page.modal.as_ref().and_then(|m| m.content.as_ref())
        else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        content.scroll_to_with_scroll_to_options(&options);
    }

    pub(super) fn carousel_index(&self, carousel: usize, index: usize) {
        if let Some(c) = self.page.carousels.get(carousel) {
            set_attr(&c.root, "data-idx", &index.to_string());
        }
    }

    pub(super) fn swap_slide(&self, carousel: usize, swap: &SlideSwap) {
        if let Some(slide) =
            self.page.carousels.get(carousel).and_then(|c| c.slide.as_ref())
        {
            slide.set_src(&swap.src);
            slide.set_alt(&swap.alt);
        }
    }

    pub(super) fn theme(&self, view: &ThemeView) {
        toggle_class(&self.page.root, "dark", view.theme.is_dark());
        let style = self.page.root.style();
        for (name, value) in &view.variables {
            set_style(&style, name, value);
        }
        for toggle in &self.page.toggles {
            set_attr(toggle, "aria-pressed", bool_attr(view.toggle_pressed));
            if toggle.class_list().contains("theme-toggler") {
                set_attr(toggle, "aria-label", view.toggle_label);
            }
        }
        for swatch in &self.page.swatches {
            let active = swatch
                .get_attribute("data-palette-index")
                .and_then(|v| v.trim().parse::<usize>().ok())
                == Some(view.palette_index);
            set_attr(swatch, "aria-pressed", bool_attr(active));
        }
    }

    // ── Lightbox sessions ──

    pub(super) fn lightbox_opened(&mut self, dom: LightboxDom) {
        self.lightbox = Some(dom);
    }

    pub(super) fn lightbox_updated(&self, view: &LightboxView) {
        match &self.lightbox {
            Some(dom) if dom.session() == view.session => dom.render(view),
            _ => log::debug!("no overlay for lightbox {:?}", view.session),
        }
    }

    /// Drop the overlay of `session`; closing twice is harmless.
    pub(super) fn lightbox_closed(&mut self, session: SessionId) {
        if self
            .lightbox
            .as_ref()
            .is_some_and(|dom| dom.session() == session)
        {
            self.lightbox = None;
        }
    }
}
