//! Document discovery, live geometry and event target resolution.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlImageElement, NodeList,
    Window,
};

use crate::engine::{PageSetup, Viewport};
use crate::error::FolioError;
use crate::gallery::{Carousel, ImageClick, ImageContext, LightboxImage};
use crate::input::{HitTarget, KeyFocus};
use crate::motion::Rect;

/// Alt-text prefix for carousels without `data-label` or `aria-label`.
const DEFAULT_CAROUSEL_LABEL: &str = "Carousel";

pub(super) fn js_error(context: &str, err: &JsValue) -> FolioError {
    let detail = err.as_string().unwrap_or_else(|| format!("{err:?}"));
    FolioError::Dom(format!("{context}: {detail}"))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn query_within(parent: &Element, selector: &str) -> Vec<Element> {
    parent
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn query_one(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

fn position_of(list: &[Element], element: &Element) -> Option<usize> {
    list.iter().position(|e| e.is_same_node(Some(element)))
}

fn index_attr(element: &Element, name: &str) -> Option<usize> {
    element.get_attribute(name)?.trim().parse().ok()
}

fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

// ── Page structure ──

/// Nodes of the project modal.
pub(super) struct ModalDom {
    pub(super) overlay: Element,
    pub(super) title: Option<Element>,
    pub(super) stack: Option<Element>,
    pub(super) content: Option<Element>,
    pub(super) tabs: Vec<Element>,
    pub(super) panels: Vec<HtmlElement>,
    /// The header back link, which closes rather than steps.
    pub(super) header_back_link: Option<Element>,
}

/// One carousel root and its visible slide.
pub(super) struct CarouselDom {
    pub(super) root: Element,
    pub(super) slide: Option<HtmlImageElement>,
}

/// Every node the presenter writes to, discovered once.
pub(super) struct PageDom {
    pub(super) window: Window,
    pub(super) document: Document,
    pub(super) root: HtmlElement,
    pub(super) body: Option<HtmlElement>,
    pub(super) deck: Option<HtmlElement>,
    pub(super) cards: Vec<Element>,
    pub(super) modal: Option<ModalDom>,
    pub(super) carousels: Vec<CarouselDom>,
    pub(super) swatches: Vec<Element>,
    pub(super) toggles: Vec<Element>,
}

impl PageDom {
    /// Walk the document once and describe what the engine should manage.
    pub(super) fn discover(
        window: Window,
    ) -> Result<(Self, PageSetup), FolioError> {
        let document = window
            .document()
            .ok_or_else(|| FolioError::Dom("no document".into()))?;
        let root = document
            .document_element()
            .and_then(as_html)
            .ok_or_else(|| FolioError::Dom("no document element".into()))?;

        let cards = query_all(&document, ".project-card");
        let modal = document.get_element_by_id("projectModal").map(|overlay| {
            ModalDom {
                title: query_one(&overlay, "#projectModalTitle"),
                stack: query_one(&overlay, ".project-modal-stack"),
                content: query_one(&overlay, ".project-modal__content"),
                tabs: query_within(&overlay, ".project-tab"),
                panels: query_within(&overlay, ".project-panel")
                    .into_iter()
                    .filter_map(as_html)
                    .collect(),
                header_back_link: query_one(&overlay, ".project-back-link"),
                overlay,
            }
        });
        if modal.is_none() {
            log::warn!("no #projectModal; modal commands are disabled");
        }

        let mut carousels = Vec::new();
        let mut instances = Vec::new();
        for root in query_all(&document, ".carousel") {
            let sources = root.get_attribute("data-images").unwrap_or_default();
            let label = root
                .get_attribute("data-label")
                .or_else(|| root.get_attribute("aria-label"))
                .unwrap_or_else(|| DEFAULT_CAROUSEL_LABEL.to_owned());
            let Some(mut carousel) = Carousel::from_attribute(label, &sources)
            else {
                log::debug!("skipping carousel without sources");
                continue;
            };
            let slide = query_one(&root, ".carousel-slide")
                .and_then(|e| e.dyn_into::<HtmlImageElement>().ok());
            if let Some(src) = slide.as_ref().and_then(|s| s.get_attribute("src"))
            {
                carousel = carousel.with_displayed(src);
            }
            // Focusable so arrow keys can target it.
            let _ = root.set_attribute("tabindex", "0");
            instances.push(carousel);
            carousels.push(CarouselDom { root, slide });
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());

        let setup = PageSetup {
            card_count: cards.len(),
            modal_tabs: modal.as_ref().map(|m| m.tabs.len()),
            carousels: instances,
            prefers_dark,
        };
        let page = Self {
            body: document.body(),
            deck: document
                .query_selector(".project-deck")
                .ok()
                .flatten()
                .and_then(as_html),
            swatches: query_all(&document, ".palette-switcher .swatch"),
            toggles: query_all(&document, ".theme-toggler, .modal-theme-toggle"),
            cards,
            modal,
            carousels,
            root,
            document,
            window,
        };
        Ok((page, setup))
    }

    /// Text of `<script id="folio-options">`, if the page ships one.
    pub(super) fn options_source(&self) -> Option<String> {
        self.document
            .get_element_by_id("folio-options")
            .and_then(|e| e.text_content())
    }

    /// The environment exposes touch events at all.
    pub(super) fn touch_capable(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("ontouchstart"))
            .unwrap_or(false)
    }

    // ── Target resolution ──

    /// Classify the element an event landed on.
    ///
    /// More specific controls are checked before the containers that
    /// hold them, so a lightbox arrow never reads as the stage.
    pub(super) fn resolve(&self, target: Option<EventTarget>) -> HitTarget {
        let Some(element) = target.and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return HitTarget::None;
        };
        resolve_lightbox(&element)
            .or_else(|| self.resolve_controls(&element))
            .or_else(|| self.resolve_modal(&element))
            .or_else(|| self.resolve_card(&element))
            .unwrap_or_default()
    }

    fn resolve_controls(&self, element: &Element) -> Option<HitTarget> {
        if let Some(button) = closest(element, ".carousel-prev") {
            return self.carousel_of(&button).map(HitTarget::CarouselPrevious);
        }
        if let Some(button) = closest(element, ".carousel-next") {
            return self.carousel_of(&button).map(HitTarget::CarouselNext);
        }
        if let Some(swatch) = closest(element, ".palette-switcher .swatch") {
            return index_attr(&swatch, "data-palette-index")
                .map(HitTarget::PaletteSwatch);
        }
        if closest(element, ".theme-toggler, .modal-theme-toggle").is_some() {
            return Some(HitTarget::ThemeToggle);
        }
        None
    }

    fn resolve_modal(&self, element: &Element) -> Option<HitTarget> {
        let modal = self.modal.as_ref()?;
        if element.is_same_node(Some(&modal.overlay)) {
            return Some(HitTarget::ModalBackdrop);
        }
        if !modal.overlay.contains(Some(element)) {
            return None;
        }
        if closest(element, ".project-modal__close, .project-close-btn")
            .is_some()
        {
            return Some(HitTarget::ModalClose);
        }
        if let Some(link) = closest(element, ".project-back-link") {
            let header = modal
                .header_back_link
                .as_ref()
                .is_some_and(|h| h.is_same_node(Some(&link)));
            return Some(if header {
                HitTarget::ModalClose
            } else {
                HitTarget::ModalPrevious
            });
        }
        if closest(element, ".project-next-link").is_some() {
            return Some(HitTarget::ModalNext);
        }
        if let Some(tab) = closest(element, ".project-tab") {
            let index = index_attr(&tab, "data-index")
                .or_else(|| position_of(&modal.tabs, &tab))?;
            return Some(HitTarget::ModalTab(index));
        }
        let in_content = modal
            .content
            .as_ref()
            .is_some_and(|c| c.contains(Some(element)));
        if in_content {
            if let Some(img) = element.dyn_ref::<HtmlImageElement>() {
                return Some(HitTarget::Image(self.image_click(img)));
            }
        }
        None
    }

    fn resolve_card(&self, element: &Element) -> Option<HitTarget> {
        let card = closest(element, ".project-card")?;
        let index = position_of(&self.cards, &card)?;
        if closest(element, ".card-title-link").is_some() {
            Some(HitTarget::CardTitleLink(index))
        } else {
            Some(HitTarget::Card(index))
        }
    }

    fn carousel_of(&self, element: &Element) -> Option<usize> {
        let root = closest(element, ".carousel")?;
        self.carousels
            .iter()
            .position(|c| c.root.is_same_node(Some(&root)))
    }

    fn image_click(&self, img: &HtmlImageElement) -> ImageClick {
        let element: &Element = img.as_ref();
        let src = img.get_attribute("src").unwrap_or_default();
        let alt = img.alt();

        if let Some(carousel) = self.carousel_of(element) {
            return ImageClick {
                src,
                alt,
                context: ImageContext::Carousel { carousel },
            };
        }
        if let Some(group) = closest(element, ".duo-gallery, .tri-gallery") {
            let members: Vec<HtmlImageElement> = query_within(&group, "img")
                .into_iter()
                .filter_map(|e| e.dyn_into::<HtmlImageElement>().ok())
                .collect();
            let clicked = members
                .iter()
                .position(|m| m.is_same_node(Some(img)))
                .unwrap_or(0);
            let images = members.iter().map(resolved_image).collect();
            return ImageClick {
                src,
                alt,
                context: ImageContext::Group { images, clicked },
            };
        }
        let resolved = resolved_image(img);
        ImageClick {
            src: resolved.src,
            alt,
            context: ImageContext::Standalone,
        }
    }

    /// Element focus as far as key routing cares.
    pub(super) fn key_focus(&self) -> KeyFocus {
        let Some(active) = self.document.active_element() else {
            return KeyFocus::Document;
        };
        if let Some(carousel) = self.carousel_of(&active) {
            return KeyFocus::Carousel(carousel);
        }
        if active.matches(".theme-toggler").unwrap_or(false) {
            return KeyFocus::ThemeToggle;
        }
        KeyFocus::Document
    }
}

fn resolve_lightbox(element: &Element) -> Option<HitTarget> {
    if closest(element, ".lightbox-close").is_some() {
        Some(HitTarget::LightboxClose)
    } else if closest(element, ".lightbox-prev").is_some() {
        Some(HitTarget::LightboxPrevious)
    } else if closest(element, ".lightbox-next").is_some() {
        Some(HitTarget::LightboxNext)
    } else if closest(element, ".lightbox-stage").is_some() {
        Some(HitTarget::LightboxStage)
    } else if closest(element, ".lightbox-overlay").is_some() {
        Some(HitTarget::LightboxBackdrop)
    } else {
        None
    }
}

fn resolved_image(img: &HtmlImageElement) -> LightboxImage {
    let current = img.current_src();
    let src = if current.is_empty() { img.src() } else { current };
    LightboxImage::new(src, img.alt())
}

// ── Geometry ──

/// Live layout read from the document on every query.
pub(super) struct DomViewport<'a> {
    page: &'a PageDom,
}

impl<'a> DomViewport<'a> {
    pub(super) fn new(page: &'a PageDom) -> Self {
        Self { page }
    }
}

impl Viewport for DomViewport<'_> {
    fn card_rects(&self) -> Vec<Rect> {
        self.page
            .cards
            .iter()
            .map(|card| {
                let r = card.get_bounding_client_rect();
                Rect::from_xywh(
                    r.left() as f32,
                    r.top() as f32,
                    r.width() as f32,
                    r.height() as f32,
                )
            })
            .collect()
    }

    fn width(&self) -> f32 {
        self.page
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0) as f32
    }
}
