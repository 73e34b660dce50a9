use crate::gallery::ImageClick;

/// Platform-agnostic input events.
///
/// The host resolves DOM targets into a [`HitTarget`] before feeding events
/// to an [`InputProcessor`](super::InputProcessor), which converts them
/// into [`FolioCommand`](crate::FolioCommand) values.
///
/// # Example
///
/// ```ignore
/// let effects = engine.handle_event(
///     InputEvent::PointerMoved { x: 100.0, y: 200.0, target: HitTarget::None },
///     &viewport,
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved anywhere in the window.
    PointerMoved {
        /// Horizontal position in viewport px.
        x: f32,
        /// Vertical position in viewport px.
        y: f32,
        /// Element under the pointer.
        target: HitTarget,
    },
    /// Pointer pressed.
    PointerDown {
        /// Horizontal position in viewport px.
        x: f32,
        /// Vertical position in viewport px.
        y: f32,
        /// Device type reported by the event.
        kind: PointerKind,
        /// Element under the pointer.
        target: HitTarget,
        /// The environment exposes touch events at all.
        touch_capable: bool,
    },
    /// Pointer released.
    PointerUp,
    /// Pointer interaction aborted by the platform.
    PointerCancel,
    /// Pointer left the document.
    PointerLeft,
    /// Window lost focus.
    WindowBlurred,
    /// Click (press + release on the same element).
    Click {
        /// Horizontal position in viewport px.
        x: f32,
        /// Vertical position in viewport px.
        y: f32,
        /// Element clicked.
        target: HitTarget,
    },
    /// Key pressed.
    KeyDown {
        /// `KeyboardEvent.key` value, e.g. `"ArrowLeft"` or `" "`.
        key: String,
        /// Element holding keyboard focus.
        focus: KeyFocus,
    },
}

/// Pointer device type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    /// Mouse.
    #[default]
    Mouse,
    /// Pen or stylus.
    Pen,
    /// Finger on a touch screen.
    Touch,
}

impl PointerKind {
    /// Parse `PointerEvent.pointerType`; unknown values count as mouse.
    #[must_use]
    pub fn from_pointer_type(value: &str) -> Self {
        match value {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }
}

/// Interactive element an event landed on, resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HitTarget {
    /// Nothing interactive.
    #[default]
    None,
    /// Body of deck card `n`.
    Card(usize),
    /// Title link of deck card `n`.
    CardTitleLink(usize),
    /// Modal overlay outside the content.
    ModalBackdrop,
    /// Modal close button or back link.
    ModalClose,
    /// Modal tab `n`.
    ModalTab(usize),
    /// In-modal "previous project" control.
    ModalPrevious,
    /// In-modal "next project" control.
    ModalNext,
    /// Previous button of carousel `n`.
    CarouselPrevious(usize),
    /// Next button of carousel `n`.
    CarouselNext(usize),
    /// An image inside the modal content.
    Image(ImageClick),
    /// Lightbox overlay outside the stage.
    LightboxBackdrop,
    /// Lightbox stage (image and arrows area).
    LightboxStage,
    /// Lightbox close button.
    LightboxClose,
    /// Lightbox previous arrow.
    LightboxPrevious,
    /// Lightbox next arrow.
    LightboxNext,
    /// Palette swatch `n`.
    PaletteSwatch(usize),
    /// Either theme toggle.
    ThemeToggle,
}

impl HitTarget {
    /// Deck card this target belongs to.
    #[must_use]
    pub fn card(&self) -> Option<usize> {
        match self {
            Self::Card(i) | Self::CardTitleLink(i) => Some(*i),
            _ => None,
        }
    }
}

/// Element with keyboard focus, as far as routing cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyFocus {
    /// Anything else (document body, links, ...).
    #[default]
    Document,
    /// Carousel root `n`.
    Carousel(usize),
    /// A theme toggle.
    ThemeToggle,
}
