//! Image surfaces in the project modal: carousels and the lightbox.

pub mod carousel;
pub mod lightbox;
pub mod target;

pub use carousel::{
    parse_sources, Carousel, LoadRequest, LoadTicket, SlideChange, SlideSwap,
};
pub use lightbox::{
    LightboxController, LightboxImage, LightboxOpened, LightboxView, SessionId,
};
pub use target::{is_animated_loop, lightbox_request, ImageClick, ImageContext};
