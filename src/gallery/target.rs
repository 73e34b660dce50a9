//! Classifying image clicks inside the modal into lightbox requests.

use super::carousel::Carousel;
use super::lightbox::LightboxImage;

/// Where a clicked image lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageContext {
    /// Slide of carousel number `carousel`.
    Carousel {
        /// Index into the page's carousel list.
        carousel: usize,
    },
    /// Member of a duo/tri image group.
    Group {
        /// Every image of the group, in document order.
        images: Vec<LightboxImage>,
        /// Position of the clicked image within `images`.
        clicked: usize,
    },
    /// Any other image.
    Standalone,
}

/// A click on an `<img>` in the modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageClick {
    /// Resolved image URL (`currentSrc` where available).
    pub src: String,
    /// Alt text.
    pub alt: String,
    /// Surrounding structure.
    pub context: ImageContext,
}

/// Whether `src` names a looping animation (GIF), which the lightbox skips.
#[must_use]
pub fn is_animated_loop(src: &str) -> bool {
    src.to_ascii_lowercase().ends_with(".gif")
}

/// Images and start index to open the lightbox with, or `None` when the
/// click should be left alone.
#[must_use]
pub fn lightbox_request(
    click: &ImageClick,
    carousels: &[Carousel],
) -> Option<(Vec<LightboxImage>, usize)> {
    if is_animated_loop(&click.src) {
        return None;
    }
    match &click.context {
        ImageContext::Carousel { carousel } => {
            let carousel = carousels.get(*carousel)?;
            Some((carousel.lightbox_images(&click.alt), carousel.index()))
        }
        ImageContext::Group { images, clicked } => {
            if images.is_empty() {
                return None;
            }
            Some((images.clone(), *clicked))
        }
        ImageContext::Standalone => Some((
            vec![LightboxImage::new(click.src.clone(), click.alt.clone())],
            0,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(src: &str, context: ImageContext) -> ImageClick {
        ImageClick {
            src: src.into(),
            alt: "shot".into(),
            context,
        }
    }

    #[test]
    fn gif_detection_ignores_case() {
        assert!(is_animated_loop("demo.gif"));
        assert!(is_animated_loop("/img/DEMO.GIF"));
        assert!(!is_animated_loop("gif.png"));
    }

    #[test]
    fn gifs_never_open() {
        let c = click("loop.Gif", ImageContext::Standalone);
        assert!(lightbox_request(&c, &[]).is_none());
    }

    #[test]
    fn carousel_click_seeds_all_slides_at_current_index() {
        let mut carousel =
            Carousel::from_attribute("Deck", "a.png|b.png|c.png").unwrap();
        let _ = carousel.show(2);
        let c = click("c.png", ImageContext::Carousel { carousel: 0 });
        let (images, start) = lightbox_request(&c, &[carousel]).unwrap();
        assert_eq!(images.len(), 3);
        assert_eq!(start, 2);
        assert_eq!(images[0].alt, "shot");
    }

    #[test]
    fn unknown_carousel_is_ignored() {
        let c = click("a.png", ImageContext::Carousel { carousel: 4 });
        assert!(lightbox_request(&c, &[]).is_none());
    }

    #[test]
    fn group_click_starts_at_clicked_image() {
        let images = vec![
            LightboxImage::new("one.png", "1"),
            LightboxImage::new("two.png", "2"),
        ];
        let c = click(
            "two.png",
            ImageContext::Group {
                images: images.clone(),
                clicked: 1,
            },
        );
        assert_eq!(lightbox_request(&c, &[]), Some((images, 1)));
    }

    #[test]
    fn standalone_opens_single_image() {
        let c = click("solo.jpg", ImageContext::Standalone);
        let (images, start) = lightbox_request(&c, &[]).unwrap();
        assert_eq!(start, 0);
        assert_eq!(images, vec![LightboxImage::new("solo.jpg", "shot")]);
    }
}
