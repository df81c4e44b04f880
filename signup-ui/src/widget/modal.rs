use iced::widget::{center, mouse_area, opaque, stack};

use super::Element;
use crate::theme;

/// Overlays `content` on top of `base`, darkening the base and swallowing its events.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Option<Message>,
}

impl<'a, Message> Modal<'a, Message> {
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        content: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            content: content.into(),
            on_blur: None,
        }
    }

    /// Message emitted when the user clicks outside of the modal content.
    pub fn on_blur(mut self, on_blur: Option<Message>) -> Self {
        self.on_blur = on_blur;
        self
    }
}

impl<'a, Message: Clone + 'a> From<Modal<'a, Message>> for Element<'a, Message> {
    fn from(modal: Modal<'a, Message>) -> Element<'a, Message> {
        let backdrop = mouse_area(center(opaque(modal.content)).style(theme::container::backdrop));
        let backdrop = match modal.on_blur {
            Some(msg) => backdrop.on_press(msg),
            None => backdrop,
        };
        stack![modal.base, opaque(backdrop)].into()
    }
}
