pub mod modals;
pub mod signin;
pub mod signup;

pub use signin::signin_view;
pub use signup::signup_view;

use crate::state::message::Msg;
use iced::{
    widget::{row, Space},
    Length,
};
use signup_ui::{component::text, theme, widget::*};

const FORM_WIDTH: f32 = 500.0;

/// Centers `content` under the application title.
pub fn layout<'a>(title: &'static str, content: impl Into<Element<'a, Msg>>) -> Element<'a, Msg> {
    let header = row![
        Space::with_width(Length::Fill),
        text::h2(title),
        Space::with_width(Length::Fill),
    ];

    let column = Column::new()
        .push(header)
        .push(Space::with_height(30))
        .push(Container::new(content).width(Length::Fixed(FORM_WIDTH)))
        .align_x(iced::Alignment::Center);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(40)
        .style(theme::container::background)
        .into()
}
