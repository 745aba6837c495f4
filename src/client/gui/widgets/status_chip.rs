// Status chip: status text on a tone-colored pill
use iced::widget::{Container, Text};
use iced::{Color, Element};

use crate::client::models::messages::Message;
use crate::client::models::ui_state::{Tone, UiStatus};

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Neutral => Color::from_rgb(0.35, 0.36, 0.5),
        Tone::Working => Color::from_rgb(0.2, 0.6, 1.0),
        Tone::Success => Color::from_rgb(0.0, 0.7, 0.3),
        Tone::Error => Color::from_rgb(1.0, 0.2, 0.2),
    }
}

pub fn view(status: &UiStatus) -> Element<'_, Message> {
    let bg = tone_color(status.tone());
    Container::new(Text::new(status.text()).size(14).style(Color::WHITE))
        .padding([6, 14])
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg)),
                text_color: Some(Color::WHITE),
                border: iced::Border {
                    radius: 14.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })))
        .into()
}
