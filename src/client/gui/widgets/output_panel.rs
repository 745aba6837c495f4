// Solver output panel
use iced::widget::{scrollable, Column, Container, Text};
use iced::{Color, Element, Font, Length};

use crate::client::models::messages::Message;
use crate::client::services::solver_output::Verdict;

const PANEL_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

pub fn view<'a>(output: &'a str, verdict: Option<&Verdict>) -> Element<'a, Message> {
    let mut content = Column::new().spacing(8);
    if let Some(verdict) = verdict {
        content = content.push(
            Text::new(format!("Verdict: {}", verdict))
                .size(13)
                .style(TEXT_SECONDARY),
        );
    }
    content = content.push(
        Text::new(output)
            .font(Font::MONOSPACE)
            .size(14)
            .width(Length::Fill),
    );

    Container::new(scrollable(content).height(Length::Fill))
        .padding(12)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(|_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(PANEL_BG)),
                text_color: Some(Color::WHITE),
                border: iced::Border {
                    width: 1.0,
                    color: Color::from_rgb(0.3, 0.3, 0.4),
                    radius: 12.0.into(),
                },
                ..Default::default()
            }
        })))
        .into()
}
