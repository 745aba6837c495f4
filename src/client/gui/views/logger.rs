use chrono::{DateTime, Local};
use iced::widget::{Button, Container, Row, Space, Text};
use iced::{Alignment, Element, Font, Length};

use crate::client::models::messages::Message;
use crate::client::models::ui_state::{Tone, UiStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), at: Local::now() }
    }

    pub fn from_status(status: &UiStatus) -> Self {
        let level = match status.tone() {
            Tone::Neutral | Tone::Working => LogLevel::Info,
            Tone::Success => LogLevel::Success,
            Tone::Error => LogLevel::Error,
        };
        Self::new(level, status.text())
    }

    pub fn emoji(&self) -> &'static str {
        match self.level {
            LogLevel::Success => "✅",
            LogLevel::Error => "❌",
            LogLevel::Info => "ℹ️",
            LogLevel::Warning => "⚠️",
        }
    }

    pub fn color(&self) -> iced::Color {
        match self.level {
            LogLevel::Success => iced::Color::from_rgb(0.2, 0.8, 0.4),
            LogLevel::Error => iced::Color::from_rgb(1.0, 0.2, 0.2),
            LogLevel::Info => iced::Color::from_rgb(0.2, 0.6, 1.0),
            LogLevel::Warning => iced::Color::from_rgb(1.0, 0.8, 0.0),
        }
    }
}

pub fn logger_view(messages: &[LogMessage]) -> Element<'_, Message> {
    // Only the latest entry is shown, as an alert bar
    if let Some(log) = messages.iter().next_back() {
        let bg_color = log.color();
        Container::new(
            Row::new()
                .spacing(12)
                .align_items(Alignment::Center)
                .push(
                    Text::new(log.emoji())
                        .font(Font::with_name("Segoe UI Emoji"))
                        .size(18)
                        .style(iced::Color::WHITE),
                )
                .push(
                    Text::new(log.at.format("%H:%M:%S").to_string())
                        .size(14)
                        .style(iced::Color::WHITE),
                )
                .push(
                    Text::new(&log.message)
                        .size(16)
                        .style(iced::Color::WHITE)
                        .width(Length::Fill),
                )
                .push(
                    Button::new(Text::new("Clear").size(12))
                        .style(iced::theme::Button::Secondary)
                        .on_press(Message::ClearLog)
                        .padding([4, 10]),
                ),
        )
        .padding([10, 16])
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(move |_: &iced::Theme| {
            iced::widget::container::Appearance {
                background: Some(iced::Background::Color(bg_color)),
                text_color: Some(iced::Color::WHITE),
                border: iced::Border {
                    radius: 8.0.into(),
                    ..Default::default()
                },
                shadow: iced::Shadow {
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 12.0,
                    color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                },
            }
        })))
        .into()
    } else {
        Space::new(Length::Fill, Length::Fixed(0.0)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tone_picks_log_level() {
        assert_eq!(LogMessage::from_status(&UiStatus::Solving).level, LogLevel::Info);
        assert_eq!(LogMessage::from_status(&UiStatus::Generated).level, LogLevel::Success);
        let entry = LogMessage::from_status(&UiStatus::Error("Solver failed".into()));
        assert_eq!(entry.level, LogLevel::Error);
        assert_eq!(entry.message, "Solver failed");
    }
}
