// Status chip model: short text plus a tone

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Working,
    Success,
    Error,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Working => "working",
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiStatus {
    #[default]
    Ready,
    LoadedSample,
    Generating,
    Solving,
    Generated,
    Solved,
    Error(String),
}

impl UiStatus {
    pub fn text(&self) -> &str {
        match self {
            UiStatus::Ready => "Ready",
            UiStatus::LoadedSample => "Loaded sample",
            UiStatus::Generating => "Generating…",
            UiStatus::Solving => "Solving…",
            UiStatus::Generated => "Generated",
            UiStatus::Solved => "Solved",
            UiStatus::Error(message) => message,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            UiStatus::Ready | UiStatus::LoadedSample => Tone::Neutral,
            UiStatus::Generating | UiStatus::Solving => Tone::Working,
            UiStatus::Generated | UiStatus::Solved => Tone::Success,
            UiStatus::Error(_) => Tone::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_follow_the_lifecycle() {
        assert_eq!(UiStatus::Ready.tone(), Tone::Neutral);
        assert_eq!(UiStatus::LoadedSample.tone(), Tone::Neutral);
        assert_eq!(UiStatus::Generating.tone(), Tone::Working);
        assert_eq!(UiStatus::Solving.tone(), Tone::Working);
        assert_eq!(UiStatus::Generated.tone(), Tone::Success);
        assert_eq!(UiStatus::Solved.tone(), Tone::Success);
        assert_eq!(UiStatus::Error("x".into()).tone(), Tone::Error);
    }

    #[test]
    fn error_text_is_the_message() {
        assert_eq!(UiStatus::Error("bad seed".into()).text(), "bad seed");
        assert_eq!(UiStatus::default().text(), "Ready");
    }
}
