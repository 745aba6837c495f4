use iced::widget::text_editor;
use iced::{Application, Command, Element, Theme};
use log::info;

use crate::client::models::app_state::WorkbenchState;
use crate::client::models::messages::Message;
use crate::client::services::api_client::{ApiClient, FormulaBackend};

pub struct WorkbenchApp {
    pub state: WorkbenchState,
    pub editor: text_editor::Content,
    pub client: ApiClient,
}

impl WorkbenchApp {
    /// Rebuilds the editor after the controller replaced the formula.
    fn sync_editor(&mut self) {
        self.editor = text_editor::Content::with_text(&self.state.formula);
    }
}

impl Application for WorkbenchApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ApiClient;

    fn new(client: ApiClient) -> (Self, Command<Message>) {
        info!("workbench backend: {}", client.base_url());
        let app = WorkbenchApp {
            state: WorkbenchState::new(),
            editor: text_editor::Content::new(),
            client,
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "Formula Workbench".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::LoadSample => {
                self.state.load_sample();
                self.sync_editor();
            }
            Message::FormulaEdited(action) => {
                self.editor.perform(action);
                self.state.set_formula(self.editor.text());
            }
            Message::OptionChanged(field, value) => {
                self.state.set_option(field, value);
            }
            Message::Generate => {
                if let Some(options) = self.state.begin_generate() {
                    let client = self.client.clone();
                    return Command::perform(
                        async move { client.generate(options).await },
                        Message::Generated,
                    );
                }
            }
            Message::Generated(result) => {
                if self.state.finish_generate(result).is_ok() {
                    self.sync_editor();
                }
            }
            Message::Solve => {
                // the guard error is already on the status chip
                if let Ok(Some(cnf)) = self.state.begin_solve() {
                    let client = self.client.clone();
                    return Command::perform(
                        async move { client.solve(cnf).await },
                        Message::Solved,
                    );
                }
            }
            Message::Solved(result) => {
                let _ = self.state.finish_solve(result);
            }
            Message::ClearLog => {
                self.state.clear_log();
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::workbench::view(&self.state, &self.editor)
    }
}
