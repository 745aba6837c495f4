use iced::widget::text_editor;

use crate::client::models::options::OptionField;
use crate::common::error::WorkbenchError;
use crate::common::models::SolveResponse;

#[derive(Debug, Clone)]
pub enum Message {
    LoadSample,
    FormulaEdited(text_editor::Action),
    OptionChanged(OptionField, String),
    Generate,
    Generated(Result<String, WorkbenchError>),
    Solve,
    Solved(Result<SolveResponse, WorkbenchError>),
    ClearLog,
}
