use log::{info, warn};

use crate::client::gui::views::logger::{LogLevel, LogMessage};
use crate::client::models::options::{collect_options, OptionField, OptionFields};
use crate::client::models::ui_state::UiStatus;
use crate::client::services::api_client::FormulaBackend;
use crate::client::services::solver_output::{render_solve_output, Verdict, RUNNING_PLACEHOLDER};
use crate::common::error::WorkbenchError;
use crate::common::models::{GenerationOptions, SolveResponse};

/// Built-in example; the trailing "excpected output" lines are a hint for the reader.
pub const SAMPLE_CNF: &str = "c Example 3-SAT
p cnf 3 3
1 -2 0
2 3 0
3 -1 0

excpected output:
SAT: 001
";

pub const MAX_LOG_ENTRIES: usize = 50;

/// View state of the workbench. Every mutation goes through these methods.
///
/// `generate` and `solve` are split into `begin_*` (guard, status, disable the
/// control, hand back the request) and `finish_*` (render, re-enable the
/// control) so a UI runtime can run the network future in between.
#[derive(Debug, Clone, Default)]
pub struct WorkbenchState {
    pub formula: String,
    pub output: String,
    pub status: UiStatus,
    pub option_fields: OptionFields,
    pub verdict: Option<Verdict>,
    pub logger: Vec<LogMessage>,
    generate_in_flight: bool,
    solve_in_flight: bool,
}

impl WorkbenchState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.set_status(UiStatus::Ready);
        state
    }

    pub fn generate_enabled(&self) -> bool {
        !self.generate_in_flight
    }

    pub fn solve_enabled(&self) -> bool {
        !self.solve_in_flight
    }

    pub fn set_formula(&mut self, text: impl Into<String>) {
        self.formula = text.into();
    }

    pub fn set_option(&mut self, field: OptionField, value: String) {
        self.option_fields.set(field, value);
    }

    pub fn set_status(&mut self, status: UiStatus) {
        self.push_log(LogMessage::from_status(&status));
        self.status = status;
    }

    pub fn push_log(&mut self, entry: LogMessage) {
        self.logger.push(entry);
        if self.logger.len() > MAX_LOG_ENTRIES {
            let excess = self.logger.len() - MAX_LOG_ENTRIES;
            self.logger.drain(..excess);
        }
    }

    pub fn clear_log(&mut self) {
        self.logger.clear();
    }

    pub fn load_sample(&mut self) {
        self.formula = SAMPLE_CNF.to_string();
        self.set_status(UiStatus::LoadedSample);
    }

    /// `None` while a generate request is already pending.
    pub fn begin_generate(&mut self) -> Option<GenerationOptions> {
        if self.generate_in_flight {
            return None;
        }
        let options = collect_options(&self.option_fields);
        self.set_status(UiStatus::Generating);
        self.generate_in_flight = true;
        info!(
            "generating formula: vars={} clauses={} clause_len={}..={} seed={:?}",
            options.num_vars,
            options.num_clauses,
            options.min_clause_length,
            options.max_clause_length,
            options.seed
        );
        Some(options)
    }

    pub fn finish_generate(&mut self, result: Result<String, WorkbenchError>) -> Result<(), WorkbenchError> {
        self.generate_in_flight = false;
        match result {
            Ok(cnf) => {
                self.formula = cnf;
                self.set_status(UiStatus::Generated);
                Ok(())
            }
            Err(err) => {
                warn!("generation failed: {}", err);
                self.set_status(UiStatus::Error(err.message()));
                Err(err)
            }
        }
    }

    /// `Err(EmptyFormula)` when there is nothing to send, `Ok(None)` while a
    /// solve request is already pending, otherwise the trimmed formula.
    pub fn begin_solve(&mut self) -> Result<Option<String>, WorkbenchError> {
        if self.solve_in_flight {
            return Ok(None);
        }
        let cnf = self.formula.trim();
        if cnf.is_empty() {
            let err = WorkbenchError::EmptyFormula;
            self.set_status(UiStatus::Error(err.message()));
            return Err(err);
        }
        let cnf = cnf.to_string();

        self.set_status(UiStatus::Solving);
        self.solve_in_flight = true;
        self.output = RUNNING_PLACEHOLDER.to_string();
        self.verdict = None;
        info!("solving formula ({} bytes)", cnf.len());
        Ok(Some(cnf))
    }

    pub fn finish_solve(&mut self, result: Result<SolveResponse, WorkbenchError>) -> Result<(), WorkbenchError> {
        self.solve_in_flight = false;
        match result {
            Ok(response) => {
                self.output = render_solve_output(&response);
                self.verdict = response.output.as_deref().map(Verdict::classify);
                if let Some(code) = response.return_code.filter(|c| *c != 0) {
                    self.push_log(LogMessage::new(
                        LogLevel::Warning,
                        format!("solver exited with code {}", code),
                    ));
                }
                self.set_status(UiStatus::Solved);
                Ok(())
            }
            Err(err) => {
                warn!("solve failed: {}", err);
                self.output = err.message();
                self.set_status(UiStatus::Error(err.message()));
                Err(err)
            }
        }
    }

    pub async fn generate<B: FormulaBackend>(&mut self, backend: &B) -> Result<(), WorkbenchError> {
        let Some(options) = self.begin_generate() else {
            return Ok(());
        };
        let result = backend.generate(options).await;
        self.finish_generate(result)
    }

    pub async fn solve<B: FormulaBackend>(&mut self, backend: &B) -> Result<(), WorkbenchError> {
        let Some(cnf) = self.begin_solve()? else {
            return Ok(());
        };
        let result = backend.solve(cnf).await;
        self.finish_solve(result)
    }
}
