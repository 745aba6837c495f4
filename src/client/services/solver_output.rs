// Rendering of solver responses for the output panel
use std::fmt;

use crate::common::models::SolveResponse;

pub const RUNNING_PLACEHOLDER: &str = "Running tinydpll…";
pub const NO_OUTPUT_PLACEHOLDER: &str = "No output received.";

/// Text of the output panel after a successful solve: trimmed stdout, then a
/// `stderr:` block, separated by a blank line.
pub fn render_solve_output(response: &SolveResponse) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(2);
    if let Some(output) = non_blank(response.output.as_deref()) {
        parts.push(output.to_string());
    }
    if let Some(error) = non_blank(response.error.as_deref()) {
        parts.push(format!("stderr:\n{}", error));
    }
    if parts.is_empty() {
        NO_OUTPUT_PLACEHOLDER.to_string()
    } else {
        parts.join("\n\n")
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

/// Coarse reading of the solver's stdout. Informational only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Sat { assignment: Option<String> },
    Unsat,
    Unknown,
}

impl Verdict {
    pub fn classify(output: &str) -> Self {
        // "UNSAT" contains "SAT", check it first
        if output.contains("UNSAT") {
            Verdict::Unsat
        } else if output.contains("SAT") {
            let assignment = assignment_after(output, "Assignment:")
                .or_else(|| assignment_after(output, "SAT:"));
            Verdict::Sat { assignment }
        } else {
            Verdict::Unknown
        }
    }
}

fn assignment_after(output: &str, marker: &str) -> Option<String> {
    let start = output.find(marker)? + marker.len();
    let token = output[start..].split_whitespace().next()?;
    token
        .chars()
        .all(|c| c == '0' || c == '1')
        .then(|| token.to_string())
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Sat { assignment: Some(bits) } => write!(f, "SAT ({})", bits),
            Verdict::Sat { assignment: None } => write!(f, "SAT"),
            Verdict::Unsat => write!(f, "UNSAT"),
            Verdict::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(output: Option<&str>, error: Option<&str>) -> SolveResponse {
        SolveResponse {
            output: output.map(String::from),
            error: error.map(String::from),
            return_code: None,
        }
    }

    #[test]
    fn plain_output_is_rendered_verbatim() {
        assert_eq!(render_solve_output(&response(Some("SAT: 001"), None)), "SAT: 001");
    }

    #[test]
    fn stderr_block_follows_a_blank_line() {
        let rendered = render_solve_output(&response(Some("UNSAT"), Some("warning: timeout near limit")));
        assert_eq!(rendered, "UNSAT\n\nstderr:\nwarning: timeout near limit");
    }

    #[test]
    fn stderr_alone_is_still_shown() {
        let rendered = render_solve_output(&response(Some("  \n"), Some("  Error: bad header\n")));
        assert_eq!(rendered, "stderr:\nError: bad header");
    }

    #[test]
    fn missing_or_blank_fields_give_placeholder() {
        assert_eq!(render_solve_output(&response(None, None)), NO_OUTPUT_PLACEHOLDER);
        assert_eq!(render_solve_output(&response(Some(" "), Some("\n"))), NO_OUTPUT_PLACEHOLDER);
    }

    #[test]
    fn output_is_trimmed() {
        let rendered = render_solve_output(&response(
            Some("Parsed formula with 3 variables and 3 clauses\nSAT: \nAssignment: 001\n"),
            Some(""),
        ));
        assert_eq!(
            rendered,
            "Parsed formula with 3 variables and 3 clauses\nSAT: \nAssignment: 001"
        );
    }

    #[test]
    fn classify_reads_verdicts() {
        assert_eq!(Verdict::classify("UNSAT\n"), Verdict::Unsat);
        assert_eq!(
            Verdict::classify("SAT: 001"),
            Verdict::Sat { assignment: Some("001".into()) }
        );
        assert_eq!(
            Verdict::classify("Parsed formula\nSAT: \nAssignment: 0110\n"),
            Verdict::Sat { assignment: Some("0110".into()) }
        );
        assert_eq!(Verdict::classify("SAT"), Verdict::Sat { assignment: None });
        assert_eq!(Verdict::classify("Segmentation fault"), Verdict::Unknown);
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::Sat { assignment: Some("01".into()) }.to_string(), "SAT (01)");
        assert_eq!(Verdict::Unsat.to_string(), "UNSAT");
    }
}
