// Wire models shared by the GUI and the CLI for the generate/solve backend
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_VARS: i64 = 50;
pub const DEFAULT_NUM_CLAUSES: i64 = 200;
pub const DEFAULT_MIN_CLAUSE_LENGTH: i64 = 2;
pub const DEFAULT_MAX_CLAUSE_LENGTH: i64 = 4;

/// Parameters of a random formula request. `seed: None` lets the server pick one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationOptions {
    pub num_vars: i64,
    pub num_clauses: i64,
    pub min_clause_length: i64,
    pub max_clause_length: i64,
    pub seed: Option<i64>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            num_vars: DEFAULT_NUM_VARS,
            num_clauses: DEFAULT_NUM_CLAUSES,
            min_clause_length: DEFAULT_MIN_CLAUSE_LENGTH,
            max_clause_length: DEFAULT_MAX_CLAUSE_LENGTH,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub options: GenerationOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub cnf: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveRequest {
    pub cnf: String,
}

/// Body of a successful solve. Both text fields may be present at once:
/// the solver can print a result and still write diagnostics to stderr.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolveResponse {
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub return_code: Option<i64>,
}

/// Body returned by the backend with a non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
