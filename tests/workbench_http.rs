use formula_workbench::client::models::options::OptionField;
use formula_workbench::client::models::ui_state::{Tone, UiStatus};
use formula_workbench::{ApiClient, ClientConfig, WorkbenchState, SAMPLE_CNF};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::from_lookup(|_| None)
        .unwrap()
        .with_base_url(&server.base_url())
        .unwrap();
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn generate_then_solve_round_trip() {
    let server = MockServer::start();
    let generated = "c Random 3-SAT\nc vars=3 clauses=2\np cnf 3 2\n1 -2 0\n2 3 0\n";
    let generate_mock = server.mock(|when, then| {
        when.method(Method::POST).path("/api/generate").json_body(json!({
            "options": {
                "num_vars": 3,
                "num_clauses": 2,
                "min_clause_length": 2,
                "max_clause_length": 3,
                "seed": 11
            }
        }));
        then.status(200).json_body(json!({"cnf": generated}));
    });
    let solve_mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/solve")
            .json_body(json!({"cnf": generated.trim()}));
        then.status(200).json_body(json!({
            "output": "Parsed formula with 3 variables and 2 clauses\nSAT: \nAssignment: 011\n",
            "error": "",
            "return_code": 0
        }));
    });

    let client = client_for(&server);
    let mut state = WorkbenchState::new();
    state.set_option(OptionField::Vars, "3".into());
    state.set_option(OptionField::Clauses, "2".into());
    state.set_option(OptionField::MaxClause, " 3 ".into());
    state.set_option(OptionField::Seed, "11".into());

    state.generate(&client).await.unwrap();
    assert_eq!(state.formula, generated);
    assert_eq!(state.status, UiStatus::Generated);

    state.solve(&client).await.unwrap();
    assert_eq!(
        state.output,
        "Parsed formula with 3 variables and 2 clauses\nSAT: \nAssignment: 011"
    );
    assert_eq!(state.status.tone(), Tone::Success);

    generate_mock.assert();
    solve_mock.assert();
    assert!(state.generate_enabled());
    assert!(state.solve_enabled());
}

#[tokio::test]
async fn rejected_generation_keeps_formula_and_reports_message() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(Method::POST).path("/api/generate");
        then.status(400).json_body(json!({"error": "bad seed"}));
    });

    let client = client_for(&server);
    let mut state = WorkbenchState::new();
    state.load_sample();

    assert!(state.generate(&client).await.is_err());
    assert_eq!(state.status, UiStatus::Error("bad seed".into()));
    assert_eq!(state.formula, SAMPLE_CNF);
    assert!(state.generate_enabled());
}

#[tokio::test]
async fn blank_formula_never_reaches_the_backend() {
    let server = MockServer::start();
    let solve_mock = server.mock(|when, then| {
        when.method(Method::POST).path("/api/solve");
        then.status(200).json_body(json!({"output": "UNSAT"}));
    });

    let client = client_for(&server);
    let mut state = WorkbenchState::new();
    state.set_formula("   ");

    assert!(state.solve(&client).await.is_err());
    assert_eq!(solve_mock.hits(), 0);
    assert_eq!(state.status.text(), "Add or generate a formula first");
}

#[tokio::test]
async fn server_side_solver_error_fills_output_panel() {
    let server = MockServer::start();
    let _m = server.mock(|when, then| {
        when.method(Method::POST).path("/api/solve");
        then.status(400).json_body(json!({"error": "No CNF content provided"}));
    });

    let client = client_for(&server);
    let mut state = WorkbenchState::new();
    state.load_sample();

    assert!(state.solve(&client).await.is_err());
    assert_eq!(state.output, "No CNF content provided");
    assert_eq!(state.status, UiStatus::Error("No CNF content provided".into()));
    assert!(state.solve_enabled());
}

#[tokio::test]
async fn unreachable_backend_leaves_client_usable() {
    let config = ClientConfig::from_lookup(|_| None)
        .unwrap()
        .with_base_url("http://127.0.0.1:1")
        .unwrap();
    let client = ApiClient::new(&config).unwrap();
    let mut state = WorkbenchState::new();
    state.load_sample();

    assert!(state.solve(&client).await.is_err());
    assert_eq!(state.status.tone(), Tone::Error);
    assert_eq!(state.output, state.status.text());
    assert!(state.solve_enabled());

    state.load_sample();
    assert_eq!(state.status, UiStatus::LoadedSample);
}
