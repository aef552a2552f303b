//! Behaviour-driven step definitions driving the CLI scenarios.

use super::helpers::{Workspace, recommend_payload, result_names, stdout_json};
use super::*;
use dashboard_core::test_support::sample_catalog;
use dashboard_core::{NumericAttribute, ValidationError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct CliWorld {
    workspace: Workspace,
    request_path: Utf8PathBuf,
    catalog_json: Utf8PathBuf,
    catalog_db: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CliWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        Self {
            request_path: workspace.path("request.json"),
            catalog_json: workspace.path("catalog.json"),
            catalog_db: workspace.path("catalog.db"),
            workspace,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, argv: Vec<String>) {
        self.stdout.borrow_mut().clear();
        let outcome = Cli::try_parse_from(argv)
            .map_err(CliError::from)
            .and_then(|cli| run_command(cli.command, &mut *self.stdout.borrow_mut()));
        self.result.replace(Some(outcome));
    }

    fn error(&self) -> CliError {
        self.result
            .take()
            .expect("result recorded")
            .expect_err("expected error")
    }
}

#[fixture]
fn world() -> CliWorld {
    CliWorld::new()
}

#[given("the sample catalog database exists on disk")]
fn sample_catalog_exists(#[from(world)] world: &CliWorld) {
    let seeded = world.workspace.seed_catalog();
    assert_eq!(seeded, world.catalog_db);
}

#[given("a request weighting price that requires text generation")]
fn price_request(#[from(world)] world: &CliWorld) {
    let payload = recommend_payload(NumericAttribute::Price, &["Text_Generation"]);
    world.workspace.write_json("request.json", &payload);
}

#[given("a request that requires an unknown capability")]
fn unknown_capability_request(#[from(world)] world: &CliWorld) {
    let payload = recommend_payload(NumericAttribute::Price, &["Time_Travel"]);
    world.workspace.write_json("request.json", &payload);
}

#[given("a JSON catalog file with the sample models")]
fn catalog_json(#[from(world)] world: &CliWorld) {
    let records = serde_json::to_value(sample_catalog().records()).expect("serialise catalog");
    world.workspace.write_json("catalog.json", &records);
}

#[when("I run {command} with the request and catalog")]
fn run_with_request(#[from(world)] world: &CliWorld, command: String) {
    world.run(vec![
        "dashboard".to_owned(),
        command.trim_matches('"').to_owned(),
        world.request_path.as_str().to_owned(),
        format!("--{ARG_CATALOG_DB}"),
        world.catalog_db.as_str().to_owned(),
    ]);
}

#[when("I run {command} with the catalog file")]
fn run_with_catalog_file(#[from(world)] world: &CliWorld, command: String) {
    world.run(vec![
        "dashboard".to_owned(),
        command.trim_matches('"').to_owned(),
        world.catalog_json.as_str().to_owned(),
        format!("--{ARG_CATALOG_DB}"),
        world.catalog_db.as_str().to_owned(),
    ]);
    let borrowed = world.result.borrow();
    let outcome = borrowed.as_ref().expect("result recorded");
    assert!(outcome.is_ok(), "expected success, found {outcome:?}");
}

#[when("I run {command} with the catalog")]
fn run_with_catalog(#[from(world)] world: &CliWorld, command: String) {
    world.run(vec![
        "dashboard".to_owned(),
        command.trim_matches('"').to_owned(),
        format!("--{ARG_CATALOG_DB}"),
        world.catalog_db.as_str().to_owned(),
    ]);
}

#[then("the command succeeds and ranks {first} before {second}")]
fn ranks_before(#[from(world)] world: &CliWorld, first: String, second: String) {
    let borrowed = world.result.borrow();
    let outcome = borrowed.as_ref().expect("result recorded");
    assert!(outcome.is_ok(), "expected success, found {outcome:?}");

    let names = result_names(&stdout_json(&world.stdout.borrow()));
    assert_eq!(
        names,
        vec![
            first.trim_matches('"').to_owned(),
            second.trim_matches('"').to_owned()
        ]
    );
}

#[then("the command fails because the request is invalid")]
fn fails_invalid_request(#[from(world)] world: &CliWorld) {
    match world.error() {
        CliError::InvalidRequest { source, path } => {
            assert_eq!(path, world.request_path);
            assert!(matches!(source, ValidationError::UnknownCapability { .. }));
        }
        other => panic!("expected InvalidRequest, found {other:?}"),
    }
}

#[then("the command fails because the catalog database is missing")]
fn fails_missing_catalog(#[from(world)] world: &CliWorld) {
    match world.error() {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_CATALOG_DB);
            assert_eq!(path, world.catalog_db);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[then("the listing shows {count} models")]
fn listing_shows(#[from(world)] world: &CliWorld, count: usize) {
    let borrowed = world.result.borrow();
    let outcome = borrowed.as_ref().expect("result recorded");
    assert!(outcome.is_ok(), "expected success, found {outcome:?}");
    assert_eq!(result_names(&stdout_json(&world.stdout.borrow())).len(), count);
}

macro_rules! register_cli_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_cli_scenario!(recommend_happy_path, "recommending models from a request file");
register_cli_scenario!(recommend_unknown_capability, "rejecting unknown capabilities");
register_cli_scenario!(recommend_missing_catalog, "rejecting a missing catalog database");
register_cli_scenario!(import_then_list, "importing records before listing them");
