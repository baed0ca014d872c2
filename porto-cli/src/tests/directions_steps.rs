//! Behaviour-driven step definitions driving the directions CLI scenarios.

use super::*;
use crate::directions::{
    DirectionsConfig, DirectionsProviderBuilder, DirectionsReport, run_directions_with,
};
use porto_core::test_support::{StubDirectionsProvider, airport_route};
use porto_core::{DirectionsError, DirectionsProvider};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Clone)]
struct StubProviderBuilder {
    provider: StubDirectionsProvider,
}

impl DirectionsProviderBuilder for StubProviderBuilder {
    fn build(&self, _config: &DirectionsConfig) -> Result<Box<dyn DirectionsProvider>, CliError> {
        Ok(Box::new(self.provider.clone()))
    }
}

struct DirectionsWorld {
    cli_args: RefCell<Vec<String>>,
    builder: RefCell<Option<StubProviderBuilder>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl DirectionsWorld {
    fn new() -> Self {
        Self {
            cli_args: RefCell::new(Vec::new()),
            builder: RefCell::new(None),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn use_provider(&self, provider: StubDirectionsProvider) {
        *self.builder.borrow_mut() = Some(StubProviderBuilder { provider });
    }

    fn report(&self) -> DirectionsReport {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON directions report")
    }
}

#[fixture]
fn world() -> DirectionsWorld {
    DirectionsWorld::new()
}

// --- Given steps ---

#[given("an API key is supplied on the command line")]
fn api_key_supplied(#[from(world)] world: &DirectionsWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_API_KEY}"), "test-key".to_owned()]);
}

#[given("the directions service returns the airport route")]
fn service_returns_route(#[from(world)] world: &DirectionsWorld) {
    world.use_provider(StubDirectionsProvider::with_route(airport_route()));
}

#[given("the directions service is unreachable")]
fn service_unreachable(#[from(world)] world: &DirectionsWorld) {
    world.use_provider(StubDirectionsProvider::with_error(
        DirectionsError::NetworkError {
            url: "https://maps.example.invalid/directions/json".to_owned(),
            message: "connection refused".to_owned(),
        },
    ));
}

// --- When steps ---

#[when("I run the directions command")]
fn run_directions_command(#[from(world)] world: &DirectionsWorld) {
    let mut argv = vec!["porto".to_owned(), "directions".to_owned()];
    argv.extend(world.cli_args.borrow().iter().cloned());
    let builder = world
        .builder
        .borrow()
        .clone()
        .expect("a directions service is configured");
    let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Directions(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_directions_with(args, &builder, &mut *buffer)
        }
        other => panic!("expected directions command, found {other:?}"),
    });
    world.result.replace(Some(outcome));
}

// --- Then steps ---

#[then("the command prints the three route steps")]
fn prints_three_steps(#[from(world)] world: &DirectionsWorld) {
    let report = world.report();
    assert!(report.available);
    assert_eq!(report.mode, "transit");
    assert!(report.link.starts_with("https://www.google.com/maps/dir/?api=1&origin="));
    let instructions: Vec<String> = report
        .steps
        .into_iter()
        .map(|step| step.instructions)
        .collect();
    assert_eq!(
        instructions,
        vec![
            "Walk to Aeroporto",
            "Metro towards Estádio do Dragão",
            "Walk to R. Formosa, 414"
        ]
    );
}

#[then("the metro step names its line")]
fn metro_step_names_line(#[from(world)] world: &DirectionsWorld) {
    let report = world.report();
    let lines: Vec<Option<String>> = report.steps.into_iter().map(|step| step.line).collect();
    assert_eq!(lines, vec![None, Some("E".to_owned()), None]);
}

#[then("the command succeeds without any steps")]
fn succeeds_without_steps(#[from(world)] world: &DirectionsWorld) {
    let report = world.report();
    assert!(!report.available);
    assert!(report.steps.is_empty());
}

#[then("the command fails because the API key is missing")]
fn fails_missing_key(#[from(world)] world: &DirectionsWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_API_KEY);
            assert_eq!(*env, ENV_DIRECTIONS_API_KEY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_directions_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/directions_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: DirectionsWorld) {
            let _ = world;
        }
    };
}

register_directions_scenario!(directions_airport_route, "printing the airport route");
register_directions_scenario!(directions_unavailable, "an unavailable route prints no steps");
register_directions_scenario!(directions_missing_key, "rejecting a missing API key");
