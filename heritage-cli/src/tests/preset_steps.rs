//! Behaviour-driven step definitions driving the preset CLI scenarios.

use heritage_core::PresetPackage;
use rstest_bdd_macros::{scenario, then, when};
use rust_decimal::Decimal;
use serde_json::Value;

use super::steps::{CliWorld, cli_world};
use crate::{ARG_CATALOG, ARG_GUIDE, CliError};

fn preset_argv(world: &CliWorld, preset: String) -> Vec<String> {
    vec![
        "heritage".to_owned(),
        "preset".to_owned(),
        preset,
        format!("--{ARG_CATALOG}"),
        world.catalog_path.as_str().to_owned(),
    ]
}

#[when("I run the preset command for {preset:word} with guide {guide:word}")]
fn run_preset_with_guide(#[from(cli_world)] world: &CliWorld, preset: String, guide: String) {
    let mut argv = preset_argv(world, preset);
    argv.extend([format!("--{ARG_GUIDE}"), guide]);
    world.run(argv);
}

#[when("I run the preset command for {preset:word}")]
fn run_preset_command(#[from(cli_world)] world: &CliWorld, preset: String) {
    world.run(preset_argv(world, preset));
}

#[when("I run the presets command")]
fn run_presets_command(#[from(cli_world)] world: &CliWorld) {
    world.run(vec![
        "heritage".to_owned(),
        "presets".to_owned(),
        format!("--{ARG_CATALOG}"),
        world.catalog_path.as_str().to_owned(),
    ]);
}

#[then("the preset report uses a budget of {budget:u64} over {days:u32} days")]
fn report_uses_budget(#[from(cli_world)] world: &CliWorld, budget: u64, days: u32) {
    let report: Value = world.output();
    let request: heritage_core::EstimateRequest =
        serde_json::from_value(report["request"].clone()).expect("request in report");
    assert_eq!(request.budget, Decimal::from(budget));
    assert_eq!(request.days, days);
}

#[then("the preset estimate includes a guide cost of {cost:u64}")]
fn estimate_includes_guide(#[from(cli_world)] world: &CliWorld, cost: u64) {
    let report: Value = world.output();
    assert_eq!(report["estimate"]["guide_cost"], Value::from(cost));
}

#[then("the command fails because preset {preset:word} is unknown")]
fn fails_unknown_preset(#[from(cli_world)] world: &CliWorld, preset: String) {
    world.with_error(|error| match error {
        CliError::UnknownPreset { id } => assert_eq!(id.as_str(), preset),
        other => panic!("expected UnknownPreset, found {other:?}"),
    });
}

#[then("{count:usize} presets are listed")]
fn presets_are_listed(#[from(cli_world)] world: &CliWorld, count: usize) {
    let presets: Vec<PresetPackage> = world.output();
    assert_eq!(presets.len(), count);
}

macro_rules! register_preset_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/preset_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(cli_world)] world: CliWorld) {
            let _ = world;
        }
    };
}

register_preset_scenario!(preset_with_guide, "estimating a preset with a guide");
register_preset_scenario!(preset_unknown, "rejecting unknown presets");
register_preset_scenario!(presets_listed, "listing presets");
