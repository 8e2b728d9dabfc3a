use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, info};

use wloutput_core::background::CompositeRequest;
use wloutput_core::command::DisplayEnvironment;
use wloutput_core::config::{WlOutputConfig, default_config_path, load_config};
use wloutput_core::events;
use wloutput_core::setup::{SavedSetup, default_setup_path, load_setup, save_setup};
use wloutput_core::{PipelineOptions, PipelineOutput};

use crate::monitors::load_monitors;
use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("plan", sub_matches)) => handle_plan_command(sub_matches),
        Some(("apply", sub_matches)) => handle_apply_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_plan_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let monitors_path = required_path(matches, "monitors")?;
    let json_output = matches.get_flag("json");
    let no_saved = matches.get_flag("no-saved");

    info!(
        event = "cli.plan_started",
        monitors = %monitors_path.display(),
        json_output = json_output,
        no_saved = no_saved
    );

    let config = load_settings()?;
    let monitors = load_monitors(&monitors_path)?;
    let saved = load_saved(&config, no_saved)?;

    let options = PipelineOptions::new(detect_environment(None)?)
        .with_scale_policy(config.scale_policy())
        .with_saved(saved);

    let output = run_pipeline(&monitors, &options)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output.arrangement)?);
    } else {
        println!("Arrangement:");
        table::print_screens_table(output.arrangement.screens());
        println!("Canvas: {}", output.arrangement.canvas());
    }

    info!(
        event = "cli.plan_completed",
        screens = output.arrangement.screens().len(),
        canvas = %output.arrangement.canvas()
    );
    Ok(())
}

fn handle_apply_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let monitors_path = required_path(matches, "monitors")?;
    let background = required_path(matches, "background")?;
    let output_dir = matches.get_one::<String>("output-dir").map(PathBuf::from);
    let environment_arg = matches.get_one::<String>("environment");
    let json_output = matches.get_flag("json");
    let save = matches.get_flag("save");
    let no_saved = matches.get_flag("no-saved");

    info!(
        event = "cli.apply_started",
        monitors = %monitors_path.display(),
        background = %background.display(),
        environment = ?environment_arg,
        save = save,
        no_saved = no_saved
    );

    let config = load_settings()?;
    let monitors = load_monitors(&monitors_path)?;
    let saved = load_saved(&config, no_saved)?;
    let environment = detect_environment(environment_arg.map(|s| s.as_str()))?;

    let output_dir = output_dir.unwrap_or_else(|| config.output_dir());
    let request = CompositeRequest::new(&background, &output_dir)
        .with_jpeg_quality(config.background.jpeg_quality);

    let options = PipelineOptions::new(environment)
        .with_scale_policy(config.scale_policy())
        .with_saved(saved)
        .with_background(request);

    let output = run_pipeline(&monitors, &options)?;

    if save {
        let path = setup_path(&config);
        let setup = SavedSetup::from_screens(output.arrangement.screens());
        if let Err(e) = save_setup(&path, &setup) {
            eprintln!("Failed to save setup: {}", e);
            error!(event = "cli.apply_save_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
        info!(event = "cli.apply_saved", path = %path.display(), outputs = setup.len());
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Arrangement ({}):", output.environment);
        table::print_screens_table(output.arrangement.screens());
        println!("Canvas: {}", output.arrangement.canvas());
        if !environment.supports_background() {
            println!("Note: {} cannot set backgrounds, image not split.", environment);
        }
        println!();
        for command in &output.commands {
            println!("{}", command);
        }
    }

    info!(
        event = "cli.apply_completed",
        environment = %output.environment,
        commands = output.commands.len()
    );
    Ok(())
}

fn required_path(matches: &ArgMatches, id: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    matches
        .get_one::<String>(id)
        .map(PathBuf::from)
        .ok_or_else(|| format!("Missing required argument '--{}'", id).into())
}

fn load_settings() -> Result<WlOutputConfig, Box<dyn std::error::Error>> {
    let Some(path) = default_config_path() else {
        return Ok(WlOutputConfig::default());
    };

    match load_config(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            error!(event = "cli.config_load_failed", path = %path.display(), error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn setup_path(config: &WlOutputConfig) -> PathBuf {
    config.setup.path.clone().unwrap_or_else(default_setup_path)
}

fn load_saved(
    config: &WlOutputConfig,
    no_saved: bool,
) -> Result<SavedSetup, Box<dyn std::error::Error>> {
    if no_saved {
        return Ok(SavedSetup::default());
    }

    let path = setup_path(config);
    match load_setup(&path) {
        Ok(saved) => Ok(saved),
        Err(e) => {
            eprintln!("Failed to load saved setup: {}", e);
            eprintln!("Hint: pass --no-saved to ignore it.");
            error!(event = "cli.setup_load_failed", path = %path.display(), error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Explicit flag wins; otherwise sway when its IPC socket is advertised
fn detect_environment(
    explicit: Option<&str>,
) -> Result<DisplayEnvironment, Box<dyn std::error::Error>> {
    match explicit {
        Some(value) => Ok(value.parse::<DisplayEnvironment>()?),
        None => Ok(DisplayEnvironment::from_sway_socket(
            std::env::var("SWAYSOCK").ok().as_deref(),
        )),
    }
}

fn run_pipeline(
    monitors: &[wloutput_core::Monitor],
    options: &PipelineOptions,
) -> Result<PipelineOutput, Box<dyn std::error::Error>> {
    match wloutput_core::run(monitors, options) {
        Ok(output) => Ok(output),
        Err(e) => {
            eprintln!("Failed to arrange outputs: {}", e);
            error!(event = "cli.pipeline_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
