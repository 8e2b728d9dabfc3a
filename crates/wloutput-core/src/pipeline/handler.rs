use tracing::{info, warn};

use super::errors::PipelineError;
use super::types::{PipelineOptions, PipelineOutput};
use crate::background::composite;
use crate::command::render_commands;
use crate::geometry::measure_all;
use crate::layout::{Arrangement, compose_layout};
use crate::scale::{ScalePolicy, plan_scales};
use crate::screen::Monitor;
use crate::setup::merge_saved;

/// Select modes, estimate densities, plan scales and lay the monitors out left to right
pub fn plan_layout(
    monitors: &[Monitor],
    policy: &ScalePolicy,
) -> Result<Arrangement, PipelineError> {
    let measured = measure_all(monitors)?;
    let scaled = plan_scales(measured, policy);
    Ok(compose_layout(scaled)?)
}

/// Full run: plan the layout, apply saved overrides, split the background and render the
/// configuration commands for the environment.
///
/// Backgrounds are skipped for environments that cannot set them.
pub fn run(
    monitors: &[Monitor],
    options: &PipelineOptions,
) -> Result<PipelineOutput, PipelineError> {
    info!(
        event = "core.pipeline.run_started",
        environment = %options.environment,
        monitors = monitors.len(),
        saved = options.saved.len()
    );

    let arrangement = plan_layout(monitors, &options.scale_policy)?;
    let arrangement = merge_saved(arrangement, &options.saved)?;

    let arrangement = match &options.background {
        Some(request) if options.environment.supports_background() => {
            composite(arrangement, request)?
        }
        Some(request) => {
            warn!(
                event = "core.pipeline.background_unsupported",
                environment = %options.environment,
                source = %request.source.display()
            );
            arrangement
        }
        None => arrangement,
    };

    let commands = render_commands(arrangement.screens(), options.environment);

    info!(
        event = "core.pipeline.run_completed",
        canvas = %arrangement.canvas(),
        count = commands.len()
    );

    Ok(PipelineOutput {
        environment: options.environment,
        arrangement,
        commands,
    })
}
