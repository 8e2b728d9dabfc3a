use serde::Serialize;

use crate::background::CompositeRequest;
use crate::command::DisplayEnvironment;
use crate::layout::Arrangement;
use crate::scale::ScalePolicy;
use crate::setup::SavedSetup;

/// Everything a pipeline run needs besides the monitors themselves
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub environment: DisplayEnvironment,
    pub scale_policy: ScalePolicy,
    /// Saved records override planned screens by name
    pub saved: SavedSetup,
    /// Background to split across the canvas, if any
    pub background: Option<CompositeRequest>,
}

impl PipelineOptions {
    pub fn new(environment: DisplayEnvironment) -> Self {
        Self {
            environment,
            ..Default::default()
        }
    }

    pub fn with_scale_policy(mut self, scale_policy: ScalePolicy) -> Self {
        self.scale_policy = scale_policy;
        self
    }

    pub fn with_saved(mut self, saved: SavedSetup) -> Self {
        self.saved = saved;
        self
    }

    pub fn with_background(mut self, request: CompositeRequest) -> Self {
        self.background = Some(request);
        self
    }
}

/// Result of a full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutput {
    pub environment: DisplayEnvironment,
    pub arrangement: Arrangement,
    /// One configuration command per screen, in arrangement order
    pub commands: Vec<String>,
}
