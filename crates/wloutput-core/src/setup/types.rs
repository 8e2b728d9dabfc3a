use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::screen::Screen;

/// Previously saved screen records, keyed by output name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSetup {
    #[serde(default)]
    pub outputs: BTreeMap<String, Screen>,
}

impl SavedSetup {
    pub fn from_screens(screens: &[Screen]) -> Self {
        Self {
            outputs: screens
                .iter()
                .map(|s| (s.name.clone(), s.clone()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Screen> {
        self.outputs.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }
}
