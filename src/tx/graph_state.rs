//! `GraphState` — the single graph-wide property diff (§3, §4.7 step 7).

use crate::model::{PropertyKeyId, Value};
use super::property_container::PropertyContainerState;

#[derive(Debug, Clone, Default)]
pub struct GraphState {
    properties: PropertyContainerState,
}

impl GraphState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn properties(&self) -> &PropertyContainerState {
        &self.properties
    }

    pub fn add_property(&mut self, key: PropertyKeyId, value: Value) {
        self.properties.add_property(key, value);
    }

    pub fn change_property(&mut self, key: PropertyKeyId, value: Value) {
        self.properties.change_property(key, value);
    }

    pub fn remove_property(&mut self, key: PropertyKeyId) {
        self.properties.remove_property(key);
    }
}
