use super::group::{DeviceGroup, DeviceGroupDescriptor, MatchScope};
use crate::base::maperror::MapError;
use crate::probe::ProbeScope;
use std::sync::Arc;

/// Groups matched by one run, in ranking order.
#[derive(Debug, Clone, Default)]
pub struct MatchedSet {
    groups: Vec<Arc<DeviceGroup>>,
}

impl MatchedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `group`, replacing a previous entry of the same name in place.
    pub fn insert(&mut self, group: Arc<DeviceGroup>) {
        match self.groups.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<DeviceGroup>> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.name.clone()).collect()
    }

    /// Names of the matched groups flagged as URL selectors.
    pub fn selector_names(&self) -> Vec<String> {
        self.groups
            .iter()
            .filter(|g| g.is_selector)
            .map(|g| g.name.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DeviceGroup>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Registered device groups, in registration order.
#[derive(Debug, Clone, Default)]
pub struct DeviceGroupRegistry {
    groups: Vec<Arc<DeviceGroup>>,
}

impl DeviceGroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and registers `descriptor`. A group with the same name is
    /// replaced entirely but keeps its registration position.
    pub fn add(&mut self, descriptor: DeviceGroupDescriptor) -> Result<(), MapError> {
        let group = Arc::new(descriptor.validate()?);
        tracing::trace!(group = %group.name, ranking = group.ranking, "registered device group");
        match self.groups.iter_mut().find(|g| g.name == group.name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<DeviceGroup>> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Groups sorted by ascending ranking; equal rankings keep
    /// registration order.
    pub fn by_ranking(&self) -> Vec<Arc<DeviceGroup>> {
        let mut groups = self.groups.clone();
        groups.sort_by(|a, b| a.ranking.total_cmp(&b.ranking));
        groups
    }

    /// Evaluates every group in ranking order and returns those that pass.
    ///
    /// Each test sees the groups matched before it, which is what lets a
    /// fallback group rank last and match only when nothing else did.
    pub fn match_groups(&self, probes: &ProbeScope<'_>) -> MatchedSet {
        let mut matched = MatchedSet::new();
        for group in self.by_ranking() {
            let hit = group.test(&MatchScope::new(probes, &matched));
            tracing::trace!(group = %group.name, matched = hit, "evaluated device group");
            if hit {
                matched.insert(group);
            }
        }
        matched
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DeviceGroup>> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }
}
