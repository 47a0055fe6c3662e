use super::registry::MatchedSet;
use crate::base::maperror::MapError;
use crate::probe::ProbeScope;
use std::fmt;
use std::sync::Arc;

/// A device group test.
pub type TestFn = Arc<dyn Fn(&MatchScope<'_>) -> bool + Send + Sync>;

/// What a device group test can see: the probes, and the groups matched so
/// far in the current run.
pub struct MatchScope<'a> {
    probes: &'a ProbeScope<'a>,
    matched: &'a MatchedSet,
}

impl<'a> MatchScope<'a> {
    pub fn new(probes: &'a ProbeScope<'a>, matched: &'a MatchedSet) -> Self {
        Self { probes, matched }
    }

    pub fn probes(&self) -> &ProbeScope<'a> {
        self.probes
    }

    /// See [`ProbeScope::number`].
    pub fn number(&self, probe: &str) -> f64 {
        self.probes.number(probe)
    }

    /// See [`ProbeScope::flag`].
    pub fn flag(&self, probe: &str) -> bool {
        self.probes.flag(probe)
    }

    /// Groups already matched in this run (all lower-ranked).
    pub fn matched(&self) -> &MatchedSet {
        self.matched
    }
}

/// A registered, validated device group.
#[derive(Clone)]
pub struct DeviceGroup {
    pub name: String,
    pub ranking: f64,
    pub url: Option<String>,
    pub description: Option<String>,
    /// Whether the group name is used as a URL selector (`index.tablet.html`).
    pub is_selector: bool,
    test: TestFn,
}

impl DeviceGroup {
    pub fn test(&self, scope: &MatchScope<'_>) -> bool {
        (self.test)(scope)
    }

    /// The group's URL, when it has a non-empty one.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

impl fmt::Debug for DeviceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceGroup")
            .field("name", &self.name)
            .field("ranking", &self.ranking)
            .field("url", &self.url)
            .field("description", &self.description)
            .field("is_selector", &self.is_selector)
            .finish_non_exhaustive()
    }
}

/// Registration input for a device group.
///
/// `ranking` and `test` are required; [`validate`](Self::validate) rejects
/// descriptors without them, or with a NaN ranking.
#[derive(Clone, Default)]
pub struct DeviceGroupDescriptor {
    pub name: String,
    pub ranking: Option<f64>,
    pub test: Option<TestFn>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub is_selector: bool,
}

impl DeviceGroupDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn ranking(mut self, ranking: f64) -> Self {
        self.ranking = Some(ranking);
        self
    }

    pub fn test<F>(mut self, test: F) -> Self
    where
        F: Fn(&MatchScope<'_>) -> bool + Send + Sync + 'static,
    {
        self.test = Some(Arc::new(test));
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn selector(mut self, is_selector: bool) -> Self {
        self.is_selector = is_selector;
        self
    }

    pub fn validate(self) -> Result<DeviceGroup, MapError> {
        let ranking = match self.ranking {
            None => return Err(MapError::missing_ranking(&self.name)),
            Some(r) if r.is_nan() => return Err(MapError::invalid_ranking(&self.name)),
            Some(r) => r,
        };
        let test = self
            .test
            .ok_or_else(|| MapError::missing_test_function(&self.name))?;
        Ok(DeviceGroup {
            name: self.name,
            ranking,
            url: self.url,
            description: self.description,
            is_selector: self.is_selector,
            test,
        })
    }
}
