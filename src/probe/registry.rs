use super::value::ProbeValue;
use crate::base::maperror::MapError;
use crate::environment::Environment;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

/// A probe function. It reads the environment, or other probes, through
/// the scope it is given.
pub type ProbeFn = Arc<dyn Fn(&ProbeScope<'_>) -> ProbeValue + Send + Sync>;

/// What a probe can see while it runs.
pub struct ProbeScope<'a> {
    registry: &'a ProbeRegistry,
    env: &'a dyn Environment,
}

impl<'a> ProbeScope<'a> {
    pub fn new(registry: &'a ProbeRegistry, env: &'a dyn Environment) -> Self {
        Self { registry, env }
    }

    pub fn env(&self) -> &'a dyn Environment {
        self.env
    }

    /// Value of another probe, memoized like any other lookup.
    pub fn probe(&self, name: &str) -> Option<ProbeValue> {
        self.registry.probe(name, self.env)
    }

    /// Numeric value of probe `name`; `NaN` when missing or not a number,
    /// so every comparison against it is false.
    pub fn number(&self, name: &str) -> f64 {
        self.probe(name)
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::NAN)
    }

    /// Truthiness of probe `name`; false when missing.
    pub fn flag(&self, name: &str) -> bool {
        self.probe(name).is_some_and(|v| v.is_truthy())
    }

    /// Text value of probe `name`; empty when missing or not text.
    pub fn text(&self, name: &str) -> String {
        self.probe(name)
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }
}

/// Named probes and their memoized results.
///
/// The first registration under a name wins. Results are computed on first
/// lookup and kept until [`clear_cache`](Self::clear_cache).
#[derive(Default)]
pub struct ProbeRegistry {
    probes: Vec<(String, ProbeFn)>,
    index: HashMap<String, usize>,
    cache: RefCell<HashMap<String, ProbeValue>>,
    // Names currently being computed, to break probe cycles.
    evaluating: RefCell<HashSet<String>>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `probe` under `name`.
    ///
    /// Returns `Ok(false)` when a probe with that name already exists; the
    /// existing probe is kept.
    pub fn add<F>(&mut self, name: &str, probe: F) -> Result<bool, MapError>
    where
        F: Fn(&ProbeScope<'_>) -> ProbeValue + Send + Sync + 'static,
    {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(MapError::invalid_probe_name(name));
        }
        if self.index.contains_key(name) {
            tracing::debug!(probe = %name, "probe already registered, keeping the first");
            return Ok(false);
        }
        self.index.insert(name.to_string(), self.probes.len());
        self.probes.push((name.to_string(), Arc::new(probe)));
        tracing::trace!(probe = %name, "registered probe");
        Ok(true)
    }

    /// Memoized value of probe `name`, or `None` if it is not registered.
    pub fn probe(&self, name: &str, env: &dyn Environment) -> Option<ProbeValue> {
        let probe = self.index.get(name).map(|&i| Arc::clone(&self.probes[i].1))?;

        let cached = self.cache.borrow().get(name).cloned();
        if cached.is_some() {
            return cached;
        }

        if !self.evaluating.borrow_mut().insert(name.to_string()) {
            tracing::debug!(probe = %name, "probe cycle detected");
            return None;
        }
        let value = probe(&ProbeScope::new(self, env));
        self.evaluating.borrow_mut().remove(name);

        tracing::trace!(probe = %name, value = ?value, "probe evaluated");
        self.cache
            .borrow_mut()
            .insert(name.to_string(), value.clone());
        Some(value)
    }

    /// The memoized value of `name` without evaluating it.
    pub fn cached(&self, name: &str) -> Option<ProbeValue> {
        self.cache.borrow().get(name).cloned()
    }

    /// Drops memoized values; registrations are kept.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Every probe and its value, evaluating those not yet cached.
    pub fn all_results(&self, env: &dyn Environment) -> BTreeMap<String, ProbeValue> {
        self.probes
            .iter()
            .filter_map(|(name, _)| self.probe(name, env).map(|v| (name.clone(), v)))
            .collect()
    }

    /// Probe names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.probes.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Removes every probe and cached value.
    pub fn clear(&mut self) {
        self.probes.clear();
        self.index.clear();
        self.cache.borrow_mut().clear();
        self.evaluating.borrow_mut().clear();
    }
}

impl std::fmt::Debug for ProbeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeRegistry")
            .field("probes", &self.probes.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("cached", &self.cache.borrow().len())
            .finish()
    }
}
