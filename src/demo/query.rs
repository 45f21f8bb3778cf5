//! Batch query parsing

use std::fmt;

/// One `Component` or `Component:Scenario` element of a batch query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPair {
    pub component: String,
    /// Empty when the element had no scenario
    pub scenario: String,
}

impl QueryPair {
    pub fn new(component: impl Into<String>, scenario: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            scenario: scenario.into(),
        }
    }

    pub fn has_scenario(&self) -> bool {
        !self.scenario.trim().is_empty()
    }
}

impl fmt::Display for QueryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scenario.is_empty() {
            write!(f, "{}", self.component)
        } else {
            write!(f, "{}:{}", self.component, self.scenario)
        }
    }
}

/// Split a batch such as `"Button:download, Table:pagination"` into pairs.
///
/// Elements are never rejected; an element without a colon has an empty
/// scenario and everything after the first colon belongs to the scenario.
pub fn parse_batch(raw: &str) -> Vec<QueryPair> {
    split_elements(raw)
        .map(|element| match element.split_once(':') {
            Some((component, scenario)) => QueryPair::new(component.trim(), scenario.trim()),
            None => QueryPair::new(element, ""),
        })
        .collect()
}

/// Split a comma-separated list of component names
pub fn parse_names(raw: &str) -> Vec<String> {
    split_elements(raw).map(str::to_string).collect()
}

fn split_elements(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}
