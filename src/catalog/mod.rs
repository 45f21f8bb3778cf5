//! Component and demo catalog: fetching, parsing and the load-once cache

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};

mod cache;
mod parse;
mod source;

pub use cache::CatalogCache;
pub use parse::parse_catalog;
pub use source::{CatalogSource, FileCatalogSource, HttpCatalogSource};

/// A documented component as listed in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    /// Component title, e.g. "Button". Compared case-insensitively.
    pub title: String,
    /// Localized subtitle, empty when absent
    pub sub_title: String,
    /// Documentation category, empty when absent
    pub category: String,
    /// Short description, empty when absent
    pub description: String,
    /// Positions of this component's demos in [`Catalog::demos`]
    pub demos: Range<usize>,
}

/// A single runnable demo belonging to a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoRecord {
    /// Title of the owning component
    pub component: String,
    /// Short label such as "Basic usage"
    pub scenario: String,
    /// Longer free text
    pub description: String,
    /// Demo source code, echoed verbatim
    pub source: String,
}

/// The whole catalog, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    id: u64,
    components: Vec<ComponentRecord>,
    demos: Vec<DemoRecord>,
}

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(1);

impl Catalog {
    /// Empty catalog with an identity no other catalog in the process shares
    pub(crate) fn new() -> Self {
        Self {
            id: NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed),
            ..Self::default()
        }
    }

    /// Identity of this catalog; clones share it
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Components in catalog order
    pub fn components(&self) -> &[ComponentRecord] {
        &self.components
    }

    /// All demos, flattened in catalog order
    pub fn demos(&self) -> &[DemoRecord] {
        &self.demos
    }

    /// Demos listed under the given component
    pub fn demos_of(&self, component: &ComponentRecord) -> &[DemoRecord] {
        self.demos.get(component.demos.clone()).unwrap_or(&[])
    }

    /// First component whose title matches `name`, ignoring case
    pub fn find_component(&self, name: &str) -> Option<&ComponentRecord> {
        let name = name.trim();
        self.components
            .iter()
            .find(|c| c.title.to_lowercase() == name.to_lowercase())
    }

    /// Components whose category matches `category`, ignoring case
    pub fn components_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a ComponentRecord> + 'a {
        let category = category.trim().to_lowercase();
        self.components
            .iter()
            .filter(move |c| c.category.to_lowercase() == category)
    }

    /// Demos of the named component, with their position in the catalog
    pub fn demos_for_component<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = (usize, &'a DemoRecord)> + 'a {
        let name = name.to_lowercase();
        self.demos
            .iter()
            .enumerate()
            .filter(move |(_, d)| d.component.to_lowercase() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.demos.is_empty()
    }
}
