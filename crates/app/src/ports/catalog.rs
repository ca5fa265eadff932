//! Category catalog port — read-only service-taxonomy lookup.
//!
//! The taxonomy is static reference data maintained outside the core. The
//! core only needs ordered listings and never inspects leaf contents beyond
//! checking that a chosen name is non-empty.

use tradehub_domain::section::MainSection;

/// Injected read-only lookup into the Build/Design/Finance taxonomy.
///
/// Synchronous on purpose: implementations serve static tables, not IO.
pub trait CategoryCatalog {
    /// Top-level sections, in display order.
    fn sections(&self) -> Vec<MainSection>;

    /// Category names under a section, in display order.
    fn categories(&self, section: MainSection) -> Vec<String>;

    /// Ordered leaf subcategories for a category, or `None` when the section
    /// has no such category.
    fn subcategories(&self, section: MainSection, category: &str) -> Option<Vec<String>>;
}
