//! Shared primitive types used across the advice engine.

/// Monetary amount in euros.
pub type Euro = f64;

/// Energy quantity in kWh.
pub type Kwh = f64;

/// A calendar year, or a year offset inside a projection.
pub type Year = u32;

/// Stable catalog identifier (investment or subsidy).
pub type CatalogId = &'static str;

/// Identifier stamped on every generated report.
pub type ReportId = String;
