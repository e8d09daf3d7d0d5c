//! Home energy investment advisor.
//!
//! Static catalogs of energy-saving investments and subsidy programs,
//! an ROI calculator, profile-driven recommendation and subsidy ranking,
//! portfolio aggregation, the energy coach chat, and the request dispatch
//! used by the runner.
//!
//! Everything here is pure and synchronous; no module performs I/O
//! except `AdviceConfig::load`.

pub mod advice;
pub mod api;
pub mod calculator;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod profile;
pub mod recommend;
pub mod relevance;
pub mod report;
pub mod subsidy;
pub mod types;
