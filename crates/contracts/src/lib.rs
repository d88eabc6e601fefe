//! Shared contracts between the tariff administration front-end and the
//! Acme SRL backend: entity DTOs, form descriptors and report computations.

pub mod dashboards;
pub mod domain;
pub mod shared;
