//! Shared primitive types used across the entire dashboard.

/// A stable, unique identifier for a sale record.
pub type SaleId = String;

/// A roster identifier for a consultant (e.g. "L2", "A1").
pub type ConsultantId = String;
