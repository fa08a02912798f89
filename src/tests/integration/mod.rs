//! End-to-end answers over the bundled documents.

mod assistant_flows;
