/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///  oxalates.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  quote-aware line split → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, file order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  search / browse filter / distinct values / ordering
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
