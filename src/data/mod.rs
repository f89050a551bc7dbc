/// Data layer: core types, loading, preprocessing, filtering, aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → raw TrackTable (or absent)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ preprocess  │  one row per uri, collaborators merged
///   └────────────┘
///        │            ╲
///        ▼             ▼
///   ┌──────────┐   ┌─────────┐
///   │  filter   │   │ artists │  distinct artist strings
///   └──────────┘   └─────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  column means over the filtered rows
///   └───────────┘
/// ```

pub mod aggregate;
pub mod artists;
pub mod filter;
pub mod loader;
pub mod model;
pub mod preprocess;
