/// Data layer: core types, loading/reshaping, and filtering.
///
/// Architecture:
/// ```text
///  gdp_pcap.csv / .json  (wide: one row per country, one column per year)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, coerce "10k"-style cells → GdpDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ GdpDataset  │  Vec<SeriesRow> (long format), countries, year span
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  country set + year window → matching row indices
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
