/// Data layer: core types, loading, scoring, and splitting for plots.
///
/// Architecture:
/// ```text
///   gender:t1:t2 text file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines, drop '-' rows → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  score    │  sqrt(t2² / t1) * 100 per record, averages by gender
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ partition  │  male / female (t1, t2) points → ScatterFigure
///   └───────────┘
/// ```

pub mod loader;
pub mod model;
pub mod partition;
pub mod score;
