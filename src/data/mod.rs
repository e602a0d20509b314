/// Data layer: file parsing, legend labels, and the series model.
///
/// Architecture:
/// ```text
///  selected PL paths                  AFM path
///        │                               │
///        ▼                               │
///   ┌──────────┐                         │
///   │  labels   │  stem / time offset    │
///   └──────────┘  + order → FileReference│
///        │                               │
///        ▼                               ▼
///   ┌──────────┐                   ┌──────────┐
///   │  loader   │  marker block     │  loader   │  header + rows
///   └──────────┘                   └──────────┘
///        │                               │
///        └──────────► Series ◄───────────┘
/// ```

pub mod error;
pub mod labels;
pub mod loader;
pub mod model;
