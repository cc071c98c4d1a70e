use std::path::PathBuf;

/// Errors produced while validating a scenario, planning a play, or loading
/// configuration. Not finding a scoring option is not an error; see
/// [`crate::PlayOutcome::NoScoringOption`].
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
  /// A coordinate or radius was NaN, infinite, or otherwise malformed.
  #[error("invalid input: {0}")]
  InvalidInput(String),
  /// Two coincident points were used where a distinct line is required.
  #[error("degenerate geometry: {0}")]
  DegenerateGeometry(&'static str),
  #[error("invalid config: {0}")]
  InvalidConfig(String),
  #[error("failed to read config {}: {source}", path.display())]
  ConfigIo {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse config: {0}")]
  ConfigParse(#[from] toml::de::Error),
}
