use crate::{
    search::{search_engines::DEFAULT_BUDGET, StrategyName},
    PuzzleError,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a solver run, usually read from a TOML file. Every field is
/// optional.
///
/// ```toml
/// budget = 5000
/// strategies = ["manhattan"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SolverConfig {
    /// Maximum number of explored states before a search gives up.
    #[serde(default = "default_budget")]
    pub budget: usize,
    /// Strategies to run, one search each, in order.
    #[serde(default = "default_strategies")]
    pub strategies: Vec<StrategyName>,
}

fn default_budget() -> usize {
    DEFAULT_BUDGET
}

fn default_strategies() -> Vec<StrategyName> {
    StrategyName::all()
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            budget: default_budget(),
            strategies: default_strategies(),
        }
    }
}

impl SolverConfig {
    pub fn from_text(text: &str) -> Result<Self, PuzzleError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, PuzzleError> {
        let text = std::fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = SolverConfig::from_text("").unwrap();
        assert_eq!(config, SolverConfig::default());
        assert_eq!(config.budget, 3000);
        assert_eq!(
            config.strategies,
            vec![StrategyName::Manhattan, StrategyName::MisplacedTiles]
        );
    }

    #[test]
    fn reads_fields() {
        let config = SolverConfig::from_text(
            r#"
            budget = 50
            strategies = ["misplaced-tiles"]
            "#,
        )
        .unwrap();
        assert_eq!(config.budget, 50);
        assert_eq!(config.strategies, vec![StrategyName::MisplacedTiles]);
    }

    #[test]
    fn unknown_strategy_fails() {
        assert!(matches!(
            SolverConfig::from_text(r#"strategies = ["dijkstra"]"#),
            Err(PuzzleError::Config(_))
        ));
    }

    #[test]
    fn from_path_works() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "budget = 10\n").unwrap();
        let config = SolverConfig::from_path(file.path()).unwrap();
        assert_eq!(config.budget, 10);
        assert_eq!(config.strategies, StrategyName::all());
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solver.toml");
        let error = SolverConfig::from_path(&path).unwrap_err();
        assert!(matches!(error, PuzzleError::Io { .. }));
        assert!(error.to_string().contains(&path.display().to_string()));
    }
}
