//! Configuration errors.

/// A rejected [`EvolutionConfig`](super::EvolutionConfig) or city set.
///
/// Returned before any population is created.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    PopulationTooSmall,

    #[error("elite_size ({elite_size}) exceeds population_size ({population_size})")]
    EliteExceedsPopulation {
        elite_size: usize,
        population_size: usize,
    },

    #[error("mutation_rate must be within [0, 1], got {0}")]
    MutationRateOutOfRange(f64),

    #[error("at least 2 distinct cities are required, got {0}")]
    TooFewCities(usize),
}
