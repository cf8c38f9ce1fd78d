use thiserror::Error;

/// Failures surfaced by the configurator core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfiguratorError {
    #[error("cannot lay out {count} items on a sphere")]
    InvalidCatalogSize { count: usize },

    #[error("item {requested} cannot move to the front while item {active} occupies it")]
    TransitionBusy { requested: usize, active: usize },

    #[error("unknown catalog item '{0}'")]
    UnknownItemReference(String),

    #[error("item index {index} is outside the catalog of {count} items")]
    UnknownItemIndex { index: usize, count: usize },

    #[error("duplicate catalog item id '{0}'")]
    DuplicateItemId(String),

    #[error("invalid config value for {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfiguratorError>;
