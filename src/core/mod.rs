pub mod animator;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod configurator;
pub mod constants;
pub mod easing;
pub mod error;
pub mod frame_loop;
pub mod gesture;
pub mod layout;
pub mod picking;
pub mod selection;
pub mod transform;

pub use animator::{AnimatorEvent, Phase, TransitionKind};
pub use catalog::{wood_catalog, Catalog, CatalogItem};
pub use config::SceneConfig;
pub use configurator::{Configurator, PointerRelease, SelectOutcome};
pub use error::ConfiguratorError;
pub use frame_loop::{LoopSwitch, LoopToken};
pub use transform::TransformRaw;
