//! This module reimports a common used types.

pub use crate::algorithms::som::Grid;
pub use crate::algorithms::som::Mapping;
pub use crate::algorithms::som::SomConfig;
pub use crate::algorithms::som::SomConfigBuilder;
pub use crate::algorithms::som::TrainedMap;
pub use crate::algorithms::som::{map_to_nearest, train, train_with_config};

pub use crate::algorithms::math::square;
pub use crate::algorithms::math::{Nearest, find_nearest};

pub use crate::models::{Matrix, MatrixView, StridedView};

pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::{DefaultRandom, LegacyRandom, Random};
pub use crate::utils::{GenericError, GenericResult, SomError, SomResult};
