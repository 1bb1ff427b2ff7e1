use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the algorithm.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    ///
    /// Pass `LegacyRandom` as random source to replay the sample stream of classic FlowSOM.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates an instance of `Environment` with repeatable random source and silent logger.
    pub fn new_deterministic() -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable()), logger: Arc::new(|_| ()) }
    }

    /// Creates an instance of `Environment` which random source depends on `deterministic` flag.
    pub fn new_with_mode(deterministic: bool) -> Self {
        if deterministic { Self::new_deterministic() } else { Self::default() }
    }

    /// Replaces the logger keeping the rest.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = logger;
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self { random: Arc::new(DefaultRandom::default()), logger: Arc::new(|_| ()) }
    }
}
