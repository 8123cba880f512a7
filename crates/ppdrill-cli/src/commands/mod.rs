pub mod generate;
pub mod grade;
pub mod history;
pub mod init;
pub mod lesson;
pub mod practice;
pub mod topics;

use anyhow::Result;

use ppdrill_core::session::Session;
use ppdrill_core::TopicSelector;
use ppdrill_store::DrillConfig;

/// Topic from the command line, else the configured default.
pub(crate) fn resolve_selector(topic: Option<&str>, config: &DrillConfig) -> Result<TopicSelector> {
    match topic {
        Some(t) => Ok(t.parse::<TopicSelector>()?),
        None => config.default_selector(),
    }
}

pub(crate) fn new_session(seed: Option<u64>) -> Session {
    match seed {
        Some(seed) => Session::seeded(seed),
        None => Session::from_entropy(),
    }
}
