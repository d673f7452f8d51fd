mod config;
mod error;
mod pipeline;
mod schedule;
mod service;

pub use config::{Config, ScheduleSlot};
pub use error::*;
pub use pipeline::Pipeline;
pub use schedule::Schedule;
pub use service::DigestService;

#[cfg(test)]
mod tests;
