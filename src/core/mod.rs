pub mod domain;
pub mod store;

pub use domain::{Detail, Mission, MissionStatus, Rocket, RocketStatus};
pub use store::RecordStore;
