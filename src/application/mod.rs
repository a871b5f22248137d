mod error;
mod tracker;

pub use error::TrackError;
pub use tracker::{ChangeTracker, RunOutcome};
