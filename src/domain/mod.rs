pub mod ids;
pub mod state;
pub mod task;

pub use ids::{IdSource, RandomIds};
#[cfg(test)]
pub use ids::SequentialIds;
pub use state::{AppState, Intent};
pub use task::{Task, TaskId, ValidationError};
