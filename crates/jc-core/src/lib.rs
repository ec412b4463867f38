pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use models::project::{NewProject, Project};
pub use models::sprint::{NewSprint, Sprint, SprintWithTasks};
pub use models::sprint_status::SprintStatus;
pub use models::task::{NewTask, Task};
pub use validation::require_non_blank;

#[cfg(test)]
mod tests;
