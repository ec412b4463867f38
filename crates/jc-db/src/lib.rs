pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::Database;
pub use error::{DbError, Result};
pub use repositories::project_repository::ProjectRepository;
pub use repositories::sprint_repository::SprintRepository;
pub use repositories::task_repository::TaskRepository;
