pub mod tasks;
pub mod users;

pub use tasks::TaskRepository;
pub use users::UserRepository;
