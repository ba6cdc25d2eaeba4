pub mod task;
pub mod user;

pub use task::{CreateTask, Task, TaskRow, UpdateTask};
pub use user::{CreateUser, LoginUser, RegisterResponse, UpdateUser, User, UserRow};
