use crate::{
    error::AppError,
    models::{CreateTask, UpdateTask},
    repo::TaskRepository,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use uuid::Uuid;
use validator::Validate;

/// Lists every task, most recently updated first.
///
/// ## Responses:
/// - `200 OK`: A JSON array of tasks; empty when none exist.
/// - `500 Internal Server Error`: For database errors.
#[get("")]
pub async fn list_tasks(repo: web::Data<TaskRepository>) -> Result<impl Responder, AppError> {
    let tasks = repo.list_all().await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task.
///
/// ## Request Body:
/// - `title`: 1 to 80 characters (required).
/// - `description` (optional): up to 200 characters.
///
/// ## Responses:
/// - `201 Created`: The persisted task, with its assigned id and timestamps.
/// - `400 Bad Request`: Validation failures, listing every violation.
/// - `500 Internal Server Error`: For database errors.
#[post("")]
pub async fn create_task(
    repo: web::Data<TaskRepository>,
    payload: web::Json<CreateTask>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    let task = repo.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves a single task by its ID.
///
/// ## Responses:
/// - `200 OK`: The task as JSON.
/// - `404 Not Found`: No task with that id exists.
/// - `500 Internal Server Error`: For database errors.
#[get("/{id}")]
pub async fn get_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let task = repo.get_by_id(task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Partially updates a task.
///
/// Only the fields present in the payload are replaced; `{}` is a valid
/// no-op update. `updatedAt` is refreshed on every update.
///
/// ## Responses:
/// - `200 OK`: The task after the update.
/// - `400 Bad Request`: Validation failures.
/// - `404 Not Found`: No task with that id exists.
/// - `500 Internal Server Error`: For database errors.
#[patch("/{id}")]
pub async fn update_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
    payload: web::Json<UpdateTask>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    let task = repo.update(task_id.into_inner(), payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task.
///
/// ## Responses:
/// - `200 OK`: Empty body on success.
/// - `404 Not Found`: No task with that id exists.
/// - `500 Internal Server Error`: For database errors.
#[delete("/{id}")]
pub async fn delete_task(
    repo: web::Data<TaskRepository>,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    repo.delete(task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().finish())
}
