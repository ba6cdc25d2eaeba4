use crate::{
    auth::verify_password,
    error::AppError,
    models::{CreateUser, LoginUser, RegisterResponse, User},
    repo::UserRepository,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Registers a new user.
///
/// The password is hashed before persistence; the response carries the id
/// and email only, never the hash.
///
/// ## Responses:
/// - `201 Created`: `{id, email, message}`.
/// - `400 Bad Request`: Validation failures.
/// - `409 Conflict`: The email is already registered.
/// - `500 Internal Server Error`: For database or hashing errors.
#[post("")]
pub async fn register_user(
    repo: web::Data<UserRepository>,
    payload: web::Json<CreateUser>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    let user = repo.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        id: user.id,
        email: user.email,
        message: "User successfully created".into(),
    }))
}

/// Verifies a user's credentials.
///
/// No token or session is issued; a successful login simply confirms the
/// email/password pair and returns the user's public shape.
///
/// ## Responses:
/// - `200 OK`: `{id, email}`.
/// - `400 Bad Request`: Validation failures.
/// - `401 Unauthorized`: Unknown email or wrong password.
/// - `500 Internal Server Error`: For database errors.
#[post("/login")]
pub async fn login_user(
    repo: web::Data<UserRepository>,
    payload: web::Json<LoginUser>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    match repo.find_by_email(&payload.email).await? {
        Some(row) => {
            if verify_password(&payload.password, &row.password_hash)? {
                Ok(HttpResponse::Ok().json(User::from(row)))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
