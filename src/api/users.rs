use crate::{
    error::{ApiError, parse_id, path_id},
    model::User,
    models::Envelope,
    store::{Filter, Store},
};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, error};

/// List users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = Object, example = json!({
            "message": "user fetch successfully",
            "data": [{ "id": 1, "username": "juan", "email": "juan@email.com", "password": "secret" }]
        })),
        (status = 400, description = "Store failure", body = Object, example = json!({
            "message": "could not get users data"
        }))
    ),
    tag = "Users"
)]
pub async fn get_users<S: Store>(store: web::Data<S>) -> Result<HttpResponse, ApiError> {
    let users = store.find_all::<User>().await.map_err(|e| {
        error!(error = %e, "Failed to list users");
        ApiError::Store("could not get users data")
    })?;

    Ok(HttpResponse::Ok().json(Envelope::with_data("user fetch successfully", users)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/get_users/{id}",
    params(
        ("id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = Object, example = json!({
            "message": "user id successfully fetched",
            "data": { "id": 1, "username": "juan", "email": "juan@email.com", "password": "secret" }
        })),
        (status = 400, description = "User not found or store failure", body = Object, example = json!({
            "message": "could not get user"
        })),
        (status = 500, description = "Empty id", body = Object, example = json!({
            "message": "id cannot be found"
        }))
    ),
    tag = "Users"
)]
pub async fn get_user_by_id<S: Store>(
    store: web::Data<S>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(path_id(&req), "id cannot be found", "could not get user")?;

    debug!(id, "Fetching user");

    let user = store.find_one::<User>(Filter::Id(id)).await.map_err(|e| {
        debug!(error = %e, id, "User lookup failed");
        ApiError::Store("could not get user")
    })?;

    Ok(HttpResponse::Ok().json(Envelope::with_data("user id successfully fetched", user)))
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/api/delete_user/{id}",
    params(
        ("id", Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Deleted, also when the id did not exist", body = Object, example = json!({
            "message": "user delete successfully"
        })),
        (status = 400, description = "Store failure", body = Object, example = json!({
            "message": "could not delete user"
        })),
        (status = 500, description = "Empty id", body = Object, example = json!({
            "message": "id cannot be empty"
        }))
    ),
    tag = "Users"
)]
pub async fn delete_user<S: Store>(
    store: web::Data<S>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(path_id(&req), "id cannot be empty", "could not delete user")?;

    store.delete::<User>(id).await.map_err(|e| {
        error!(error = %e, id, "Failed to delete user");
        ApiError::Store("could not delete user")
    })?;

    Ok(HttpResponse::Ok().json(Envelope::message("user delete successfully")))
}
