use crate::{
    error::{ApiError, parse_id, path_id},
    model::{Attendance, NewAttendance},
    models::Envelope,
    store::{Filter, Store},
};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{debug, error, info};

/// Record attendance
#[utoipa::path(
    post,
    path = "/api/create_attendance",
    request_body = NewAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = Object, example = json!({
            "message": "attendance has added"
        })),
        (status = 400, description = "Store failure", body = Object, example = json!({
            "message": "could not create attendance"
        })),
        (status = 422, description = "Malformed body", body = Object, example = json!({
            "message": "request failed"
        }))
    ),
    tag = "Attendance"
)]
pub async fn create_attendance<S: Store>(
    store: web::Data<S>,
    payload: web::Json<NewAttendance>,
) -> Result<HttpResponse, ApiError> {
    store
        .create::<Attendance>(&payload.into_inner())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create attendance");
            ApiError::Store("could not create attendance")
        })?;

    info!("Attendance recorded");
    Ok(HttpResponse::Ok().json(Envelope::message("attendance has added")))
}

/// List attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance records", body = Object, example = json!({
            "message": "student successfully fetch",
            "data": [{
                "id": 1, "fullname": "Juan Dela Cruz", "address": "Manila", "degree": "BSIT",
                "year": "3", "block": "A", "subject": "Databases", "date": "2023-06-12",
                "startTime": "08:00", "endTime": "10:00"
            }]
        })),
        (status = 400, description = "Store failure", body = Object, example = json!({
            "message": "could not get attendance data"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance<S: Store>(store: web::Data<S>) -> Result<HttpResponse, ApiError> {
    let records = store.find_all::<Attendance>().await.map_err(|e| {
        error!(error = %e, "Failed to list attendance");
        ApiError::Store("could not get attendance data")
    })?;

    Ok(HttpResponse::Ok().json(Envelope::with_data("student successfully fetch", records)))
}

/// Get attendance by ID
#[utoipa::path(
    get,
    path = "/api/get_attendance/{id}",
    params(
        ("id", Path, description = "Attendance ID")
    ),
    responses(
        (status = 200, description = "Attendance found", body = Attendance),
        (status = 400, description = "Not found or store failure", body = Object, example = json!({
            "message": "could not get attendance"
        })),
        (status = 500, description = "Empty id", body = Object, example = json!({
            "message": "id cannot found"
        }))
    ),
    tag = "Attendance"
)]
pub async fn get_attendance_by_id<S: Store>(
    store: web::Data<S>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(path_id(&req), "id cannot found", "could not get attendance")?;

    debug!(id, "Fetching attendance");

    let record = store
        .find_one::<Attendance>(Filter::Id(id))
        .await
        .map_err(|e| {
            debug!(error = %e, id, "Attendance lookup failed");
            ApiError::Store("could not get attendance")
        })?;

    Ok(HttpResponse::Ok().json(Envelope::with_data(
        "attendance id fetched successfully",
        record,
    )))
}

/// Delete attendance
#[utoipa::path(
    delete,
    path = "/api/delete_attendance/{id}",
    params(
        ("id", Path, description = "Attendance ID")
    ),
    responses(
        (status = 200, description = "Deleted, also when the id did not exist", body = Object, example = json!({
            "message": "Attendance Deleted."
        })),
        (status = 400, description = "Store failure", body = Object, example = json!({
            "message": "could not delete attendance"
        })),
        (status = 500, description = "Empty id", body = Object, example = json!({
            "message": "id cannot be empty"
        }))
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance<S: Store>(
    store: web::Data<S>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(path_id(&req), "id cannot be empty", "could not delete attendance")?;

    store.delete::<Attendance>(id).await.map_err(|e| {
        error!(error = %e, id, "Failed to delete attendance");
        ApiError::Store("could not delete attendance")
    })?;

    Ok(HttpResponse::Ok().json(Envelope::message("Attendance Deleted.")))
}
