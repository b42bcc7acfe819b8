use crate::model::{Attendance, NewAttendance, NewUser, User};
use crate::models::LoginReqDto;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        version = "0.1.0",
        description = r#"
## Attendance API

Registers users, issues login tokens and records class attendance.

- **Users**: register, log in, list, fetch and delete accounts
- **Attendance**: record, list, fetch and delete attendance entries

Every response is a JSON object with a `message` and, on successful reads, a `data` field.
"#,
    ),
    paths(
        crate::auth::handlers::register,
        crate::auth::handlers::login,

        crate::api::users::get_users,
        crate::api::users::get_user_by_id,
        crate::api::users::delete_user,

        crate::api::attendance::create_attendance,
        crate::api::attendance::get_attendance,
        crate::api::attendance::get_attendance_by_id,
        crate::api::attendance::delete_attendance
    ),
    components(
        schemas(
            User,
            NewUser,
            LoginReqDto,
            Attendance,
            NewAttendance
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "User management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
