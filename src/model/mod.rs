pub mod attendance;
pub mod user;

pub use attendance::{Attendance, NewAttendance};
pub use user::{NewUser, User};
