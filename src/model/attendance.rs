use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "fullname": "Juan Dela Cruz",
        "address": "Manila",
        "degree": "BSIT",
        "year": "3",
        "block": "A",
        "subject": "Databases",
        "date": "2023-06-12",
        "startTime": "08:00",
        "endTime": "10:00"
    })
)]
pub struct Attendance {
    pub id: i64,
    #[serde(rename = "fullname")]
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub degree: Option<String>,
    pub year: Option<String>,
    pub block: Option<String>,
    pub subject: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct NewAttendance {
    #[serde(rename = "fullname")]
    #[schema(example = "Juan Dela Cruz")]
    pub full_name: Option<String>,
    #[schema(example = "Manila")]
    pub address: Option<String>,
    #[schema(example = "BSIT")]
    pub degree: Option<String>,
    #[schema(example = "3")]
    pub year: Option<String>,
    #[schema(example = "A")]
    pub block: Option<String>,
    #[schema(example = "Databases")]
    pub subject: Option<String>,
    #[schema(example = "2023-06-12")]
    pub date: Option<String>,
    #[serde(rename = "startTime")]
    #[schema(example = "08:00")]
    pub start_time: Option<String>,
    #[serde(rename = "endTime")]
    #[schema(example = "10:00")]
    pub end_time: Option<String>,
}

impl Entity for Attendance {
    type Draft = NewAttendance;

    const TABLE: &'static str = "attendances";
    const COLUMNS: &'static [&'static str] = &[
        "full_name",
        "address",
        "degree",
        "year",
        "block",
        "subject",
        "date",
        "start_time",
        "end_time",
    ];

    fn values(draft: &NewAttendance) -> Vec<Option<String>> {
        vec![
            draft.full_name.clone(),
            draft.address.clone(),
            draft.degree.clone(),
            draft.year.clone(),
            draft.block.clone(),
            draft.subject.clone(),
            draft.date.clone(),
            draft.start_time.clone(),
            draft.end_time.clone(),
        ]
    }

    #[cfg(test)]
    fn hydrate(id: i64, values: Vec<Option<String>>) -> Self {
        let mut values = values.into_iter();
        let mut next = || values.next().flatten();
        Self {
            id,
            full_name: next(),
            address: next(),
            degree: next(),
            year: next(),
            block: next(),
            subject: next(),
            date: next(),
            start_time: next(),
            end_time: next(),
        }
    }
}
