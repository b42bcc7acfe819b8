use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::Entity;

// password is stored and returned as given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "juan", nullable = true)]
    pub username: Option<String>,
    #[schema(example = "juan@email.com", nullable = true)]
    pub email: Option<String>,
    #[schema(example = "secret", nullable = true)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "juan")]
    pub username: Option<String>,
    #[schema(example = "juan@email.com", format = "email")]
    pub email: Option<String>,
    #[schema(example = "secret")]
    pub password: Option<String>,
}

impl Entity for User {
    type Draft = NewUser;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["username", "email", "password"];

    fn values(draft: &NewUser) -> Vec<Option<String>> {
        vec![
            draft.username.clone(),
            draft.email.clone(),
            draft.password.clone(),
        ]
    }

    #[cfg(test)]
    fn hydrate(id: i64, values: Vec<Option<String>>) -> Self {
        let mut values = values.into_iter();
        Self {
            id,
            username: values.next().flatten(),
            email: values.next().flatten(),
            password: values.next().flatten(),
        }
    }
}
