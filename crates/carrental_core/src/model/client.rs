//! Client record model.

use super::fields::{expect_field_count, FieldError, FromFields};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned client identifier.
pub type ClientId = i64;

/// Client fields supplied by the caller before insertion.
///
/// `email` is stored as typed; its format is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Persisted client row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl NewClient {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            email: email.into(),
        }
    }
}

impl FromFields for NewClient {
    const FIELD_COUNT: usize = 3;

    fn from_fields(fields: &[String]) -> Result<Self, FieldError> {
        expect_field_count(fields, Self::FIELD_COUNT)?;
        Ok(Self::new(
            fields[0].as_str(),
            fields[1].as_str(),
            fields[2].as_str(),
        ))
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Id: {}, Name: {}, Surname: {}, Email: {}",
            self.id, self.name, self.surname, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, NewClient};
    use crate::model::fields::{FieldError, FromFields};

    #[test]
    fn from_fields_keeps_text_verbatim() {
        let fields = vec![
            " Ada".to_string(),
            "Lovelace ".to_string(),
            "not-an-email".to_string(),
        ];
        let client = NewClient::from_fields(&fields).unwrap();
        assert_eq!(client, NewClient::new(" Ada", "Lovelace ", "not-an-email"));
    }

    #[test]
    fn from_fields_rejects_missing_fields() {
        let fields = vec!["Ada".to_string(), "Lovelace".to_string()];
        assert!(matches!(
            NewClient::from_fields(&fields),
            Err(FieldError::FieldCount {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn display_lists_columns_in_fixed_order() {
        let client = Client {
            id: 1,
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(
            client.to_string(),
            "Id: 1, Name: Ada, Surname: Lovelace, Email: ada@example.com"
        );
    }
}
