use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::error::AppError::{self, MalformedPayload};

pub fn parse_body<T: DeserializeOwned>(bytes: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(bytes).map_err(MalformedPayload)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use spellbook::ImportRequest;

    use super::*;

    #[test]
    fn test_any_json_passes() {
        let body = Bytes::from_static(br#"{"name":"Merlin","spell":"Invisibility","extra":[1,2]}"#);
        let value: Value = parse_body(&body).unwrap();

        assert_eq!(value["extra"], json!([1, 2]));
    }

    #[test]
    fn test_malformed() {
        let body = Bytes::from_static(b"name=Merlin");

        assert!(matches!(parse_body::<Value>(&body), Err(MalformedPayload(_))));
        assert!(matches!(parse_body::<Value>(&Bytes::new()), Err(MalformedPayload(_))));
    }

    #[test]
    fn test_import_field_required() {
        let body = Bytes::from_static(br#"{"content":"spells: []"}"#);

        assert!(matches!(
            parse_body::<ImportRequest>(&body),
            Err(MalformedPayload(_))
        ));
    }
}
