use sensei_core::model::{TopicProgress, TopicProgressDraft};
use sqlx::Row;

use crate::repository::StorageError;

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn encode_progress(progress: &TopicProgress) -> Result<String, StorageError> {
    serde_json::to_string(progress).map_err(ser)
}

/// Decodes a stored value and checks it against its key.
///
/// Values are decoded through the draft type so an unknown topic id surfaces as
/// a validation error instead of an opaque JSON error.
pub(crate) fn decode_progress(key: &str, value: &str) -> Result<TopicProgress, StorageError> {
    let draft: TopicProgressDraft = serde_json::from_str(value).map_err(ser)?;
    Ok(draft.validate_for_key(key)?)
}

pub(crate) fn map_progress_row(row: &sqlx::sqlite::SqliteRow) -> Result<TopicProgress, StorageError> {
    let key: String = row.try_get("key").map_err(ser)?;
    let value: String = row.try_get("value").map_err(ser)?;
    decode_progress(&key, &value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensei_core::model::{ProgressValidationError, TopicId};
    use sensei_core::time::fixed_now;

    #[test]
    fn encoded_value_decodes_under_its_key() {
        let record = TopicProgress::completed_at(TopicId::Slider, fixed_now());
        let json = encode_progress(&record).unwrap();
        assert!(json.contains("\"lastAttempt\""));
        assert_eq!(decode_progress("slider", &json).unwrap(), record);
    }

    #[test]
    fn unknown_topic_in_value_is_a_validation_error() {
        let err = decode_progress("slider", r#"{"id":"grid","completed":true}"#).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Validation(ProgressValidationError::UnknownTopic { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = decode_progress("slider", r#"{"id":"slider"}"#).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
