use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a missing color collection.
    pub fn collection_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: "Color collection",
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn collection_not_found_message_is_fixed() {
        let err = CoreError::collection_not_found(7);
        assert_eq!(err.to_string(), "Color collection not found");
        assert_matches!(err, CoreError::NotFound { id: 7, .. });
    }
}
