use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed {dataset} data: {source}")]
    Malformed {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Deserialize one bundled JSON dataset, naming it in any error.
pub fn parse_dataset<T: DeserializeOwned>(dataset: &'static str, json: &str) -> Result<T, DataError> {
    serde_json::from_str(json).map_err(|source| DataError::Malformed { dataset, source })
}
