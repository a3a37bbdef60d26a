use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("site token '{token}' not found while assembling molecule '{id}'")]
    SiteTokenMissing { token: String, id: String },

    #[error("ring-closure labels exhausted while assembling molecule '{id}'")]
    RingNumbersExhausted { id: String },

    #[error("failed to write molecule '{id}': {source}")]
    Sink {
        id: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to close molecule sink: {source}")]
    SinkClose {
        #[source]
        source: io::Error,
    },
}
