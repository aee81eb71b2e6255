use std::path::PathBuf;

/// Failure kinds of the two pipelines.
///
/// Ingestion errors (`Load`, `NoDocuments`) abort the whole run before the
/// index is touched. Serving errors (`Classification`, `Generation`,
/// `Ticket`) are caught at the router boundary and converted into the
/// generic degraded response — they never reach the HTTP caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file with a recognized extension could not be decoded. The run
    /// aborts entirely: a partial index is worse than a hard stop.
    #[error("failed to load document {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    /// The knowledge directory contained no loadable documents. The
    /// existing index must be left untouched.
    #[error("no documents found under {}", .0.display())]
    NoDocuments(PathBuf),

    /// The LLM collaborator failed during intent classification. Malformed
    /// completion text is never an error — the classifier absorbs it.
    #[error("intent classification failed")]
    Classification(#[source] anyhow::Error),

    /// The embedding or completion collaborator failed while producing an
    /// answer.
    #[error("answer generation failed")]
    Generation(#[source] anyhow::Error),

    /// The ticket table rejected a write.
    #[error("ticket store failure")]
    Ticket(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
