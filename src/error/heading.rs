use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HeadingError {
    #[error("heading row has no cells")]
    NoCells,

    #[error("malformed heading `{text}`: expected at least 3 tokens, found {found}")]
    Malformed { text: String, found: usize },
}
