#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot derive a subkey from an empty block")]
    EmptyBlock,
}

pub type Result<T> = std::result::Result<T, Error>;
