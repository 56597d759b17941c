use thiserror::Error;

/// All possible errors in the demos
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Node '{0}' is not defined in the graph")]
    NodeNotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DemoError>;
