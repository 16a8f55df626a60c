use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollbarError {
    #[error("no item type registered for reuse identifier '{identifier}'")]
    UnregisteredItem { identifier: String },

    #[error("item index {index} out of bounds for {count} items")]
    IndexOutOfBounds { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, ScrollbarError>;
