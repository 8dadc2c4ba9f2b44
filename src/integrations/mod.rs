//! External service integrations.

pub mod transliteration {
    pub use crate::transliteration::*;
}

pub mod storage {
    pub use crate::storage::*;
}
