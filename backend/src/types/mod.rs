mod character;
mod environment;
mod error;

pub use character::{Character, CharacterPage};
pub use environment::Environment;
pub use error::{ApiErrorResponse, AppError};
