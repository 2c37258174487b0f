pub mod generator;
pub mod loader;

pub use crate::domain::model::{ProgramCatalog, StudentCard, StudentCode, UserProfile};
pub use crate::domain::ports::{ConfigProvider, Document, ProfileSource, RandomSource};
pub use crate::utils::error::Result;
