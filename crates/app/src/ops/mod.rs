pub mod agree;
pub mod generate;
pub mod persist;

pub use agree::{Agree, AgreeError};
pub use generate::{Generate, GenerateError};
pub use persist::{PersistError, PersistPrivate, PersistPublic};
