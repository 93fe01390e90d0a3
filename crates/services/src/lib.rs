#![forbid(unsafe_code)]

pub mod catalog;
pub mod driver;
pub mod error;
pub mod quiz_service;
pub mod timer;

pub use quiz_core::QuizPolicy;

pub use catalog::{CatalogSource, FileSource, HttpSource, StaticSource, load_catalog, source_for};
pub use driver::{SessionDriver, SessionHandle};
pub use error::{CatalogError, DriverError};
pub use quiz_service::QuizService;
pub use timer::QuestionTimer;
