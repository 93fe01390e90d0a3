#![forbid(unsafe_code)]

pub mod machine;
pub mod model;
pub mod policy;
pub mod scoring;

pub use machine::{Intent, reduce};
pub use policy::QuizPolicy;
