mod catalog;
mod category;
mod ids;
mod session;
mod snapshot;

pub use ids::{CategoryId, ParseIdError, QuestionId};

pub use catalog::Catalog;
pub use category::{Category, CategoryError, CategoryRecord, Question, QuestionRecord};
pub use session::{Answer, QuizStatus, Session, TimerEpoch};
pub use snapshot::SessionSnapshot;
