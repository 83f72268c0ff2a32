pub mod answers;
pub mod patient;
pub mod record;
pub mod response;

pub use answers::AnswerSet;
pub use patient::{AgeGroup, Patient};
pub use record::MedicalRecord;
pub use response::{InstrumentKind, QuestionnaireResponse};
