//! Consultation answers: route a free-text query to a topic, then build a
//! record from the session's records and current insights.

pub mod builder;
pub mod classify;
pub mod history;
pub mod types;

pub use builder::{generate_consultation, generate_consultation_at, ConsultationContext};
pub use classify::classify_query;
pub use history::ConsultationHistory;
pub use types::{ConsultationRecord, ConsultationTopic};
