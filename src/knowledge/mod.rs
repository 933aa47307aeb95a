//! Constraints and the knowledge base that owns them.

mod base;
mod constraint;

pub use base::KnowledgeBase;
pub use constraint::Constraint;
