//! Application services for the translation update workflow.

mod view;
mod workflow;

pub use view::TranslationView;
pub use workflow::{
    CreateTranslationRequest, StatusSummary, TranslationWorkflowError, TranslationWorkflowResult,
    TranslationWorkflowService, UpdateTranslationRequest,
};
