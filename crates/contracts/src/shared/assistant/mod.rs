pub mod context;
pub mod fallback;
pub mod types;

pub use context::InsightContext;
pub use fallback::{classify, fallback_response, InsightTopic};
pub use types::{
    ChatMessage, ChatRole, ChoiceMessage, CompletionChoice, CompletionOutcome, CompletionRequest,
    CompletionResponse,
};
