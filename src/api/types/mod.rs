//! API request, response and error types

pub mod chat;
pub mod error;

pub use chat::{
    AskRequest, AskResponse, AssistantInfoResponse, DocumentResponse, DocumentsResponse,
};
pub use error::{ApiError, ApiErrorResponse};
