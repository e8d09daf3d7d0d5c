//! Energy coach chat: forwards a conversation to the language model
//! under the coach system prompt.
//!
//! An empty conversation is valid. The coach then opens with an
//! introduction and its first question.

use crate::{
    advice::{AdviceModel, ChatMessage, ChatRole, CompletionRequest},
    config::AdviceConfig,
    error::{AdviceError, AdviceResult},
};
use anyhow::Context;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub message: ChatMessage,
    /// Name of the model that wrote the reply.
    pub source:  String,
}

/// Every turn needs text, and the conversation must end with the user.
pub fn validate_conversation(messages: &[ChatMessage]) -> AdviceResult<()> {
    if let Some(i) = messages.iter().position(|m| m.content.trim().is_empty()) {
        return Err(AdviceError::InvalidRequest {
            reason: format!("message {i} has no content"),
        });
    }
    if messages.last().is_some_and(|m| m.role != ChatRole::User) {
        return Err(AdviceError::InvalidRequest {
            reason: "the last message must come from the user".into(),
        });
    }
    Ok(())
}

pub fn chat(
    messages: &[ChatMessage],
    config: &AdviceConfig,
    model: Option<&dyn AdviceModel>,
) -> AdviceResult<ChatReply> {
    if let Err(e) = validate_conversation(messages) {
        log::warn!("chat: rejected conversation: {e}");
        return Err(e);
    }
    let model = model.ok_or(AdviceError::ModelNotConfigured)?;

    let request = CompletionRequest::new(&config.advisor, &config.advisor.coach_prompt, messages.to_vec());
    let text = model
        .complete(&request)
        .with_context(|| format!("chat: model {} failed", model.name()))?;
    if text.trim().is_empty() {
        return Err(anyhow::anyhow!("chat: model {} returned no text", model.name()).into());
    }

    log::info!("chat: {} turns in, reply from {}", messages.len(), model.name());
    Ok(ChatReply {
        message: ChatMessage::assistant(text),
        source:  model.name().to_string(),
    })
}
