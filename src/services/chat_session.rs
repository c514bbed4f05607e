// src/services/chat_session.rs
use crate::message::{Message, Model, Role};
use crate::services::ollama::ChatTransport;

/// What a submission did, for the status line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, or a request was already in flight. Nothing changed.
    Skipped,
    Answered,
    Failed,
}

/// Client-side chat state: the transcript, the selected model, and the
/// loading/error flags. Mutated only through `submit` and `select_model`.
pub struct ChatSession<T> {
    transport: T,
    messages: Vec<Message>,
    model: Model,
    loading: bool,
    error: Option<String>,
}

impl<T: ChatTransport> ChatSession<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            messages: Vec::new(),
            model: Model::default(),
            loading: false,
            error: None,
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Switch the model used for subsequent submissions.
    pub fn select_model(&mut self, model: Model) {
        self.model = model;
    }

    /// Send one user message and append the reply to the transcript.
    ///
    /// The user message is shown immediately; only that single message is
    /// sent, never the transcript history. Any failure becomes a visible
    /// assistant-authored message and the session stays usable.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() || self.loading {
            return SubmitOutcome::Skipped;
        }

        self.messages.push(Message {
            role: Role::User,
            content: text.to_string(),
        });
        self.loading = true;
        self.error = None;

        let sent = [Message {
            role: Role::User,
            content: text.to_string(),
        }];
        let result = self.transport.send_chat(self.model.as_str(), &sent).await;

        let outcome = match result {
            Ok(content) => {
                self.messages.push(Message {
                    role: Role::Assistant,
                    content,
                });
                SubmitOutcome::Answered
            }
            Err(err) => {
                let detail = err.to_string();
                self.messages.push(Message {
                    role: Role::Assistant,
                    content: format!(
                        "Error: {detail}. Please make sure Ollama is running locally and the selected model is installed."
                    ),
                });
                self.error = Some(detail);
                SubmitOutcome::Failed
            }
        };

        self.loading = false;
        outcome
    }

    #[cfg(test)]
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
