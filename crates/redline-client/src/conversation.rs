//! Client-owned conversation history.

use redline_ai::Turn;

/// Streaming phase of the newest exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StreamingState {
    #[default]
    Idle,
    Streaming,
}

/// Conversation history held in page-local state.
///
/// The full history is resent to the server on every exchange; the server
/// keeps no session state. The append-vs-mutate decision for streamed
/// assistant text is an explicit two-state machine: the first fragment of
/// an exchange appends the assistant turn, every later fragment mutates
/// that same slot, so the list grows by exactly one entry per exchange
/// regardless of how many chunks arrive.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    turns: Vec<Turn>,
    state: StreamingState,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_streaming(&self) -> bool {
        self.state == StreamingState::Streaming
    }

    /// Append the next user turn. Seals any in-progress assistant turn first.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.finish_exchange();
        self.turns.push(Turn::user(content));
    }

    /// Publish the accumulated assistant text for the in-flight exchange.
    pub fn apply_assistant_text(&mut self, accumulated: &str) {
        match self.state {
            StreamingState::Idle => {
                self.turns.push(Turn::assistant(accumulated));
                self.state = StreamingState::Streaming;
            }
            StreamingState::Streaming => {
                if let Some(last) = self.turns.last_mut() {
                    last.content = accumulated.to_string();
                }
            }
        }
    }

    /// Seal the in-flight assistant turn, ending the exchange.
    pub fn finish_exchange(&mut self) {
        self.state = StreamingState::Idle;
    }

    /// Append a completed assistant turn, e.g. a synthesized error message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.finish_exchange();
        self.turns.push(Turn::assistant(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redline_ai::Role;

    #[test]
    fn one_exchange_produces_exactly_one_assistant_entry() {
        let mut conversation = Conversation::new();
        conversation.push_user("hello");

        let mut accumulated = String::new();
        for fragment in ["Hel", "lo", " world"] {
            accumulated.push_str(fragment);
            conversation.apply_assistant_text(&accumulated);
        }
        conversation.finish_exchange();

        let turns = conversation.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, "Hello world");
    }

    #[test]
    fn next_exchange_appends_a_fresh_assistant_entry() {
        let mut conversation = Conversation::new();
        conversation.push_user("first");
        conversation.apply_assistant_text("answer one");
        conversation.finish_exchange();

        conversation.push_user("second");
        conversation.apply_assistant_text("answer two");
        conversation.finish_exchange();

        let contents: Vec<&str> = conversation
            .turns()
            .iter()
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(contents, ["first", "answer one", "second", "answer two"]);
    }

    #[test]
    fn pushing_a_user_turn_seals_an_unfinished_exchange() {
        let mut conversation = Conversation::new();
        conversation.push_user("question");
        conversation.apply_assistant_text("interrupted answ");

        conversation.push_user("follow-up");
        conversation.apply_assistant_text("fresh answer");

        assert_eq!(conversation.turns().len(), 4);
        assert_eq!(conversation.turns()[1].content, "interrupted answ");
        assert_eq!(conversation.turns()[3].content, "fresh answer");
    }

    #[test]
    fn rewriting_the_final_text_mutates_the_same_slot() {
        let mut conversation = Conversation::new();
        conversation.push_user("question");
        conversation.apply_assistant_text("Answer.\n---SUGGESTIONS---\n1. Next?");
        conversation.apply_assistant_text("Answer.");
        conversation.finish_exchange();

        assert_eq!(conversation.turns().len(), 2);
        assert_eq!(conversation.turns()[1].content, "Answer.");
    }
}
