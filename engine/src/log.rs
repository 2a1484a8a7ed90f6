//! Append-only message log. Every event carries two phrasings and the
//! symbol of the entity it happened to; rendering picks the right phrase
//! and tidies it up.

use crate::catalog::PLAYER_SYMBOL;

#[derive(Debug, Clone)]
pub struct Message {
    /// Symbol of the entity the message is about.
    pub actor: char,
    pub for_player: String,
    pub for_dragon: String,
}

#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        actor: char,
        for_player: impl Into<String>,
        for_dragon: impl Into<String>,
    ) {
        self.entries.push(Message {
            actor,
            for_player: for_player.into(),
            for_dragon: for_dragon.into(),
        });
    }

    pub fn entries(&self) -> &[Message] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Last `n` messages, phrased for whoever they happened to, with the
    /// first letter capitalized and terminal punctuation ensured.
    pub fn rendered_tail(&self, n: usize) -> Vec<String> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries[skip..]
            .iter()
            .map(|m| {
                let raw = if m.actor == PLAYER_SYMBOL {
                    &m.for_player
                } else {
                    &m.for_dragon
                };
                polish(raw)
            })
            .collect()
    }

    /// Every message, rendered. Used by headless simulation reports.
    pub fn rendered_all(&self) -> Vec<String> {
        self.rendered_tail(self.entries.len())
    }
}

fn polish(message: &str) -> String {
    let mut out = String::with_capacity(message.len() + 1);
    let mut chars = message.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    if !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    out
}
