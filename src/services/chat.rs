// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Canned exercise assistant.
//!
//! Replies come from a fixed keyword table; the first keyword contained in
//! the message (ignoring case) wins.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const GREETING: &str = "Hola, ¿en qué puedo ayudarte?";
const FALLBACK: &str = "No entendí, pregunta por un ejercicio o rutina.";

const KEYWORD_REPLIES: &[(&str, &str)] = &[
    (
        "prensa",
        "La prensa de piernas fortalece cuadríceps y glúteos; recuerda mantener la espalda pegada.",
    ),
    (
        "sentadilla",
        "La sentadilla trabaja piernas completas y core. Controla la técnica antes del peso.",
    ),
    (
        "cardio",
        "Incluye 20-30 minutos de cardio moderado 3 veces por semana para mejorar resistencia.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    fn bot(text: &str) -> Self {
        Self {
            text: text.to_string(),
            sender: Sender::Bot,
        }
    }
}

/// Reply for a message, without touching any history.
pub fn reply_for(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(FALLBACK, |(_, reply)| *reply)
}

/// Messages kept in the history. Older ones are dropped first.
pub const HISTORY_LIMIT: usize = 200;

/// Conversation with the assistant.
#[derive(Debug, Clone)]
pub struct ChatAssistant {
    history: Vec<ChatMessage>,
}

impl Default for ChatAssistant {
    fn default() -> Self {
        Self {
            history: vec![ChatMessage::bot(GREETING)],
        }
    }
}

impl ChatAssistant {
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send a message. Blank input is ignored and yields `None`.
    pub fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        let reply = reply_for(trimmed);
        self.history.push(ChatMessage {
            text: trimmed.to_string(),
            sender: Sender::User,
        });
        self.history.push(ChatMessage::bot(reply));
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.history.last()
    }
}
