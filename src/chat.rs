use crate::scroll;

/// Delay before a canned reply lands in the transcript.
pub const REPLY_DELAY_MS: u64 = 800;

/// Placeholder bot entry the transcript starts with.
pub const OPENING_PROMPT: &str =
    "Hi! Ask me about the frames on this page, or pick a suggestion below.";

/// Appended the first time the panel opens.
pub const WELCOME_MESSAGE: &str = "Welcome to the cinematic analysis section! I'm here to discuss film techniques, directors, and the art of visual storytelling. What would you like to explore?";

/// Returned when no rule matches.
pub const FALLBACK_REPLY: &str = "Interesting question! I can discuss film techniques, director styles, or what makes scenes memorable. Try asking about specific directors or cinematic methods.";

/// Fixed questions offered as one-tap shortcuts under the transcript.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "What makes a frame cinematic?",
    "Tell me about Tarantino's style",
    "Explain the rule of thirds",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry. Entries are append-only and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MessageEntry {
    pub sender: Sender,
    pub text: String,
}

impl MessageEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// A keyword rule: any listed substring in the lower-cased input selects
/// `reply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

/// Matching rules in priority order. Evaluation is first-match-wins, so
/// the order here is part of the widget's observable behavior.
pub const RESPONSE_RULES: &[ResponseRule] = &[
    ResponseRule {
        keywords: &["cinematic", "frame"],
        reply: "Cinematic frames use composition, lighting, and color to tell stories visually. Key techniques include rule of thirds, leading lines, and strategic depth of field.",
    },
    ResponseRule {
        keywords: &["tarantino"],
        reply: "Tarantino's style features nonlinear storytelling, sharp dialogue, and homages to film genres. He uses unique camera angles and pop culture references.",
    },
    ResponseRule {
        keywords: &["lighting"],
        reply: "Lighting creates mood. High-key reduces shadows, low-key creates drama. Three-point lighting (key, fill, back) is fundamental in cinema.",
    },
    ResponseRule {
        keywords: &["rule of thirds"],
        reply: "The rule of thirds divides the frame into nine sections. Placing subjects along these lines creates balanced, engaging compositions.",
    },
    ResponseRule {
        keywords: &["color"],
        reply: "Color evokes emotions. Warm colors suggest passion, cool colors create calm. Directors use specific palettes as signature elements.",
    },
    ResponseRule {
        keywords: &["camera"],
        reply: "Camera angles shape perspective. Low angles empower, high angles create vulnerability. Each choice communicates emotional information.",
    },
];

/// Picks the canned reply for `text`: lower-cases the input, scans
/// [`RESPONSE_RULES`] in order and returns the first hit, falling back to
/// [`FALLBACK_REPLY`].
pub fn match_response(text: &str) -> &'static str {
    let lowered = text.to_lowercase();

    RESPONSE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|rule| rule.reply)
        .unwrap_or(FALLBACK_REPLY)
}

/// Chat widget state: visibility, the one-shot reveal flag and the
/// transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    visible: bool,
    has_appeared: bool,
    transcript: Vec<MessageEntry>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatState {
    /// Hidden widget with the single placeholder entry.
    pub fn new() -> Self {
        Self {
            visible: false,
            has_appeared: false,
            transcript: vec![MessageEntry::bot(OPENING_PROMPT)],
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the toggle affordance has been revealed.
    pub fn has_appeared(&self) -> bool {
        self.has_appeared
    }

    pub fn transcript(&self) -> &[MessageEntry] {
        &self.transcript
    }

    /// Called on scroll with the anchor section's top edge and the viewport
    /// height. Returns `true` at most once per session: the first time the
    /// anchor crosses the reveal threshold. Sets the flag permanently.
    pub fn evaluate_scroll_trigger(&mut self, anchor_top: f64, viewport_height: f64) -> bool {
        if self.has_appeared {
            return false;
        }

        if scroll::section_revealed(anchor_top, viewport_height) {
            self.has_appeared = true;
            return true;
        }

        false
    }

    /// Flips visibility through [`ChatState::open`] / [`ChatState::close`]
    /// and returns the new state.
    pub fn toggle(&mut self) -> bool {
        if self.visible {
            self.close();
        } else {
            self.open();
        }

        self.visible
    }

    /// Shows the panel. On the very first open, while the transcript still
    /// holds only the placeholder, appends the welcome entry and returns it.
    pub fn open(&mut self) -> Option<&MessageEntry> {
        self.visible = true;

        if self.transcript.len() == 1 {
            self.transcript.push(MessageEntry::bot(WELCOME_MESSAGE));
            return self.transcript.last();
        }

        None
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Appends a user entry for `text` and returns the canned reply the
    /// caller should deliver after [`REPLY_DELAY_MS`]. Empty or
    /// whitespace-only input appends nothing and returns `None`.
    pub fn submit_user_message(&mut self, text: &str) -> Option<&'static str> {
        let message = text.trim();
        if message.is_empty() {
            return None;
        }

        self.transcript.push(MessageEntry::user(message));
        Some(match_response(message))
    }

    /// Appends a bot entry. Used by the UI once the reply delay elapses.
    pub fn push_bot_reply(&mut self, reply: impl Into<String>) {
        self.transcript.push(MessageEntry::bot(reply));
    }
}
