pub mod chat;
pub mod demo;
pub mod film;
pub mod game;
pub mod page;
pub mod scroll;
pub mod wasm;

pub use chat::{
    ChatState, FALLBACK_REPLY, MessageEntry, REPLY_DELAY_MS, RESPONSE_RULES, SUGGESTED_QUESTIONS,
    Sender, WELCOME_MESSAGE, match_response,
};
pub use demo::demo_stills;
pub use film::{FilmStill, ShotAnalysis};
pub use game::{
    ADVANCE_DELAY_MS, AnswerReport, GameError, GameSession, OPTION_COUNT, OptionMark, Verdict,
};
pub use page::PageError;
