//! Chat state machine.
//!
//! [`state::ChatState`] is the single source of truth for the chat view:
//! session list, current session, message history, and the streaming flag.

pub mod state;
