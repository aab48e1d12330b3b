//! Application layer containing the conversation logic.
//!
//! This module defines the `ConversationEngine`, the single entry point for
//! inbound chat messages. It drives the per-user purchase state machine and
//! talks to the catalog, session store, payment gateway and outbound
//! transport through their ports.

pub mod engine;
pub mod reply;
