//! Session bookkeeping for the chat front-end.
//!
//! The chat transport itself is the vendor's problem; what the front-end
//! owns is the bookkeeping around it: a bounded history window, streamed
//! text accumulation, and mapping cited documents to their companion
//! images. This module implements that bookkeeping as plain value types
//! with no I/O beyond an image existence check.

mod history;
mod references;
mod transcript;

pub use history::{ChatHistory, ChatRole, ChatTurn, DEFAULT_HISTORY_WINDOW};
pub use references::{DocReference, image_file_name, resolve_image};
pub use transcript::{StreamAccumulator, Transcript};
