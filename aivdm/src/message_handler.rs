use crate::stream_reader::ParsedMessage;

/// Trait for components that consume decoded AIS messages
///
/// Every handler sees every message and picks what it is interested in,
/// so the input loop does not need to know about individual consumers.
pub trait MessageHandler {
    fn handle_message(&mut self, message: &ParsedMessage<'_>);
}
