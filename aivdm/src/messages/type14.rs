use crate::bits::AisText;

message_view! {
    /// Safety related broadcast message (type 14).
    SafetyBroadcastMessage
}

impl<'a> SafetyBroadcastMessage<'a> {
    pub fn text(&self) -> AisText<'a> {
        self.bits.text(40, self.bits.bit_len().saturating_sub(40) / 6)
    }
}
