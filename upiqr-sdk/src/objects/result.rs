use serde::{Deserialize, Serialize};

/// A rendered QR code together with the intent URI it encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpiQrResult {
    /// The artifact, in the format selected by the output type.
    pub qr: String,
    /// The `upi://pay` URI that was encoded.
    pub intent: String,
}
