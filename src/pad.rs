//! Wordpads: the backend's free-form text documents
//!
//! They are ordinary user documents on the backend side; the provider doubles
//! as a consumer, using two well-known pads as its persistence slot.

use serde::{Deserialize, Serialize};

/// The identifier of a pad, as minted by the backend
pub type PadId = String;

/// A named text document the backend stores.
/// Its actual text is a separate content record, fetched and stored by pad id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    id: PadId,
    title: String,
}

impl Pad {
    pub fn new(id: PadId, title: String) -> Self {
        Self { id, title }
    }

    pub fn id(&self) -> &str    { &self.id }
    pub fn title(&self) -> &str { &self.title }
}
