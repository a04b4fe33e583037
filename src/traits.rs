use std::error::Error;

use async_trait::async_trait;

use crate::pad::{Pad, PadId};

/// The narrow view of a backend the provider works against: somewhere that
/// stores pads and their text content.
///
/// [`crate::client::Client`] implements this against the live REST service;
/// tests implement it over plain in-memory maps.
#[async_trait]
pub trait PadSource {
    /// Returns every pad this source currently holds
    /// This function can be a long process (e.g. a network round trip), and it can fail
    async fn get_pads(&self) -> Result<Vec<Pad>, Box<dyn Error>>;

    /// Create a brand new pad, with no content yet, and return it (carrying the id the source minted)
    async fn create_pad(&mut self, title: &str) -> Result<Pad, Box<dyn Error>>;

    /// Returns the text content of this pad
    /// (or `None` in case this pad has no content record yet)
    async fn get_pad_content(&self, id: &str) -> Result<Option<String>, Box<dyn Error>>;

    /// Overwrite the text content of this pad
    async fn set_pad_content(&mut self, id: &str, content: &str) -> Result<(), Box<dyn Error>>;
}

/// Convenience: find a pad by its title, first match wins
pub async fn find_pad_by_title<S: PadSource + ?Sized>(source: &S, title: &str) -> Result<Option<PadId>, Box<dyn Error>> {
    let pads = source.get_pads().await?;
    Ok(pads.into_iter()
        .find(|pad| pad.title() == title)
        .map(|pad| pad.id().to_string()))
}
