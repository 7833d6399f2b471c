use crate::Result;

/// A request/reply channel to the compositor.
///
/// Implementations open whatever connection they need per call; no state
/// is shared between requests.
pub trait Transport {
    /// Send one framed payload and return the raw textual reply.
    fn request(&self, payload: &str) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(&self, payload: &str) -> Result<String> {
        (**self).request(payload)
    }
}
