//! Access to the session identifier recorded with each lead source.

use tower_sessions::session::Id;
use tower_sessions::Session;

/// Something that can report the key of the browser session it belongs to.
///
/// `None` means there is no session yet, which is stored as an empty string.
pub trait SessionKey {
    fn session_key(&self) -> Option<String>;
}

/// The id is only assigned once the session has been saved, so a brand-new
/// session reports `None`.
impl SessionKey for Session {
    fn session_key(&self) -> Option<String> {
        self.id().map(|id| id.to_string())
    }
}

impl SessionKey for Id {
    fn session_key(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl SessionKey for str {
    fn session_key(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl SessionKey for String {
    fn session_key(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: SessionKey> SessionKey for Option<T> {
    fn session_key(&self) -> Option<String> {
        self.as_ref().and_then(SessionKey::session_key)
    }
}

impl<T: SessionKey + ?Sized> SessionKey for &T {
    fn session_key(&self) -> Option<String> {
        (**self).session_key()
    }
}
