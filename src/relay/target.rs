//! Forwarding target.

/// Where data payloads go for the lifetime of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayTarget {
    forward_url: Option<String>,
}

impl RelayTarget {
    /// Target built from an optional URL; empty strings mean no URL.
    pub fn new(forward_url: Option<String>) -> Self {
        Self {
            forward_url: forward_url.filter(|u| !u.trim().is_empty()),
        }
    }

    /// Print payloads to the console.
    pub fn console() -> Self {
        Self::default()
    }

    /// POST payloads to `url`.
    pub fn forward_to(url: impl Into<String>) -> Self {
        Self::new(Some(url.into()))
    }

    pub fn forward_url(&self) -> Option<&str> {
        self.forward_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_console() {
        assert_eq!(RelayTarget::new(Some(String::new())), RelayTarget::console());
        assert_eq!(RelayTarget::new(None).forward_url(), None);
    }

    #[test]
    fn test_forward_to() {
        let target = RelayTarget::forward_to("http://localhost:3000/webhook");
        assert_eq!(target.forward_url(), Some("http://localhost:3000/webhook"));
    }
}
