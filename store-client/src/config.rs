//! Client configuration

use std::path::PathBuf;

/// Client configuration for connecting to the store server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:4000")
    pub base_url: String,

    /// Cart identifier sent with every cart operation
    ///
    /// The server requires an explicit cart id; the `"guest"` default lives
    /// here, at the outermost caller, and nowhere deeper in the stack.
    pub cart_id: String,

    /// Directory for the durable order cache; `None` disables caching
    pub cache_dir: Option<PathBuf>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            cart_id: "guest".to_string(),
            cache_dir: None,
            timeout: 30,
        }
    }

    /// Set the cart identifier
    pub fn with_cart_id(mut self, cart_id: impl Into<String>) -> Self {
        self.cart_id = cart_id.into();
        self
    }

    /// Enable the durable order cache under the given directory
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000")
    }
}
