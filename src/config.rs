#[derive(Debug, Clone)]
pub struct RentalConfig {
    pub port: Option<u16>,
    pub host: String,
}

impl RentalConfig {
    pub fn new() -> Self {
        Self {
            port: Some(3000),
            host: "127.0.0.1".to_string(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Binds to an ephemeral port chosen by the OS. Useful in tests.
    pub fn ephemeral_port(mut self) -> Self {
        self.port = None;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self::new()
    }
}
