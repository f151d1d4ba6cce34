//! Fluent setters for `ConnectionConfig`.

use super::types::ConnectionConfig;

impl ConnectionConfig {
    /// Configuration with the stock defaults (guest/guest on `/`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user name presented to the broker.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the password presented to the broker.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the virtual host selected on the broker.
    #[must_use]
    pub fn with_virtual_host(mut self, virtual_host: impl Into<String>) -> Self {
        self.virtual_host = virtual_host.into();
        self
    }

    /// Set the requested maximum channel number; zero for unlimited.
    #[must_use]
    pub fn with_channel_max(mut self, channel_max: u16) -> Self {
        self.channel_max = channel_max;
        self
    }

    /// Set the requested maximum frame size in octets; zero for unlimited.
    #[must_use]
    pub fn with_frame_max(mut self, frame_max: u32) -> Self {
        self.frame_max = frame_max;
        self
    }

    /// Set the requested heartbeat interval in seconds; zero for none.
    #[must_use]
    pub fn with_heartbeat(mut self, heartbeat: u16) -> Self {
        self.heartbeat = heartbeat;
        self
    }
}
