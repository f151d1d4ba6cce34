//! Fluent setters for `ConnectionBuilder`.

use super::core::ConnectionBuilder;

impl ConnectionBuilder {
    /// User name presented to the broker.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config = self.config.with_username(username);
        self
    }

    /// Password presented to the broker.
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config = self.config.with_password(password);
        self
    }

    /// Virtual host selected on the broker.
    #[must_use]
    pub fn virtual_host(mut self, virtual_host: impl Into<String>) -> Self {
        self.config = self.config.with_virtual_host(virtual_host);
        self
    }

    /// Requested maximum channel number; zero for unlimited.
    #[must_use]
    pub fn channel_max(mut self, channel_max: u16) -> Self {
        self.config = self.config.with_channel_max(channel_max);
        self
    }

    /// Requested maximum frame size in octets; zero for unlimited.
    #[must_use]
    pub fn frame_max(mut self, frame_max: u32) -> Self {
        self.config = self.config.with_frame_max(frame_max);
        self
    }

    /// Requested heartbeat interval in seconds; zero for none.
    #[must_use]
    pub fn heartbeat(mut self, heartbeat: u16) -> Self {
        self.config = self.config.with_heartbeat(heartbeat);
        self
    }

    /// Redirect hops tolerated per address during establishment.
    #[must_use]
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}
