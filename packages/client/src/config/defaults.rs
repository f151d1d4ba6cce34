//! Default values for `ConnectionConfig`.

use super::types::ConnectionConfig;

/// Default user name.
pub const DEFAULT_USER: &str = "guest";

/// Default password.
pub const DEFAULT_PASS: &str = "guest";

/// Default virtual host.
pub const DEFAULT_VHOST: &str = "/";

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_USER.to_string(),
            password: DEFAULT_PASS.to_string(),
            virtual_host: DEFAULT_VHOST.to_string(),
            channel_max: 0,
            frame_max: 0,
            heartbeat: 0,
        }
    }
}
