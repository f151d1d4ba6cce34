//! Core connection configuration structure and field definitions.

/// Broker connection configuration
///
/// Constructed once by the caller and read-only while a connection is being
/// established. Credentials and limits are carried to the handshake verbatim;
/// zero means "unlimited" for the maxima and "none" for the heartbeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// User name presented during handshake authentication
    pub username: String,

    /// Password presented during handshake authentication
    pub password: String,

    /// Virtual host to select on the broker
    pub virtual_host: String,

    /// Requested maximum channel number; zero for unlimited
    pub channel_max: u16,

    /// Requested maximum frame size, in octets; zero for unlimited
    pub frame_max: u32,

    /// Requested heartbeat interval, in seconds; zero for none
    pub heartbeat: u16,
}
