use std::fmt;

/// Protocol state of a rendezvous session.
///
/// The server's session and the client share this machine: the client mirrors
/// the server side so it never sends a request the server would ignore.
///
/// ```text
/// Connecting -> Initializing -> WithoutLobby <-> {HostWithinLobby, PeerWithinLobby}
///                                                         |
///                                                      Closing -> Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Connecting,
    Initializing,
    WithoutLobby,
    HostWithinLobby,
    PeerWithinLobby,
    /// Addresses exchanged, rendezvous connection lingers for a grace window.
    Closing,
    Closed,
}

impl State {
    pub fn within_lobby(self) -> bool {
        matches!(self, State::HostWithinLobby | State::PeerWithinLobby)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            State::Connecting => "connecting",
            State::Initializing => "initializing",
            State::WithoutLobby => "without lobby",
            State::HostWithinLobby => "host within lobby",
            State::PeerWithinLobby => "peer within lobby",
            State::Closing => "closing",
            State::Closed => "closed",
        };
        f.write_str(s)
    }
}
