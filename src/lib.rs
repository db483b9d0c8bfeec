//!A lobby based rendezvous protocol to help two peers behind NAT connect directly over tcp.
//!
//!Neither peer can know in advance which way through the NATs will work, so both sides
//!learn each other's addresses from a rendezvous server, then race every way they know at once.
//!
//!## How it works
//!Setup a public accessable server as rendezvous point. Each peer keeps a tcp connection to it,
//!reports its own (private) endpoint, and the server observes its public one.
//!
//!Peers meet in a lobby. One peer creates it and becomes the host, others join by lobby id.
//!When the host says go, the server sends every member the host's addresses and the host
//!every member's addresses, then tears the lobby down. The rendezvous connections linger a
//!little longer, so the nat rules they created stay open.
//!
//!Both peers then race, from the same local port they used to talk to the server:
//!connecting to the peer's private endpoint, connecting to its public endpoint, and accepting
//!the peer's own connect. The first one to succeed is returned as a [`tokio::net::TcpStream`].
//!
//!The implementation depends on socket option SO_REUSE_ADDR and SO_REUSE_PORT, so it is OS depends.
//!The OS should allow listening socket and connecting socket bind to the same port.
//!
//!## Feature flags
//!- `client`: rendezvous client and connection race
//!- `server`: rendezvous server

#[doc(hidden)]
pub mod proto;

pub mod address;
pub mod channel;
pub mod lobby;
pub mod state;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "server")]
pub mod server;

pub use address::{AddressInfo, LobbyId, PeerId};
pub use state::State;
