//! Rendezvous client.
//!
//! [`Client`] mirrors the server side session state, so it only sends requests
//! the server will answer. Once the lobby host says go, both sides know each
//! other's [`AddressInfo`] and call [`Client::connect_peer`] to race a direct
//! connection from the same local endpoint.
//!
//! # example
//! ```no_run
//! use rndz_lobby::client::{Client, RaceConfig};
//!
//! # async fn demo() -> std::io::Result<()> {
//! let mut c = Client::connect("rndz_server:7777", None).await?;
//! if c.join_lobby(1, "").await?.is_some() {
//!     let host = c.wait_for_host().await?;
//!     let stream = c.connect_peer(host, &RaceConfig::default()).await.into_stream();
//! }
//! # Ok(())
//! # }
//! ```

pub mod race;
pub use race::{Outcome, RaceConfig, Strategy};

use crate::address::{encode_endpoint, AddressInfo, LobbyId, PeerId};
use crate::channel::Channel;
use crate::lobby::LobbyInfo;
use crate::proto::rendezvous::{
    request::Kind as ReqKind, response::Kind as RespKind, CreateLobby, Go, Initialization,
    JoinLobby, Leave, LobbyInfo as LobbyInfoMsg, MakeHost, MyAddressInfo, Ping, Request,
    Response,
};
use crate::state::State;
use protobuf::MessageField;
use rand::Rng;
use std::collections::VecDeque;
use std::io::{
    Error,
    ErrorKind::{InvalidData, Interrupted, Other},
    Result,
};
use std::net::SocketAddr;
use tokio::io::AsyncWriteExt;
use tokio::net::{lookup_host, TcpStream};

/// Unsolicited messages pushed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The previous host left or handed over; we host the lobby now.
    BecomeHost(LobbyInfo),
    /// Someone joined or left the lobby.
    LobbyUpdate(LobbyInfo),
    /// The host said go. The rendezvous connection is closing.
    HostAddress(AddressInfo),
}

pub struct Client {
    id: PeerId,
    state: State,
    lobby: Option<LobbyInfo>,
    channel: Channel<TcpStream>,
    local_addr: SocketAddr,
    sample_lobby_ids: Vec<LobbyId>,
    notices: VecDeque<Notice>,
}

impl Client {
    /// Connect with a random peer id.
    ///
    /// if no local address set, choose according server address type(ipv4 or ipv6).
    pub async fn connect(server_addr: &str, local_addr: Option<SocketAddr>) -> Result<Self> {
        let id = rand::thread_rng().gen_range(1..=u64::MAX);
        Self::connect_with_id(server_addr, id, local_addr).await
    }

    pub async fn connect_with_id(
        server_addr: &str,
        id: PeerId,
        local_addr: Option<SocketAddr>,
    ) -> Result<Self> {
        let server_addr = lookup_host(server_addr)
            .await?
            .next()
            .ok_or_else(|| Error::new(Other, "server name resolve fail"))?;

        let bind_addr = local_addr.unwrap_or_else(|| choose_bind_addr(server_addr));
        let stream = race::bind(bind_addr)?.connect(server_addr).await?;
        let local_addr = stream.local_addr()?;

        let mut client = Self {
            id,
            state: State::Connecting,
            lobby: None,
            channel: Channel::new(stream),
            local_addr,
            sample_lobby_ids: Vec::new(),
            notices: VecDeque::new(),
        };
        client.initialize().await?;

        Ok(client)
    }

    pub fn id(&self) -> PeerId {
        self.id
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Last known lobby snapshot.
    pub fn lobby(&self) -> Option<&LobbyInfo> {
        self.lobby.as_ref()
    }

    /// Local endpoint of the rendezvous connection, reused for the peer race.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Lobby ids the server hinted on initialization. They may be gone or full.
    pub fn sample_lobby_ids(&self) -> &[LobbyId] {
        &self.sample_lobby_ids
    }

    async fn initialize(&mut self) -> Result<()> {
        self.state = State::Initializing;

        let mut init = Initialization::new();
        init.peer_id = self.id;
        init.private_endpoint = MessageField::some(encode_endpoint(self.local_addr));
        self.send(ReqKind::Initialization(init)).await?;

        match self.channel.recv::<Response>().await?.kind {
            Some(RespKind::InitializationResult(result)) => {
                self.sample_lobby_ids = result.sample_lobby_ids;
            }
            _ => return Err(Error::new(InvalidData, "expected initialization result")),
        }

        log::debug!("peer {} initialized from {}", self.id, self.local_addr);
        self.state = State::WithoutLobby;
        Ok(())
    }

    pub async fn create_lobby(&mut self, password: &str) -> Result<Option<LobbyId>> {
        self.expect(self.state == State::WithoutLobby, "create lobby")?;

        let mut create = CreateLobby::new();
        create.password = password.to_string();

        match self.request(ReqKind::CreateLobby(create)).await? {
            RespKind::CreateLobbyResult(r) if r.success => {
                let info = match r.lobby.as_ref() {
                    Some(lobby) => LobbyInfo::from(lobby),
                    None => LobbyInfo {
                        id: r.lobby_id,
                        host_id: self.id,
                        capacity: crate::lobby::DEFAULT_CAPACITY,
                        members: vec![self.id],
                    },
                };
                self.state = State::HostWithinLobby;
                self.lobby = Some(info);
                Ok(Some(r.lobby_id))
            }
            RespKind::CreateLobbyResult(_) => Ok(None),
            other => Err(unexpected(other)),
        }
    }

    /// Join a lobby as a non host member. `None` if the lobby is missing, full,
    /// or the password does not match.
    pub async fn join_lobby(&mut self, lobby_id: LobbyId, password: &str) -> Result<Option<LobbyInfo>> {
        self.expect(self.state == State::WithoutLobby, "join lobby")?;

        let mut join = JoinLobby::new();
        join.lobby_id = lobby_id;
        join.password = password.to_string();

        match self.request(ReqKind::JoinLobby(join)).await? {
            RespKind::JoinLobbyResult(r) if r.success => {
                let info = lobby_info(&r.lobby)?;
                self.state = State::PeerWithinLobby;
                self.lobby = Some(info.clone());
                Ok(Some(info))
            }
            RespKind::JoinLobbyResult(r) => {
                log::debug!("join lobby {} failed: {}", lobby_id, r.reason);
                Ok(None)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Our endpoints as the server sees them.
    pub async fn address_info(&mut self) -> Result<AddressInfo> {
        self.expect(self.state == State::WithoutLobby, "query address info")?;

        match self.request(ReqKind::MyAddressInfo(MyAddressInfo::new())).await? {
            RespKind::AddressInfo(info) => AddressInfo::try_from(&info),
            other => Err(unexpected(other)),
        }
    }

    pub async fn leave(&mut self) -> Result<bool> {
        self.expect(self.state.within_lobby(), "leave lobby")?;

        match self.request(ReqKind::Leave(Leave::new())).await? {
            RespKind::LeaveResult(r) => {
                self.state = State::WithoutLobby;
                self.lobby = None;
                Ok(r.success)
            }
            other => Err(unexpected(other)),
        }
    }

    /// Hand the host role to another member.
    pub async fn make_host(&mut self, peer_id: PeerId) -> Result<bool> {
        self.expect(self.state == State::HostWithinLobby, "make host")?;

        let mut make_host = MakeHost::new();
        make_host.peer_id = peer_id;

        match self.request(ReqKind::MakeHost(make_host)).await? {
            RespKind::MakeHostResult(r) if r.success => {
                self.state = State::PeerWithinLobby;
                if let Some(lobby) = self.lobby.as_mut() {
                    lobby.host_id = r.host_id;
                }
                Ok(true)
            }
            RespKind::MakeHostResult(_) => Ok(false),
            other => Err(unexpected(other)),
        }
    }

    /// Start the lobby. Returns the other members' addresses; the rendezvous
    /// connection is closing afterwards.
    pub async fn go(&mut self) -> Result<Option<Vec<AddressInfo>>> {
        self.expect(self.state == State::HostWithinLobby, "start lobby")?;

        match self.request(ReqKind::Go(Go::new())).await? {
            RespKind::GoResult(r) if r.success => {
                self.state = State::Closing;
                self.lobby = None;
                r.peers
                    .iter()
                    .map(AddressInfo::try_from)
                    .collect::<Result<Vec<_>>>()
                    .map(Some)
            }
            RespKind::GoResult(_) => Ok(None),
            other => Err(unexpected(other)),
        }
    }

    pub async fn ping(&mut self, data: u64) -> Result<()> {
        self.expect(self.state != State::Closed, "ping")?;

        let mut ping = Ping::new();
        ping.data = data;
        self.send(ReqKind::Ping(ping)).await
    }

    /// Next notice pushed by the server, including ones that arrived while
    /// waiting for a response.
    pub async fn next_notice(&mut self) -> Result<Notice> {
        loop {
            if let Some(notice) = self.notices.pop_front() {
                return Ok(notice);
            }

            if let Some(reply) = self.read_response().await?.and_then(|k| self.absorb(k)) {
                log::warn!("dropping unsolicited response {:?}", reply);
            }
        }
    }

    /// Wait until the host says go.
    pub async fn wait_for_host(&mut self) -> Result<AddressInfo> {
        loop {
            if let Notice::HostAddress(host) = self.next_notice().await? {
                return Ok(host);
            }
        }
    }

    /// Race a direct connection to `remote` from our rendezvous endpoint.
    pub async fn connect_peer(&self, remote: AddressInfo, config: &RaceConfig) -> Outcome<TcpStream> {
        race::connect(self.local_addr, remote, config).await
    }

    pub async fn close(mut self) -> Result<()> {
        self.state = State::Closed;
        self.channel.into_inner().shutdown().await
    }

    fn expect(&self, allowed: bool, op: &str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(Error::new(
                Other,
                format!("can not {} while {}", op, self.state),
            ))
        }
    }

    async fn send(&mut self, kind: ReqKind) -> Result<()> {
        let mut req = Request::new();
        req.kind = Some(kind);
        self.channel.send(&req).await
    }

    /// Send a request and wait for its response, queueing notices that arrive
    /// in between.
    ///
    /// If the host starts the lobby meanwhile the server drops the request, so
    /// this returns `Interrupted` and the host address is left in the queue.
    async fn request(&mut self, kind: ReqKind) -> Result<RespKind> {
        self.send(kind).await?;

        loop {
            if let Some(reply) = self.read_response().await?.and_then(|k| self.absorb(k)) {
                return Ok(reply);
            }

            if self.state == State::Closing {
                return Err(Error::new(Interrupted, "lobby started by host"));
            }
        }
    }

    async fn read_response(&mut self) -> Result<Option<RespKind>> {
        match self.channel.recv::<Response>().await {
            Ok(resp) => Ok(resp.kind),
            Err(e) if e.kind() == InvalidData => {
                log::warn!("{}, response dropped", e);
                Ok(None)
            }
            Err(e) => {
                self.state = State::Closed;
                Err(e)
            }
        }
    }

    /// Apply and queue notices, hand back anything else.
    fn absorb(&mut self, kind: RespKind) -> Option<RespKind> {
        let notice = match kind {
            RespKind::BecomeHost(n) => match lobby_info(&n.lobby) {
                Ok(info) => {
                    self.state = State::HostWithinLobby;
                    self.lobby = Some(info.clone());
                    Notice::BecomeHost(info)
                }
                Err(e) => {
                    log::warn!("bad become host notice: {}", e);
                    return None;
                }
            },
            RespKind::LobbyUpdate(n) => match lobby_info(&n.lobby) {
                Ok(info) => {
                    if self.lobby.as_ref().map(|l| l.id) == Some(info.id) {
                        self.lobby = Some(info.clone());
                    }
                    Notice::LobbyUpdate(info)
                }
                Err(e) => {
                    log::warn!("bad lobby update: {}", e);
                    return None;
                }
            },
            RespKind::HostAddressInfo(n) => {
                let host = n
                    .host
                    .as_ref()
                    .ok_or_else(|| Error::new(InvalidData, "missing host address"))
                    .and_then(AddressInfo::try_from);
                match host {
                    Ok(host) => {
                        self.state = State::Closing;
                        self.lobby = None;
                        Notice::HostAddress(host)
                    }
                    Err(e) => {
                        log::warn!("bad host address: {}", e);
                        return None;
                    }
                }
            }
            reply => return Some(reply),
        };

        log::debug!("notice {:?}", notice);
        self.notices.push_back(notice);
        None
    }
}

fn choose_bind_addr(server_addr: SocketAddr) -> SocketAddr {
    match server_addr {
        SocketAddr::V4(_) => ([0, 0, 0, 0], 0).into(),
        SocketAddr::V6(_) => ([0u16; 8], 0).into(),
    }
}

fn lobby_info(msg: &MessageField<LobbyInfoMsg>) -> Result<LobbyInfo> {
    msg.as_ref()
        .map(LobbyInfo::from)
        .ok_or_else(|| Error::new(InvalidData, "missing lobby info"))
}

fn unexpected(kind: RespKind) -> Error {
    Error::new(InvalidData, format!("unexpected response {:?}", kind))
}
