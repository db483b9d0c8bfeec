use super::{registry::Registry, ServerConfig};
use crate::address::{decode_endpoint_field, AddressInfo, LobbyId, PeerId};
use crate::channel::Channel;
use crate::lobby::LobbyInfo;
use crate::proto::rendezvous::{
    request::Kind as ReqKind, response::Kind as RespKind, AddressInfo as AddressInfoMsg,
    BecomeHost, CreateLobbyResult, GoResult, HostAddressInfo, InitializationResult,
    JoinLobbyResult, LeaveResult, LobbyUpdate, MakeHostResult, Request, Response,
};
use crate::state::State;
use protobuf::MessageField;
use socket2::{SockRef, TcpKeepalive};
use std::io::{Error, ErrorKind::InvalidData, ErrorKind::Other, Result};
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::{interval_at, sleep, Instant};
use tokio::{pin, select};

/// State changes and notifications posted to a session by other sessions.
#[derive(Debug)]
pub(crate) enum Control {
    BecomeHost(LobbyInfo),
    LobbyUpdate(LobbyInfo),
    /// The host started the lobby; carries the host's address.
    Go(LobbyId, AddressInfo),
    Shutdown,
}

enum Event {
    Control(Control),
    Request(ReqKind),
    Idle,
    Disconnected,
}

pub(crate) struct Session {
    serial: u64,
    peer_id: PeerId,
    state: State,
    channel: Channel<TcpStream>,
    info: Option<AddressInfo>,
    lobby: Option<LobbyId>,
    registry: Arc<Registry>,
    config: Arc<ServerConfig>,
}

impl Session {
    pub(crate) fn new(
        stream: TcpStream,
        serial: u64,
        registry: Arc<Registry>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            serial,
            peer_id: 0,
            state: State::Connecting,
            channel: Channel::new(stream),
            info: None,
            lobby: None,
            registry,
            config,
        }
    }

    pub(crate) async fn run(mut self) {
        let (tx, mut mailbox) = unbounded_channel();

        match self.initialize().await {
            Ok(info) => {
                self.registry.register(self.serial, info, tx);
                self.state = State::WithoutLobby;
                log::debug!("[{}] session established from {}", self.peer_id, info.public);
            }
            Err(e) => {
                log::debug!("session {} initialization failed: {}", self.serial, e);
                return;
            }
        }

        if let Err(e) = self.serve(&mut mailbox).await {
            log::debug!("[{}] session ended: {}", self.peer_id, e);
        }

        self.state = State::Closed;
        self.registry
            .unregister(self.peer_id, self.serial, self.lobby.take());
        log::debug!("[{}] disconnect", self.peer_id);
    }

    async fn initialize(&mut self) -> Result<AddressInfo> {
        self.state = State::Initializing;

        let stream = self.channel.get_ref();
        let public = stream.peer_addr()?;
        let keepalive = TcpKeepalive::new().with_time(self.config.keepalive);
        SockRef::from(stream).set_tcp_keepalive(&keepalive)?;

        let init = match self.channel.recv::<Request>().await?.kind {
            Some(ReqKind::Initialization(init)) => init,
            _ => return Err(Error::new(InvalidData, "expected initialization")),
        };

        let info = AddressInfo {
            peer_id: init.peer_id,
            public,
            private: decode_endpoint_field(&init.private_endpoint)?,
        };
        self.peer_id = info.peer_id;
        self.info = Some(info);

        let mut result = InitializationResult::new();
        result.sample_lobby_ids = self.registry.sample_lobby_ids(self.config.lobby_sample);
        self.send_response(RespKind::InitializationResult(result))
            .await?;

        Ok(info)
    }

    fn address_info(&self) -> Result<AddressInfo> {
        self.info
            .ok_or_else(|| Error::new(Other, "session not initialized"))
    }

    async fn serve(&mut self, mailbox: &mut UnboundedReceiver<Control>) -> Result<()> {
        while self.state != State::Closed {
            if self.state == State::Closing {
                self.linger(mailbox).await;
                break;
            }

            match self.next_event(mailbox).await {
                Event::Control(ctl) => self.apply(ctl).await?,
                Event::Request(req) => self.dispatch(req).await?,
                Event::Idle => {}
                Event::Disconnected => self.state = State::Closed,
            }
        }

        Ok(())
    }

    /// Wait for whichever comes first: a control message, a request, or a
    /// liveness probe finding the connection dead.
    ///
    /// A control message cancels the pending read. The channel keeps any
    /// partial frame, so the next read resumes the same frame.
    async fn next_event(&mut self, mailbox: &mut UnboundedReceiver<Control>) -> Event {
        let period = self.config.liveness_interval;
        let mut probe = interval_at(Instant::now() + period, period);

        loop {
            select! {
                biased;

                ctl = mailbox.recv() => {
                    return match ctl {
                        Some(ctl) => Event::Control(ctl),
                        None => Event::Disconnected,
                    };
                }

                req = self.channel.recv::<Request>() => {
                    return match req {
                        Ok(Request { kind: Some(kind), .. }) => Event::Request(kind),
                        Ok(_) => {
                            log::warn!("[{}] empty request dropped", self.peer_id);
                            Event::Idle
                        }
                        Err(e) if e.kind() == InvalidData => {
                            log::warn!("[{}] {}, request dropped", self.peer_id, e);
                            Event::Idle
                        }
                        Err(e) => {
                            log::debug!("[{}] read failed: {}", self.peer_id, e);
                            Event::Disconnected
                        }
                    };
                }

                _ = probe.tick() => {
                    if !self.is_alive() {
                        log::debug!("[{}] liveness probe failed", self.peer_id);
                        return Event::Disconnected;
                    }
                    log::trace!("[{}] idle", self.peer_id);
                }
            }
        }
    }

    fn is_alive(&self) -> bool {
        matches!(self.channel.get_ref().take_error(), Ok(None))
    }

    async fn apply(&mut self, ctl: Control) -> Result<()> {
        match ctl {
            Control::BecomeHost(info) => {
                if self.lobby != Some(info.id) {
                    return Ok(());
                }
                log::debug!("[{}] became host of lobby {}", self.peer_id, info.id);
                self.state = State::HostWithinLobby;

                let mut notice = BecomeHost::new();
                notice.lobby = MessageField::some((&info).into());
                self.send_response(RespKind::BecomeHost(notice)).await
            }
            Control::LobbyUpdate(info) => {
                if self.lobby != Some(info.id) {
                    return Ok(());
                }

                let mut notice = LobbyUpdate::new();
                notice.lobby = MessageField::some((&info).into());
                self.send_response(RespKind::LobbyUpdate(notice)).await
            }
            Control::Go(id, host) => {
                if self.lobby != Some(id) {
                    log::debug!("[{}] ignoring go for lobby {}", self.peer_id, id);
                    return Ok(());
                }
                log::debug!("[{}] lobby started by {}", self.peer_id, host.peer_id);
                self.lobby = None;
                self.state = State::Closing;

                let mut notice = HostAddressInfo::new();
                notice.host = MessageField::some(host.into());
                self.send_response(RespKind::HostAddressInfo(notice)).await
            }
            Control::Shutdown => {
                self.state = State::Closed;
                Ok(())
            }
        }
    }

    async fn dispatch(&mut self, req: ReqKind) -> Result<()> {
        if let ReqKind::Ping(ping) = req {
            log::trace!("[{}] ping 0x{:x}", self.peer_id, ping.data);
            return Ok(());
        }

        match self.state {
            State::WithoutLobby => self.handle_without_lobby(req).await,
            State::PeerWithinLobby => self.handle_as_peer(req).await,
            State::HostWithinLobby => self.handle_as_host(req).await,
            _ => {
                self.unexpected(&req);
                Ok(())
            }
        }
    }

    fn unexpected(&self, req: &ReqKind) {
        log::warn!(
            "[{}] unexpected request while {}: {:?}",
            self.peer_id,
            self.state,
            req
        );
    }

    async fn handle_without_lobby(&mut self, req: ReqKind) -> Result<()> {
        match req {
            ReqKind::CreateLobby(create) => {
                let mut result = CreateLobbyResult::new();
                let created = self
                    .registry
                    .create_lobby(self.peer_id, &create.password)
                    .and_then(|id| self.registry.lobby(id));
                if let Some(info) = created {
                    log::debug!("[{}] created lobby {}", self.peer_id, info.id);
                    self.lobby = Some(info.id);
                    self.state = State::HostWithinLobby;
                    result.success = true;
                    result.lobby_id = info.id;
                    result.lobby = MessageField::some((&info).into());
                }
                self.send_response(RespKind::CreateLobbyResult(result))
                    .await
            }
            ReqKind::JoinLobby(join) => {
                let mut result = JoinLobbyResult::new();
                match self
                    .registry
                    .join_lobby(join.lobby_id, self.peer_id, &join.password)
                {
                    Ok(info) => {
                        log::debug!("[{}] joined lobby {}", self.peer_id, info.id);
                        self.lobby = Some(info.id);
                        self.state = State::PeerWithinLobby;
                        result.success = true;
                        result.lobby = MessageField::some((&info).into());
                    }
                    Err(e) => {
                        log::debug!("[{}] join lobby {}: {}", self.peer_id, join.lobby_id, e);
                        result.reason = e.to_string();
                    }
                }
                self.send_response(RespKind::JoinLobbyResult(result))
                    .await
            }
            ReqKind::MyAddressInfo(_) => {
                let info = self.address_info()?;
                self.send_response(RespKind::AddressInfo(info.into()))
                    .await
            }
            req => {
                self.unexpected(&req);
                Ok(())
            }
        }
    }

    async fn handle_as_peer(&mut self, req: ReqKind) -> Result<()> {
        match req {
            ReqKind::Leave(_) => self.handle_leave().await,
            req => {
                self.unexpected(&req);
                Ok(())
            }
        }
    }

    async fn handle_as_host(&mut self, req: ReqKind) -> Result<()> {
        match req {
            ReqKind::Leave(_) => self.handle_leave().await,
            ReqKind::MakeHost(make_host) => {
                let mut result = MakeHostResult::new();
                let target = make_host.peer_id;
                let info = self
                    .lobby
                    .and_then(|id| self.registry.make_host(id, self.peer_id, target));
                if let Some(info) = info {
                    log::debug!("[{}] handed lobby {} to {}", self.peer_id, info.id, target);
                    self.state = State::PeerWithinLobby;
                    result.success = true;
                    result.host_id = info.host_id;
                }
                self.send_response(RespKind::MakeHostResult(result))
                    .await
            }
            ReqKind::Go(_) => {
                let host = self.address_info()?;
                let mut result = GoResult::new();
                if let Some(peers) = self
                    .lobby
                    .and_then(|id| self.registry.start_lobby(id, host))
                {
                    self.lobby = None;
                    self.state = State::Closing;
                    result.success = true;
                    result.peers = peers.into_iter().map(AddressInfoMsg::from).collect();
                }
                self.send_response(RespKind::GoResult(result)).await
            }
            req => {
                self.unexpected(&req);
                Ok(())
            }
        }
    }

    async fn handle_leave(&mut self) -> Result<()> {
        let mut result = LeaveResult::new();
        if let Some(id) = self.lobby.take() {
            result.success = self.registry.leave_lobby(id, self.peer_id);
            log::debug!("[{}] left lobby {}", self.peer_id, id);
        }
        self.state = State::WithoutLobby;

        self.send_response(RespKind::LeaveResult(result)).await
    }

    /// Keep the connection open for the grace window so both peers can race
    /// before the rendezvous connection goes away. Requests are discarded.
    async fn linger(&mut self, mailbox: &mut UnboundedReceiver<Control>) {
        log::debug!(
            "[{}] closing in {:?}",
            self.peer_id,
            self.config.closing_grace
        );

        let deadline = sleep(self.config.closing_grace);
        pin!(deadline);

        loop {
            select! {
                _ = &mut deadline => break,
                ctl = mailbox.recv() => match ctl {
                    Some(Control::Shutdown) | None => break,
                    Some(_) => {}
                },
                req = self.channel.recv::<Request>() => match req {
                    Ok(req) => log::debug!("[{}] ignoring request while closing: {:?}", self.peer_id, req),
                    Err(e) if e.kind() == InvalidData => {}
                    Err(_) => break,
                },
            }
        }

        self.state = State::Closed;
    }

    async fn send_response(&mut self, kind: RespKind) -> Result<()> {
        let mut resp = Response::new();
        resp.kind = Some(kind);
        self.channel.send(&resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    async fn session(lobby: Option<LobbyId>, state: State) -> (Session, Channel<TcpStream>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let peer = TcpStream::connect(listener.local_addr().unwrap())
            .await
            .unwrap();
        let (stream, _) = listener.accept().await.unwrap();

        let mut s = Session::new(
            stream,
            1,
            Arc::new(Registry::new(2)),
            Arc::new(ServerConfig::default()),
        );
        s.peer_id = 5;
        s.lobby = lobby;
        s.state = state;
        (s, Channel::new(peer))
    }

    fn host() -> AddressInfo {
        AddressInfo {
            peer_id: 1,
            public: ([1, 2, 3, 4], 5000).into(),
            private: ([10, 0, 0, 1], 5000).into(),
        }
    }

    #[tokio::test]
    async fn test_go_for_another_lobby_is_ignored() {
        let (mut s, mut peer) = session(Some(2), State::HostWithinLobby).await;

        s.apply(Control::Go(1, host())).await.unwrap();
        assert_eq!(s.state, State::HostWithinLobby);
        assert_eq!(s.lobby, Some(2));

        s.apply(Control::Go(2, host())).await.unwrap();
        assert_eq!(s.state, State::Closing);
        assert_eq!(s.lobby, None);

        // only the matching go reached the wire
        match peer.recv::<Response>().await.unwrap().kind {
            Some(RespKind::HostAddressInfo(n)) => assert_eq!(n.host.peer_id, 1),
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_notices_for_another_lobby_are_ignored() {
        let (mut s, _peer) = session(Some(2), State::PeerWithinLobby).await;
        let other = LobbyInfo {
            id: 1,
            host_id: 5,
            capacity: 2,
            members: vec![5],
        };

        s.apply(Control::BecomeHost(other.clone())).await.unwrap();
        s.apply(Control::LobbyUpdate(other)).await.unwrap();
        assert_eq!(s.state, State::PeerWithinLobby);
        assert_eq!(s.lobby, Some(2));
    }
}
