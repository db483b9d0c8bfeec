//! Lobby flow tests against a server on loopback.

use rndz_lobby::channel::Channel;
use rndz_lobby::client::{Client, Notice, Outcome, RaceConfig};
use rndz_lobby::proto::rendezvous::{
    request::Kind as ReqKind, response::Kind as RespKind, Endpoint, Go, Initialization, JoinLobby,
    Leave, MyAddressInfo, Request, Response,
};
use rndz_lobby::server::{Registry, Server, ServerConfig};
use rndz_lobby::State;
use std::io::ErrorKind;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::time::{sleep, timeout};

async fn start_server(config: ServerConfig) -> (String, Arc<Registry>) {
    let server = Server::with_config("127.0.0.1:0", config)
        .await
        .expect("bind server");
    let addr = server.local_addr().unwrap().to_string();
    let registry = server.registry();
    tokio::spawn(server.run());
    (addr, registry)
}

async fn peer(server: &str, id: u64) -> Client {
    Client::connect_with_id(server, id, None)
        .await
        .expect("connect client")
}

/// Initialized session driven over a bare channel.
async fn raw_peer(server: &str, id: u64) -> Channel<TcpStream> {
    let stream = TcpStream::connect(server).await.unwrap();
    let local = stream.local_addr().unwrap();
    let mut ch = Channel::new(stream);

    let mut init = Initialization::new();
    init.peer_id = id;
    init.private_endpoint = protobuf::MessageField::some(Endpoint {
        address: vec![127, 0, 0, 1],
        port: local.port() as u32,
        ..Default::default()
    });
    send(&mut ch, ReqKind::Initialization(init)).await;
    match ch.recv::<Response>().await.unwrap().kind {
        Some(RespKind::InitializationResult(_)) => {}
        other => panic!("unexpected response {:?}", other),
    }

    ch
}

async fn send(ch: &mut Channel<TcpStream>, kind: ReqKind) {
    let mut req = Request::new();
    req.kind = Some(kind);
    ch.send(&req).await.unwrap();
}

async fn wait_until(what: &str, check: impl Fn() -> bool) {
    for _ in 0..100 {
        if check() {
            return;
        }
        sleep(Duration::from_millis(20)).await;
    }
    panic!("timed out waiting until {}", what);
}

/// Create, join, go: both sides learn each other's addresses.
#[tokio::test]
async fn test_create_join_go() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;
    let mut b = peer(&server, 2).await;
    assert_eq!(a.state(), State::WithoutLobby);

    let lobby_id = a.create_lobby("").await.unwrap().expect("lobby created");
    assert_eq!(lobby_id, 1);
    assert_eq!(a.state(), State::HostWithinLobby);

    let joined = b.join_lobby(lobby_id, "").await.unwrap().expect("joined");
    assert_eq!(joined.host_id, 1);
    assert_eq!(joined.members, vec![1, 2]);
    assert_eq!(b.state(), State::PeerWithinLobby);

    match a.next_notice().await.unwrap() {
        Notice::LobbyUpdate(info) => assert_eq!(info.members, vec![1, 2]),
        other => panic!("unexpected notice {:?}", other),
    }
    assert!(a.lobby().unwrap().is_full());

    let peers = a.go().await.unwrap().expect("lobby started");
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].peer_id, 2);
    assert_eq!(peers[0].private, b.local_addr());
    assert_eq!(a.state(), State::Closing);

    let host = timeout(Duration::from_secs(5), b.wait_for_host())
        .await
        .expect("host address in time")
        .unwrap();
    assert_eq!(host.peer_id, 1);
    assert_eq!(host.private, a.local_addr());
    assert_eq!(host.public, a.local_addr());
    assert_eq!(b.state(), State::Closing);

    assert!(registry.lobby(lobby_id).is_none());
}

#[tokio::test]
async fn test_make_host() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;
    let mut b = peer(&server, 2).await;

    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    b.join_lobby(lobby_id, "").await.unwrap().unwrap();

    // not a member
    assert!(!a.make_host(3).await.unwrap());
    assert_eq!(a.state(), State::HostWithinLobby);

    assert!(a.make_host(2).await.unwrap());
    assert_eq!(a.state(), State::PeerWithinLobby);

    match b.next_notice().await.unwrap() {
        Notice::BecomeHost(info) => assert_eq!(info.host_id, 2),
        other => panic!("unexpected notice {:?}", other),
    }
    assert_eq!(b.state(), State::HostWithinLobby);
    assert_eq!(registry.lobby(lobby_id).unwrap().host_id, 2);

    let peers = b.go().await.unwrap().unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0].peer_id, 1);
    assert_eq!(a.wait_for_host().await.unwrap().peer_id, 2);
}

#[tokio::test]
async fn test_join_missing_lobby() {
    let (server, _registry) = start_server(ServerConfig::default()).await;
    let mut b = peer(&server, 2).await;

    assert!(b.join_lobby(42, "").await.unwrap().is_none());
    assert_eq!(b.state(), State::WithoutLobby);
}

#[tokio::test]
async fn test_join_rejections() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;
    let mut b = peer(&server, 2).await;
    let mut c = peer(&server, 3).await;

    let lobby_id = a.create_lobby("secret").await.unwrap().unwrap();

    assert!(b.join_lobby(lobby_id, "guess").await.unwrap().is_none());
    assert_eq!(b.state(), State::WithoutLobby);
    assert!(b.join_lobby(lobby_id, "secret").await.unwrap().is_some());

    // full
    assert!(c.join_lobby(lobby_id, "secret").await.unwrap().is_none());
    assert_eq!(c.state(), State::WithoutLobby);
    assert_eq!(registry.lobby(lobby_id).unwrap().members, vec![1, 2]);
}

#[tokio::test]
async fn test_host_leaves() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;
    let mut b = peer(&server, 2).await;

    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    b.join_lobby(lobby_id, "").await.unwrap().unwrap();

    assert!(a.leave().await.unwrap());
    assert_eq!(a.state(), State::WithoutLobby);
    assert!(a.lobby().is_none());

    match b.next_notice().await.unwrap() {
        Notice::BecomeHost(info) => {
            assert_eq!(info.host_id, 2);
            assert_eq!(info.members, vec![2]);
        }
        other => panic!("unexpected notice {:?}", other),
    }
    assert_eq!(b.state(), State::HostWithinLobby);

    assert!(b.leave().await.unwrap());
    assert!(registry.lobby(lobby_id).is_none());
    assert!(registry.lobby_ids().is_empty());
}

#[tokio::test]
async fn test_peer_leaves() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;
    let mut b = peer(&server, 2).await;

    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    b.join_lobby(lobby_id, "").await.unwrap().unwrap();
    assert!(b.leave().await.unwrap());

    // the join update first, then the leave update
    match a.next_notice().await.unwrap() {
        Notice::LobbyUpdate(info) => assert_eq!(info.members, vec![1, 2]),
        other => panic!("unexpected notice {:?}", other),
    }
    match a.next_notice().await.unwrap() {
        Notice::LobbyUpdate(info) => assert_eq!(info.members, vec![1]),
        other => panic!("unexpected notice {:?}", other),
    }
    assert_eq!(a.state(), State::HostWithinLobby);
    assert_eq!(registry.lobby(lobby_id).unwrap().members, vec![1]);
}

#[tokio::test]
async fn test_disconnect_leaves_lobby() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;
    let b = peer(&server, 2).await;

    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    assert_eq!(registry.session_count(), 2);

    a.close().await.unwrap();
    wait_until("host session gone", || registry.session_count() == 1).await;
    assert!(registry.lobby(lobby_id).is_none());

    b.close().await.unwrap();
    wait_until("all sessions gone", || registry.session_count() == 0).await;
}

#[tokio::test]
async fn test_address_info() {
    let (server, _registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 7).await;

    let info = a.address_info().await.unwrap();
    assert_eq!(info.peer_id, 7);
    assert_eq!(info.public, a.local_addr());
    assert_eq!(info.private, a.local_addr());
}

#[tokio::test]
async fn test_wrong_state_is_refused_locally() {
    let (server, _registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;

    assert_eq!(a.go().await.unwrap_err().kind(), ErrorKind::Other);
    assert_eq!(a.leave().await.unwrap_err().kind(), ErrorKind::Other);
    assert_eq!(a.state(), State::WithoutLobby);

    a.create_lobby("").await.unwrap().unwrap();
    assert!(a.create_lobby("").await.is_err());
    assert!(a.address_info().await.is_err());
}

#[tokio::test]
async fn test_ping_keeps_session() {
    let (server, _registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;

    a.ping(0xdead).await.unwrap();
    assert_eq!(a.create_lobby("").await.unwrap(), Some(1));
}

#[tokio::test]
async fn test_malformed_frame_is_dropped() {
    let (server, _registry) = start_server(ServerConfig::default()).await;
    let ch = raw_peer(&server, 9).await;

    let mut stream = ch.into_inner();
    stream.write_all(&[0, 3, 0xff, 0xff, 0xff]).await.unwrap();
    let mut ch = Channel::new(stream);

    send(&mut ch, ReqKind::MyAddressInfo(MyAddressInfo::new())).await;
    match ch.recv::<Response>().await.unwrap().kind {
        Some(RespKind::AddressInfo(info)) => assert_eq!(info.peer_id, 9),
        other => panic!("unexpected response {:?}", other),
    }
}

#[tokio::test]
async fn test_unexpected_request_gets_no_reply() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut ch = raw_peer(&server, 9).await;

    // neither is valid without a lobby
    send(&mut ch, ReqKind::Go(Go::new())).await;
    send(&mut ch, ReqKind::Leave(Leave::new())).await;
    send(&mut ch, ReqKind::MyAddressInfo(MyAddressInfo::new())).await;

    match ch.recv::<Response>().await.unwrap().kind {
        Some(RespKind::AddressInfo(info)) => assert_eq!(info.peer_id, 9),
        other => panic!("unexpected response {:?}", other),
    }
    assert_eq!(registry.session_count(), 1);
}

#[tokio::test]
async fn test_closing_session_discards_requests() {
    let config = ServerConfig {
        closing_grace: Duration::from_millis(300),
        ..Default::default()
    };
    let (server, _registry) = start_server(config).await;
    let mut a = peer(&server, 1).await;
    let mut ch = raw_peer(&server, 2).await;

    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    let mut join = JoinLobby::new();
    join.lobby_id = lobby_id;
    send(&mut ch, ReqKind::JoinLobby(join)).await;
    match ch.recv::<Response>().await.unwrap().kind {
        Some(RespKind::JoinLobbyResult(r)) => assert!(r.success),
        other => panic!("unexpected response {:?}", other),
    }

    a.go().await.unwrap().unwrap();
    match ch.recv::<Response>().await.unwrap().kind {
        Some(RespKind::HostAddressInfo(n)) => assert_eq!(n.host.peer_id, 1),
        other => panic!("unexpected response {:?}", other),
    }

    send(&mut ch, ReqKind::MyAddressInfo(MyAddressInfo::new())).await;
    send(&mut ch, ReqKind::Leave(Leave::new())).await;

    // nothing comes back before the server hangs up
    let err = timeout(Duration::from_secs(5), ch.recv::<Response>())
        .await
        .expect("closed after grace")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}

#[tokio::test]
async fn test_shutdown_closes_sessions() {
    let server = Server::with_config("127.0.0.1:0", ServerConfig::default())
        .await
        .unwrap();
    let addr = server.local_addr().unwrap().to_string();
    let registry = server.registry();
    let (stop, stopped) = oneshot::channel::<()>();
    let task = tokio::spawn(server.run_until(stopped));

    let mut a = peer(&addr, 1).await;
    let mut b = peer(&addr, 2).await;
    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    b.join_lobby(lobby_id, "").await.unwrap().unwrap();
    assert_eq!(registry.session_count(), 2);

    stop.send(()).unwrap();
    task.await.unwrap().unwrap();

    for c in [&mut a, &mut b] {
        let err = timeout(Duration::from_secs(5), c.wait_for_host())
            .await
            .expect("closed in time")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
    wait_until("all sessions gone", || registry.session_count() == 0).await;
    assert!(registry.lobby_ids().is_empty());
}

#[tokio::test]
async fn test_sessions_close_after_grace() {
    let config = ServerConfig {
        closing_grace: Duration::from_millis(100),
        ..Default::default()
    };
    let (server, registry) = start_server(config).await;
    let mut a = peer(&server, 1).await;
    let mut b = peer(&server, 2).await;

    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    b.join_lobby(lobby_id, "").await.unwrap().unwrap();
    a.go().await.unwrap().unwrap();
    b.wait_for_host().await.unwrap();

    wait_until("sessions closed", || registry.session_count() == 0).await;

    // the server closed the rendezvous connection
    let err = b.next_notice().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    assert_eq!(b.state(), State::Closed);
}

#[tokio::test]
async fn test_stale_registration_replaced() {
    let (server, registry) = start_server(ServerConfig::default()).await;
    let mut old = peer(&server, 5).await;
    let _new = peer(&server, 5).await;

    // the old session loses its registry entry and ends
    let err = timeout(Duration::from_secs(5), old.next_notice())
        .await
        .expect("old session closed in time")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    assert_eq!(registry.session_count(), 1);
}

#[tokio::test]
async fn test_peers_connect_directly() {
    let (server, _registry) = start_server(ServerConfig::default()).await;
    let mut a = peer(&server, 1).await;
    let mut b = peer(&server, 2).await;

    let lobby_id = a.create_lobby("").await.unwrap().unwrap();
    b.join_lobby(lobby_id, "").await.unwrap().unwrap();
    let peers = a.go().await.unwrap().unwrap();
    let host = b.wait_for_host().await.unwrap();

    let config = RaceConfig {
        retry_delay: Duration::from_millis(50),
        ..Default::default()
    };
    let (sa, sb) = timeout(
        Duration::from_secs(10),
        async { tokio::join!(a.connect_peer(peers[0], &config), b.connect_peer(host, &config)) },
    )
    .await
    .expect("race finished in time");

    let (mut sa, mut sb) = match (sa, sb) {
        (Outcome::Connected { stream: sa, .. }, Outcome::Connected { stream: sb, .. }) => (sa, sb),
        other => panic!("race failed: {:?}", other),
    };

    sa.write_all(b"hello").await.unwrap();
    let mut buf = [0; 5];
    sb.read_exact(&mut buf).await.unwrap();
    assert_eq!(&buf, b"hello");
}
