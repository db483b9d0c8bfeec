use rndz_lobby::client::{Client, Notice, Outcome, RaceConfig};
use rndz_lobby::server::Server;
use rndz_lobby::AddressInfo;
use std::io::{Error, ErrorKind::Other, Result};
use std::net::SocketAddr;
use structopt::StructOpt;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

#[derive(StructOpt, Debug)]
#[structopt(name = "rndz-lobby")]
enum Opt {
    Client(ClientOpt),
    Server(ServerOpt),
}

#[derive(StructOpt, Debug)]
struct ClientOpt {
    #[structopt(long = "server-addr")]
    server_addr: String,

    #[structopt(long = "server-port", default_value = "7777")]
    server_port: u16,

    /// bind the rendezvous connection to this port, for nat tests
    #[structopt(long = "local-port")]
    local_port: Option<u16>,

    /// join this lobby instead of creating one
    #[structopt(long = "join")]
    join: Option<u64>,

    #[structopt(long = "password", default_value = "")]
    password: String,

    #[structopt(long = "max-failures", default_value = "10")]
    max_failures: u32,
}

#[derive(StructOpt, Debug)]
struct ServerOpt {
    #[structopt(long = "listen-port", default_value = "7777")]
    listen_port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt: Opt = StructOpt::from_args();

    match opt {
        Opt::Server(opt) => run_server(opt).await,
        Opt::Client(opt) => run_client(opt).await,
    }
}

async fn run_server(opt: ServerOpt) -> Result<()> {
    let s = Server::new(("0.0.0.0", opt.listen_port)).await?;
    s.run_until(tokio::signal::ctrl_c()).await
}

async fn run_client(opt: ClientOpt) -> Result<()> {
    let server_addr = format!("{}:{}", opt.server_addr, opt.server_port);
    let local_addr = opt
        .local_port
        .map(|port| SocketAddr::from(([0, 0, 0, 0], port)));

    let mut c = Client::connect(&server_addr, local_addr).await?;
    log::info!("peer {} connected from {}", c.id(), c.local_addr());
    if !c.sample_lobby_ids().is_empty() {
        log::info!("open lobbies: {:?}", c.sample_lobby_ids());
    }

    let remote = match opt.join {
        Some(lobby_id) => join(&mut c, lobby_id, &opt.password).await?,
        None => host(&mut c, &opt.password).await?,
    };
    log::info!(
        "peer {} public {} private {}",
        remote.peer_id,
        remote.public,
        remote.private
    );

    let config = RaceConfig {
        max_failures: opt.max_failures,
        ..Default::default()
    };
    let mut s = match c.connect_peer(remote, &config).await {
        Outcome::Connected { via, stream } => {
            log::info!("connected to {} via {:?}", stream.peer_addr()?, via);
            stream
        }
        Outcome::Exhausted { failures } => {
            return Err(Error::new(
                Other,
                format!("no direct connection after {} failures", failures),
            ))
        }
    };

    s.write_all(format!("hello from {}\n", c.id()).as_bytes())
        .await?;
    let mut buf = [0; 64];
    let n = s.read(&mut buf).await?;
    log::info!("received: {}", String::from_utf8_lossy(&buf[..n]).trim_end());

    c.close().await
}

async fn join(c: &mut Client, lobby_id: u64, password: &str) -> Result<AddressInfo> {
    let lobby = c
        .join_lobby(lobby_id, password)
        .await?
        .ok_or_else(|| Error::new(Other, format!("could not join lobby {}", lobby_id)))?;
    log::info!("joined lobby {}, host {}", lobby.id, lobby.host_id);

    c.wait_for_host().await
}

async fn host(c: &mut Client, password: &str) -> Result<AddressInfo> {
    let lobby_id = c
        .create_lobby(password)
        .await?
        .ok_or_else(|| Error::new(Other, "could not create lobby"))?;
    log::info!("created lobby {}, waiting for a peer", lobby_id);

    loop {
        match c.lobby() {
            Some(lobby) if lobby.is_full() => break,
            None => return Err(Error::new(Other, "lobby lost")),
            _ => {}
        }
        if let Notice::HostAddress(host) = c.next_notice().await? {
            return Ok(host);
        }
    }

    c.go()
        .await?
        .and_then(|peers| peers.into_iter().next())
        .ok_or_else(|| Error::new(Other, "no peer to connect"))
}
