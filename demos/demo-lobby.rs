use rndz_lobby::client::{Client, RaceConfig};
use rndz_lobby::server::Server;
use std::error::Error;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    task::spawn,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let server_addr = "127.0.0.1:8888";

    {
        let s = Server::new(server_addr).await?;
        spawn(s.run());
    }

    let mut host = Client::connect(server_addr, None).await?;
    let lobby_id = host.create_lobby("").await?.ok_or("create lobby failed")?;

    let t = spawn(async move {
        let mut c = Client::connect(server_addr, None).await?;
        c.join_lobby(lobby_id, "").await?.ok_or("join lobby failed")?;
        let host = c.wait_for_host().await?;

        let mut s = c
            .connect_peer(host, &RaceConfig::default())
            .await
            .into_stream()
            .ok_or("no direct connection")?;
        s.write_all(b"hello").await?;
        Ok::<_, Box<dyn Error + Send + Sync>>(())
    });

    // wait for the peer to show up
    while !host.lobby().map_or(false, |l| l.is_full()) {
        host.next_notice().await?;
    }

    let peers = host.go().await?.ok_or("go failed")?;
    let mut s = host
        .connect_peer(peers[0], &RaceConfig::default())
        .await
        .into_stream()
        .ok_or("no direct connection")?;

    let mut buf = [0; 5];
    s.read_exact(&mut buf).await?;
    println!("{}", String::from_utf8_lossy(&buf));

    t.await?.map_err(|e| e.to_string())?;

    Ok(())
}
