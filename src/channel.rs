//! Length delimited protobuf messages over a byte stream.
//!
//! Each frame is a big endian `u16` payload size followed by the payload.
//!
//! [`Channel::recv`] is cancel safe: bytes are only ever appended to the
//! channel's own buffer, so dropping a pending `recv` (e.g. when another
//! `select!` branch wins) keeps a partially received frame, and the next call
//! continues from the same stream position.

use protobuf::Message;
use std::io::{
    Error,
    ErrorKind::{InvalidData, InvalidInput, UnexpectedEof},
    Result,
};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

const HEADER_SIZE: usize = 2;
const READ_CHUNK: usize = 1500;

pub struct Channel<S> {
    stream: S,
    buf: Vec<u8>,
}

impl<S> Channel<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            buf: Vec::with_capacity(READ_CHUNK),
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Read the next message.
    ///
    /// A frame whose payload does not parse is consumed and reported as
    /// `InvalidData`; the channel stays usable. End of stream is `UnexpectedEof`.
    pub async fn recv<M: Message>(&mut self) -> Result<M> {
        loop {
            if let Some(payload) = self.take_frame() {
                return M::parse_from_bytes(&payload)
                    .map_err(|e| Error::new(InvalidData, format!("malformed message: {}", e)));
            }

            self.buf.reserve(READ_CHUNK);
            if self.stream.read_buf(&mut self.buf).await? == 0 {
                return Err(Error::new(UnexpectedEof, "connection closed"));
            }
        }
    }

    pub async fn send<M: Message>(&mut self, msg: &M) -> Result<()> {
        let payload = msg.write_to_bytes()?;
        let size = u16::try_from(payload.len())
            .map_err(|_| Error::new(InvalidInput, "message too large"))?;

        let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
        frame.extend_from_slice(&size.to_be_bytes());
        frame.extend_from_slice(&payload);

        self.stream.write_all(&frame).await?;
        self.stream.flush().await
    }

    fn take_frame(&mut self) -> Option<Vec<u8>> {
        if self.buf.len() < HEADER_SIZE {
            return None;
        }

        let size = u16::from_be_bytes([self.buf[0], self.buf[1]]) as usize;
        if self.buf.len() < HEADER_SIZE + size {
            return None;
        }

        let frame: Vec<u8> = self.buf.drain(..HEADER_SIZE + size).collect();
        Some(frame[HEADER_SIZE..].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::rendezvous::{request, CreateLobby, Ping, Request};
    use std::time::Duration;
    use tokio::io::{duplex, AsyncWriteExt};
    use tokio::{select, sync::oneshot, time::sleep};

    fn create_lobby(password: &str) -> Request {
        let mut create = CreateLobby::new();
        create.password = password.to_string();
        let mut req = Request::new();
        req.kind = Some(request::Kind::CreateLobby(create));
        req
    }

    fn frame(req: &Request) -> Vec<u8> {
        let payload = req.write_to_bytes().unwrap();
        let mut buf = (payload.len() as u16).to_be_bytes().to_vec();
        buf.extend_from_slice(&payload);
        buf
    }

    #[tokio::test]
    async fn test_send_recv() {
        let (a, b) = duplex(64);
        let mut a = Channel::new(a);
        let mut b = Channel::new(b);

        let mut ping = Request::new();
        ping.kind = Some(request::Kind::Ping(Ping::new()));

        a.send(&create_lobby("pw")).await.unwrap();
        a.send(&ping).await.unwrap();

        assert_eq!(b.recv::<Request>().await.unwrap(), create_lobby("pw"));
        assert_eq!(b.recv::<Request>().await.unwrap(), ping);
    }

    #[tokio::test]
    async fn test_interrupted_recv_keeps_framing() {
        let (mut raw, b) = duplex(64);
        let mut b = Channel::new(b);

        let bytes = frame(&create_lobby("after interrupt"));
        let (head, tail) = bytes.split_at(5);
        raw.write_all(head).await.unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            sleep(Duration::from_millis(20)).await;
            let _ = tx.send(());
        });

        // the state change signal fires while the frame is half received
        let interrupted = select! {
            _ = rx => true,
            _ = b.recv::<Request>() => false,
        };
        assert!(interrupted);

        raw.write_all(tail).await.unwrap();
        assert_eq!(
            b.recv::<Request>().await.unwrap(),
            create_lobby("after interrupt")
        );
    }

    #[tokio::test]
    async fn test_malformed_frame_resyncs() {
        let (mut raw, b) = duplex(64);
        let mut b = Channel::new(b);

        raw.write_all(&[0, 3, 0xff, 0xff, 0xff]).await.unwrap();
        raw.write_all(&frame(&create_lobby("ok"))).await.unwrap();

        let err = b.recv::<Request>().await.unwrap_err();
        assert_eq!(err.kind(), InvalidData);
        assert_eq!(b.recv::<Request>().await.unwrap(), create_lobby("ok"));
    }

    #[tokio::test]
    async fn test_eof() {
        let (raw, b) = duplex(64);
        let mut b = Channel::new(b);
        drop(raw);

        assert_eq!(
            b.recv::<Request>().await.unwrap_err().kind(),
            UnexpectedEof
        );
    }
}
