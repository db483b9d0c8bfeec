//! Race several ways of reaching a peer and keep the first that works.
//!
//! Neither side knows in advance whether its NAT lets the peer in, or whether
//! the peer's NAT lets it out, so it tries everything at once from the same
//! local endpoint it used to talk to the rendezvous server:
//!
//! - connect to the peer's private endpoint (same network),
//! - connect to the peer's public endpoint (hairpinning or simultaneous open),
//! - listen and accept, in case the peer's connect reaches us first.
//!
//! A failed attempt is restarted; the failures of all attempts are counted
//! together, and the race gives up once the count reaches the ceiling.

use crate::address::AddressInfo;
use std::future::Future;
use std::io::{
    Error,
    ErrorKind::{AddrNotAvailable, Other, TimedOut},
    Result,
};
use std::net::SocketAddr;
use std::panic::resume_unwind;
use std::time::Duration;
use tokio::net::{TcpSocket, TcpStream};
use tokio::task::JoinSet;
use tokio::time::{sleep, timeout};

pub const STRATEGIES: [Strategy; 3] = [Strategy::Private, Strategy::Public, Strategy::Accept];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// connect to the peer's private endpoint
    Private,
    /// connect to the peer's public endpoint
    Public,
    /// accept the peer's connection on our local endpoint
    Accept,
}

#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// give up after this many failed attempts, all strategies combined.
    /// 0 gives up without trying.
    pub max_failures: u32,
    pub attempt_timeout: Duration,
    /// pause before a failed strategy is tried again
    pub retry_delay: Duration,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            max_failures: 10,
            attempt_timeout: Duration::from_secs(3),
            retry_delay: Duration::from_millis(200),
        }
    }
}

#[derive(Debug)]
pub enum Outcome<T> {
    Connected { via: Strategy, stream: T },
    Exhausted { failures: u32 },
}

impl<T> Outcome<T> {
    pub fn into_stream(self) -> Option<T> {
        match self {
            Outcome::Connected { stream, .. } => Some(stream),
            Outcome::Exhausted { .. } => None,
        }
    }
}

/// Run every strategy concurrently until one succeeds or the failure ceiling
/// is reached.
///
/// A strategy is restarted only after its previous attempt failed, so at most
/// one attempt per strategy is in flight. Attempts still running when the race
/// ends are aborted.
pub async fn race<T, F, Fut>(config: &RaceConfig, mut attempt: F) -> Outcome<T>
where
    F: FnMut(Strategy) -> Fut,
    Fut: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    if config.max_failures == 0 {
        return Outcome::Exhausted { failures: 0 };
    }

    let mut tasks = JoinSet::new();
    for strategy in STRATEGIES {
        tasks.spawn(run_attempt(strategy, attempt(strategy), None, config.attempt_timeout));
    }

    let mut failures = 0;
    while let Some(joined) = tasks.join_next().await {
        let (strategy, result) = match joined {
            Ok(r) => r,
            Err(e) if e.is_panic() => resume_unwind(e.into_panic()),
            Err(e) => {
                log::debug!("race attempt cancelled: {}", e);
                continue;
            }
        };

        match result {
            Ok(stream) => {
                log::debug!("race won by {:?} after {} failures", strategy, failures);
                return Outcome::Connected {
                    via: strategy,
                    stream,
                };
            }
            Err(e) => {
                failures += 1;
                log::debug!("{:?} attempt failed ({}): {}", strategy, failures, e);

                if failures >= config.max_failures {
                    break;
                }

                tasks.spawn(run_attempt(
                    strategy,
                    attempt(strategy),
                    Some(config.retry_delay),
                    config.attempt_timeout,
                ));
            }
        }
    }

    log::debug!("race exhausted after {} failures", failures);
    Outcome::Exhausted { failures }
}

async fn run_attempt<T, Fut>(
    strategy: Strategy,
    fut: Fut,
    delay: Option<Duration>,
    limit: Duration,
) -> (Strategy, Result<T>)
where
    Fut: Future<Output = Result<T>>,
{
    if let Some(delay) = delay {
        sleep(delay).await;
    }

    let result = match timeout(limit, fut).await {
        Ok(r) => r,
        Err(_) => Err(Error::new(TimedOut, "attempt timed out")),
    };

    (strategy, result)
}

/// Race a direct tcp connection to `remote`, binding every socket to `local`.
pub async fn connect(local: SocketAddr, remote: AddressInfo, config: &RaceConfig) -> Outcome<TcpStream> {
    race(config, move |strategy| attempt(strategy, local, remote)).await
}

async fn attempt(strategy: Strategy, local: SocketAddr, remote: AddressInfo) -> Result<TcpStream> {
    match strategy {
        Strategy::Private => dial(local, remote.private).await,
        Strategy::Public => dial(local, remote.public).await,
        Strategy::Accept => accept_from(local, remote).await,
    }
}

pub(crate) fn bind(local_addr: SocketAddr) -> Result<TcpSocket> {
    let s = match local_addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }?;

    s.set_reuseaddr(true)?;
    #[cfg(unix)]
    s.set_reuseport(true)?;
    s.bind(local_addr)?;

    Ok(s)
}

async fn dial(local: SocketAddr, target: SocketAddr) -> Result<TcpStream> {
    if target.port() == 0 || target.ip().is_unspecified() {
        return Err(Error::new(AddrNotAvailable, "unusable endpoint"));
    }

    log::trace!("connect {} -> {}", local, target);
    bind(local)?.connect(target).await
}

async fn accept_from(local: SocketAddr, remote: AddressInfo) -> Result<TcpStream> {
    let listener = bind(local)?.listen(1)?;

    let (stream, addr) = listener.accept().await?;
    if addr.ip() != remote.public.ip() && addr.ip() != remote.private.ip() {
        return Err(Error::new(Other, format!("unexpected connection from {}", addr)));
    }

    log::trace!("accepted {} on {}", addr, local);
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU32, Ordering::SeqCst};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    fn fast() -> RaceConfig {
        RaceConfig {
            max_failures: 10,
            attempt_timeout: Duration::from_millis(200),
            retry_delay: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn test_single_reachable_strategy_wins() {
        for reachable in STRATEGIES {
            let outcome = race(&fast(), move |s| async move {
                if s == reachable {
                    Ok(s)
                } else {
                    Err(Error::new(Other, "unreachable"))
                }
            })
            .await;

            match outcome {
                Outcome::Connected { via, stream } => {
                    assert_eq!(via, reachable);
                    assert_eq!(stream, reachable);
                }
                o => panic!("unexpected outcome {:?}", o),
            }
        }
    }

    #[tokio::test]
    async fn test_slow_strategy_wins_after_retries() {
        let outcome = race(&fast(), |s| async move {
            match s {
                Strategy::Accept => {
                    sleep(Duration::from_millis(50)).await;
                    Ok(())
                }
                _ => Err(Error::new(Other, "refused")),
            }
        })
        .await;

        assert!(matches!(
            outcome,
            Outcome::Connected {
                via: Strategy::Accept,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_exhausted_after_exact_failures() {
        for max_failures in [1, 3, 10, 100] {
            let config = RaceConfig {
                max_failures,
                ..fast()
            };
            let outcome = race(&config, |_| async {
                Err::<(), _>(Error::new(Other, "refused"))
            })
            .await;

            match outcome {
                Outcome::Exhausted { failures } => assert_eq!(failures, max_failures),
                o => panic!("unexpected outcome {:?}", o),
            }
        }
    }

    #[tokio::test]
    async fn test_zero_ceiling_gives_up_without_trying() {
        let started = Arc::new(AtomicU32::new(0));
        let config = RaceConfig {
            max_failures: 0,
            ..fast()
        };
        let counter = started.clone();
        let outcome = race(&config, move |s| {
            counter.fetch_add(1, SeqCst);
            async move { Ok(s) }
        })
        .await;

        assert!(matches!(outcome, Outcome::Exhausted { failures: 0 }));
        assert_eq!(started.load(SeqCst), 0);
    }

    #[tokio::test]
    async fn test_timeout_counts_as_failure() {
        let config = RaceConfig {
            max_failures: 4,
            attempt_timeout: Duration::from_millis(10),
            retry_delay: Duration::ZERO,
        };
        let outcome = race(&config, |_| std::future::pending::<Result<()>>()).await;
        assert!(matches!(outcome, Outcome::Exhausted { failures: 4 }));
    }

    #[tokio::test]
    async fn test_no_strategy_runs_twice_at_once() {
        let running: Arc<Mutex<HashMap<Strategy, u32>>> = Default::default();
        let started = Arc::new(AtomicU32::new(0));

        let outcome = race(&fast(), |s| {
            let running = running.clone();
            started.fetch_add(1, SeqCst);
            async move {
                {
                    let mut running = running.lock().unwrap();
                    let n = running.entry(s).or_insert(0);
                    *n += 1;
                    assert_eq!(*n, 1, "{:?} started twice", s);
                }
                sleep(Duration::from_millis(2)).await;
                *running.lock().unwrap().get_mut(&s).unwrap() -= 1;
                Err::<(), _>(Error::new(Other, "refused"))
            }
        })
        .await;

        assert!(matches!(outcome, Outcome::Exhausted { failures: 10 }));
        // three initial attempts, then one restart per failure but the last
        assert_eq!(started.load(SeqCst), 3 + 9);
    }

    #[tokio::test]
    async fn test_connect_private_endpoint() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let private = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = listener.accept().await;
        });

        let remote = AddressInfo {
            peer_id: 2,
            // nothing listens on an unspecified address
            public: "0.0.0.0:9".parse().unwrap(),
            private,
        };
        let local: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let config = RaceConfig {
            retry_delay: Duration::from_millis(50),
            ..fast()
        };

        match connect(local, remote, &config).await {
            Outcome::Connected { via, stream } => {
                assert_eq!(via, Strategy::Private);
                assert_eq!(stream.peer_addr().unwrap(), private);
            }
            o => panic!("unexpected outcome {:?}", o),
        }
    }
}
