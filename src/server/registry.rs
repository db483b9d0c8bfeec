use super::session::Control;
use crate::address::{AddressInfo, LobbyId, PeerId};
use crate::lobby::{Departure, JoinError, Lobby, LobbyInfo};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::UnboundedSender;

/// What the registry knows about a live session.
pub(crate) struct SessionHandle {
    pub serial: u64,
    pub info: AddressInfo,
    pub mailbox: UnboundedSender<Control>,
}

#[derive(Default)]
struct Tables {
    sessions: HashMap<PeerId, SessionHandle>,
    lobbies: BTreeMap<LobbyId, Lobby>,
    last_lobby_id: LobbyId,
}

/// Sessions and lobbies shared by every session task.
///
/// Each operation runs under one lock, so lobby membership and the session
/// table always change together. Cross session effects (host changes, go,
/// lobby updates) are posted to the target session's mailbox while the lock is
/// held; posting never blocks.
pub struct Registry {
    tables: Mutex<Tables>,
    capacity: usize,
}

impl Registry {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            tables: Default::default(),
            capacity,
        }
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of a lobby, if it exists.
    pub fn lobby(&self, id: LobbyId) -> Option<LobbyInfo> {
        self.tables().lobbies.get(&id).map(Lobby::info)
    }

    pub fn lobby_ids(&self) -> Vec<LobbyId> {
        self.tables().lobbies.keys().copied().collect()
    }

    pub fn session_count(&self) -> usize {
        self.tables().sessions.len()
    }

    /// Add a session. A newer session with the same peer id replaces the old
    /// one, which is taken out of every lobby it was in.
    pub(crate) fn register(&self, serial: u64, info: AddressInfo, mailbox: UnboundedSender<Control>) {
        let mut tables = self.tables();
        let tables = &mut *tables;
        let peer = info.peer_id;

        if let Some(old) = tables.sessions.get(&peer) {
            if old.serial != serial {
                log::debug!("updating peer {}", peer);
                let stale: Vec<LobbyId> = tables
                    .lobbies
                    .values()
                    .filter(|l| l.contains(peer))
                    .map(Lobby::id)
                    .collect();
                for id in stale {
                    depart(tables, id, peer);
                }
            }
        }

        tables.sessions.insert(
            peer,
            SessionHandle {
                serial,
                info,
                mailbox,
            },
        );
    }

    /// Remove a session and take it out of `lobby`, unless the peer id was
    /// taken over by a newer one.
    pub(crate) fn unregister(&self, peer: PeerId, serial: u64, lobby: Option<LobbyId>) {
        let mut tables = self.tables();
        let tables = &mut *tables;

        if !tables
            .sessions
            .get(&peer)
            .map_or(false, |s| s.serial == serial)
        {
            return;
        }

        if let Some(id) = lobby {
            depart(tables, id, peer);
        }
        tables.sessions.remove(&peer);
    }

    pub(crate) fn sample_lobby_ids(&self, n: usize) -> Vec<LobbyId> {
        self.tables().lobbies.keys().take(n).copied().collect()
    }

    pub(crate) fn create_lobby(&self, host: PeerId, password: &str) -> Option<LobbyId> {
        let mut tables = self.tables();
        let id = tables.last_lobby_id.checked_add(1)?;
        tables.last_lobby_id = id;

        tables
            .lobbies
            .insert(id, Lobby::new(id, host, self.capacity, password));
        log::debug!("lobby {} created by {}", id, host);

        Some(id)
    }

    pub(crate) fn join_lobby(
        &self,
        id: LobbyId,
        peer: PeerId,
        password: &str,
    ) -> Result<LobbyInfo, JoinError> {
        let mut tables = self.tables();
        let tables = &mut *tables;

        let lobby = tables.lobbies.get_mut(&id).ok_or(JoinError::NotFound)?;
        lobby.try_join(peer, password)?;

        let info = lobby.info();
        for member in info.members.iter().filter(|m| **m != peer) {
            post(&tables.sessions, *member, Control::LobbyUpdate(info.clone()));
        }

        Ok(info)
    }

    /// Remove `peer` from the lobby. Returns false if it was not a member.
    pub(crate) fn leave_lobby(&self, id: LobbyId, peer: PeerId) -> bool {
        depart(&mut self.tables(), id, peer)
    }

    pub(crate) fn make_host(
        &self,
        id: LobbyId,
        requester: PeerId,
        target: PeerId,
    ) -> Option<LobbyInfo> {
        let mut tables = self.tables();
        let tables = &mut *tables;

        let lobby = tables.lobbies.get_mut(&id)?;
        if !lobby.make_host(requester, target) {
            return None;
        }

        let info = lobby.info();
        post(&tables.sessions, target, Control::BecomeHost(info.clone()));

        Some(info)
    }

    /// Tear the lobby down and hand every other member the host's address.
    ///
    /// Returns the addresses of the members that were reached, or `None` if
    /// `host` does not host lobby `id`.
    pub(crate) fn start_lobby(
        &self,
        id: LobbyId,
        host: AddressInfo,
    ) -> Option<Vec<AddressInfo>> {
        let mut tables = self.tables();

        if tables.lobbies.get(&id)?.host_id() != host.peer_id {
            return None;
        }
        let lobby = tables.lobbies.remove(&id)?;

        let mut peers = Vec::new();
        for member in lobby.non_host_members() {
            match tables.sessions.get(&member) {
                Some(s) if s.mailbox.send(Control::Go(id, host)).is_ok() => peers.push(s.info),
                _ => log::warn!("lobby {}: failed to reach peer {}", id, member),
            }
        }

        log::debug!("lobby {} started by {}", lobby.id(), host.peer_id);
        Some(peers)
    }

    pub(crate) fn shutdown(&self) {
        for s in self.tables().sessions.values() {
            let _ = s.mailbox.send(Control::Shutdown);
        }
    }
}

/// Take `peer` out of lobby `id`, handing the host role over or destroying
/// the lobby as needed, and tell the remaining members.
fn depart(tables: &mut Tables, id: LobbyId, peer: PeerId) -> bool {
    let lobby = match tables.lobbies.get_mut(&id) {
        Some(lobby) => lobby,
        None => return false,
    };

    match lobby.leave(peer) {
        Departure::NotMember => false,
        Departure::Empty => {
            tables.lobbies.remove(&id);
            log::debug!("lobby {} destroyed, last member {} left", id, peer);
            true
        }
        Departure::HostChanged(host) => {
            log::debug!("lobby {} host {} left, {} takes over", id, peer, host);
            let info = lobby.info();
            for member in info.members.iter().filter(|m| **m != host) {
                post(&tables.sessions, *member, Control::LobbyUpdate(info.clone()));
            }
            post(&tables.sessions, host, Control::BecomeHost(info));
            true
        }
        Departure::Left => {
            let info = lobby.info();
            for member in &info.members {
                post(&tables.sessions, *member, Control::LobbyUpdate(info.clone()));
            }
            true
        }
    }
}

fn post(sessions: &HashMap<PeerId, SessionHandle>, peer: PeerId, ctl: Control) {
    match sessions.get(&peer) {
        Some(s) if s.mailbox.send(ctl).is_ok() => {}
        _ => log::debug!("peer {} unreachable", peer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    fn add_session(r: &Registry, peer: PeerId) -> UnboundedReceiver<Control> {
        let (tx, rx) = unbounded_channel();
        let info = AddressInfo {
            peer_id: peer,
            public: ([1, 2, 3, 4], 1000 + peer as u16).into(),
            private: ([10, 0, 0, 1], 1000 + peer as u16).into(),
        };
        r.register(peer, info, tx);
        rx
    }

    fn info(r: &Registry, peer: PeerId) -> AddressInfo {
        r.tables().sessions[&peer].info
    }

    #[test]
    fn test_lobby_ids_increase() {
        let r = Registry::new(2);
        assert_eq!(r.create_lobby(1, ""), Some(1));
        assert_eq!(r.create_lobby(2, ""), Some(2));
        assert!(r.leave_lobby(1, 1));
        assert_eq!(r.create_lobby(3, ""), Some(3));
        assert_eq!(r.lobby_ids(), vec![2, 3]);
        assert_eq!(r.sample_lobby_ids(1), vec![2]);
    }

    #[test]
    fn test_join_notifies_members() {
        let r = Registry::new(2);
        let mut a = add_session(&r, 1);
        let mut b = add_session(&r, 2);
        let _c = add_session(&r, 3);

        let id = r.create_lobby(1, "pw").unwrap();
        assert_eq!(r.join_lobby(id, 2, "nope"), Err(JoinError::WrongPassword));
        assert_eq!(r.join_lobby(99, 2, "pw"), Err(JoinError::NotFound));

        let info = r.join_lobby(id, 2, "pw").unwrap();
        assert_eq!(info.members, vec![1, 2]);
        assert_eq!(r.join_lobby(id, 3, "pw"), Err(JoinError::Full));

        assert!(matches!(a.try_recv(), Ok(Control::LobbyUpdate(i)) if i == info));
        assert!(b.try_recv().is_err());
    }

    #[test]
    fn test_host_leave_hands_over() {
        let r = Registry::new(3);
        let _a = add_session(&r, 1);
        let mut b = add_session(&r, 2);
        let mut c = add_session(&r, 3);

        let id = r.create_lobby(1, "").unwrap();
        r.join_lobby(id, 2, "").unwrap();
        r.join_lobby(id, 3, "").unwrap();
        while b.try_recv().is_ok() {}

        assert!(r.leave_lobby(id, 1));
        let lobby = r.lobby(id).unwrap();
        assert_eq!(lobby.host_id, 2);
        assert_eq!(lobby.members, vec![2, 3]);
        assert!(matches!(b.try_recv(), Ok(Control::BecomeHost(i)) if i.host_id == 2));
        assert!(matches!(c.try_recv(), Ok(Control::LobbyUpdate(i)) if i.host_id == 2));

        assert!(!r.leave_lobby(id, 1));
        assert!(r.leave_lobby(id, 3));
        assert!(r.leave_lobby(id, 2));
        assert_eq!(r.lobby(id), None);
    }

    #[test]
    fn test_make_host() {
        let r = Registry::new(2);
        let _a = add_session(&r, 1);
        let mut b = add_session(&r, 2);
        let id = r.create_lobby(1, "").unwrap();
        r.join_lobby(id, 2, "").unwrap();

        assert_eq!(r.make_host(id, 2, 1), None);
        assert_eq!(r.make_host(id, 1, 1), None);
        assert_eq!(r.make_host(id, 1, 2).map(|i| i.host_id), Some(2));
        assert!(matches!(b.try_recv(), Ok(Control::BecomeHost(_))));
        assert_eq!(r.lobby(id).unwrap().host_id, 2);
    }

    #[test]
    fn test_start_lobby() {
        let r = Registry::new(2);
        let _a = add_session(&r, 1);
        let mut b = add_session(&r, 2);
        let id = r.create_lobby(1, "").unwrap();
        r.join_lobby(id, 2, "").unwrap();

        assert_eq!(r.start_lobby(id, info(&r, 2)), None);

        let peers = r.start_lobby(id, info(&r, 1)).unwrap();
        assert_eq!(peers, vec![info(&r, 2)]);
        assert_eq!(r.lobby(id), None);
        assert!(matches!(b.try_recv(), Ok(Control::Go(lobby, host)) if lobby == id && host.peer_id == 1));
    }

    #[test]
    fn test_start_lobby_skips_unreachable_peer() {
        let r = Registry::new(3);
        let _a = add_session(&r, 1);
        let b = add_session(&r, 2);
        let _c = add_session(&r, 3);
        let id = r.create_lobby(1, "").unwrap();
        r.join_lobby(id, 2, "").unwrap();
        r.join_lobby(id, 3, "").unwrap();

        drop(b);
        let peers = r.start_lobby(id, info(&r, 1)).unwrap();
        assert_eq!(peers, vec![info(&r, 3)]);
    }

    #[test]
    fn test_unregister_keeps_newer_session() {
        let r = Registry::new(2);
        let _old = add_session(&r, 1);
        let (tx, _new) = unbounded_channel();
        r.register(42, info(&r, 1), tx);

        r.unregister(1, 1, None);
        assert_eq!(r.session_count(), 1);
        r.unregister(1, 42, None);
        assert_eq!(r.session_count(), 0);
    }

    #[test]
    fn test_replaced_session_leaves_its_lobbies() {
        let r = Registry::new(2);
        let mut host = add_session(&r, 1);
        let _old = add_session(&r, 5);
        let lobby = r.create_lobby(1, "").unwrap();
        r.join_lobby(lobby, 5, "").unwrap();
        while host.try_recv().is_ok() {}

        // same peer id, newer connection
        let (tx, mut new) = unbounded_channel();
        r.register(7, info(&r, 5), tx);
        assert_eq!(r.lobby(lobby).unwrap().members, vec![1]);
        assert!(matches!(host.try_recv(), Ok(Control::LobbyUpdate(i)) if i.members == vec![1]));

        let own = r.create_lobby(5, "").unwrap();
        assert_eq!(r.start_lobby(lobby, info(&r, 1)), Some(vec![]));
        assert!(new.try_recv().is_err());

        // the old session's cleanup must not touch the new one's lobby
        r.unregister(5, 5, Some(own));
        assert_eq!(r.lobby(own).unwrap().host_id, 5);
        assert_eq!(r.session_count(), 2);

        r.unregister(5, 7, Some(own));
        assert_eq!(r.lobby(own), None);
        assert_eq!(r.session_count(), 1);
    }
}
