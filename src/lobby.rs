//! Lobby membership.
//!
//! A lobby is a small group of peers (the host and up to `capacity - 1` others)
//! waiting for the host's "go". Members are kept in join order, which is also
//! the order used to pick a new host when the current one leaves.

use crate::address::{LobbyId, PeerId};
use crate::proto::rendezvous::LobbyInfo as LobbyInfoMsg;
use std::fmt;

pub const DEFAULT_CAPACITY: usize = 2;

/// Snapshot of a lobby as seen by clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyInfo {
    pub id: LobbyId,
    pub host_id: PeerId,
    pub capacity: usize,
    /// every member, host included, in join order
    pub members: Vec<PeerId>,
}

impl LobbyInfo {
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinError {
    NotFound,
    Full,
    WrongPassword,
    AlreadyMember,
}

impl fmt::Display for JoinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JoinError::NotFound => "lobby not found",
            JoinError::Full => "lobby is full",
            JoinError::WrongPassword => "wrong password",
            JoinError::AlreadyMember => "already a member",
        };
        f.write_str(s)
    }
}

impl std::error::Error for JoinError {}

/// What happened to the lobby after a member left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    NotMember,
    /// A non-host member left.
    Left,
    /// The host left, the earliest joined remaining member took over.
    HostChanged(PeerId),
    /// The last member left, the lobby must be destroyed.
    Empty,
}

#[derive(Debug)]
pub struct Lobby {
    id: LobbyId,
    host_id: PeerId,
    capacity: usize,
    password: String,
    members: Vec<PeerId>,
}

impl Lobby {
    /// Create a lobby with `host` as its only member.
    pub fn new(id: LobbyId, host: PeerId, capacity: usize, password: &str) -> Self {
        Self {
            id,
            host_id: host,
            capacity: capacity.max(1),
            password: password.to_string(),
            members: vec![host],
        }
    }

    pub fn id(&self) -> LobbyId {
        self.id
    }

    pub fn host_id(&self) -> PeerId {
        self.host_id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn members(&self) -> &[PeerId] {
        &self.members
    }

    pub fn contains(&self, peer: PeerId) -> bool {
        self.members.contains(&peer)
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn non_host_members(&self) -> impl Iterator<Item = PeerId> + '_ {
        let host = self.host_id;
        self.members.iter().copied().filter(move |id| *id != host)
    }

    pub fn try_join(&mut self, peer: PeerId, password: &str) -> Result<(), JoinError> {
        if self.contains(peer) {
            return Err(JoinError::AlreadyMember);
        }
        if self.password != password {
            return Err(JoinError::WrongPassword);
        }
        if self.is_full() {
            return Err(JoinError::Full);
        }

        self.members.push(peer);
        Ok(())
    }

    pub fn leave(&mut self, peer: PeerId) -> Departure {
        let pos = match self.members.iter().position(|id| *id == peer) {
            Some(pos) => pos,
            None => return Departure::NotMember,
        };
        self.members.remove(pos);

        match self.members.first() {
            None => Departure::Empty,
            Some(&next) if peer == self.host_id => {
                self.host_id = next;
                Departure::HostChanged(next)
            }
            Some(_) => Departure::Left,
        }
    }

    /// Hand the host role from `requester` to `target`.
    ///
    /// Only the current host may do this, and only to another member.
    pub fn make_host(&mut self, requester: PeerId, target: PeerId) -> bool {
        if requester != self.host_id || target == requester || !self.contains(target) {
            return false;
        }

        self.host_id = target;
        true
    }

    pub fn info(&self) -> LobbyInfo {
        LobbyInfo {
            id: self.id,
            host_id: self.host_id,
            capacity: self.capacity,
            members: self.members.clone(),
        }
    }
}

impl From<&LobbyInfo> for LobbyInfoMsg {
    fn from(info: &LobbyInfo) -> Self {
        let mut msg = LobbyInfoMsg::new();
        msg.lobby_id = info.id;
        msg.host_id = info.host_id;
        msg.capacity = u32::try_from(info.capacity).unwrap_or(u32::MAX);
        msg.member_ids = info.members.clone();
        msg
    }
}

impl From<&LobbyInfoMsg> for LobbyInfo {
    fn from(msg: &LobbyInfoMsg) -> Self {
        Self {
            id: msg.lobby_id,
            host_id: msg.host_id,
            capacity: msg.capacity as usize,
            members: msg.member_ids.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_invariants(lobby: &Lobby) {
        assert!(lobby.members().len() <= lobby.capacity());
        assert!(!lobby.members().is_empty());
        assert!(lobby.contains(lobby.host_id()));
    }

    #[test]
    fn test_join_until_full() {
        let mut lobby = Lobby::new(1, 10, 3, "");
        check_invariants(&lobby);

        assert_eq!(lobby.try_join(11, ""), Ok(()));
        assert_eq!(lobby.try_join(12, ""), Ok(()));
        assert_eq!(lobby.try_join(13, ""), Err(JoinError::Full));
        check_invariants(&lobby);
        assert_eq!(lobby.members(), &[10, 11, 12]);
    }

    #[test]
    fn test_default_capacity() {
        let mut lobby = Lobby::new(1, 10, DEFAULT_CAPACITY, "");
        lobby.try_join(11, "").unwrap();
        assert!(lobby.is_full());
        assert!(lobby.info().is_full());
        assert_eq!(lobby.try_join(12, ""), Err(JoinError::Full));
    }

    #[test]
    fn test_join_rejects() {
        let mut lobby = Lobby::new(1, 10, 4, "secret");
        assert_eq!(lobby.try_join(11, "guess"), Err(JoinError::WrongPassword));
        assert_eq!(lobby.try_join(10, "secret"), Err(JoinError::AlreadyMember));
        assert_eq!(lobby.try_join(11, "secret"), Ok(()));
    }

    #[test]
    fn test_host_succession_by_join_order() {
        let mut lobby = Lobby::new(1, 10, 4, "");
        lobby.try_join(11, "").unwrap();
        lobby.try_join(12, "").unwrap();

        assert_eq!(lobby.leave(10), Departure::HostChanged(11));
        check_invariants(&lobby);
        assert_eq!(lobby.host_id(), 11);

        assert_eq!(lobby.leave(12), Departure::Left);
        check_invariants(&lobby);
        assert_eq!(lobby.host_id(), 11);

        assert_eq!(lobby.leave(12), Departure::NotMember);
        assert_eq!(lobby.leave(11), Departure::Empty);
    }

    #[test]
    fn test_make_host() {
        let mut lobby = Lobby::new(1, 10, 2, "");
        lobby.try_join(11, "").unwrap();

        assert!(!lobby.make_host(10, 10));
        assert!(!lobby.make_host(10, 99));
        assert!(!lobby.make_host(11, 10));
        assert!(lobby.make_host(10, 11));
        assert_eq!(lobby.host_id(), 11);
        assert_eq!(lobby.non_host_members().collect::<Vec<_>>(), vec![10]);
        check_invariants(&lobby);
    }

    #[test]
    fn test_info_message() {
        let mut lobby = Lobby::new(5, 10, 2, "");
        lobby.try_join(11, "").unwrap();

        let msg = LobbyInfoMsg::from(&lobby.info());
        assert_eq!(msg.member_ids, vec![10, 11]);
        assert_eq!(LobbyInfo::from(&msg), lobby.info());
    }
}
