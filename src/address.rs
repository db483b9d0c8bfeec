use crate::proto::rendezvous::{AddressInfo as AddressInfoMsg, Endpoint};
use protobuf::MessageField;
use std::io::{Error, ErrorKind::InvalidData, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// Peer identity, chosen by the client and reported on initialization.
pub type PeerId = u64;

/// Lobby identity, allocated by the rendezvous server starting at 1.
pub type LobbyId = u64;

/// The two endpoints a peer can be reached on.
///
/// `public` is the address the rendezvous server observed, `private` is the one
/// the peer reported for itself. Both are used by the connection race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressInfo {
    pub peer_id: PeerId,
    pub public: SocketAddr,
    pub private: SocketAddr,
}

pub(crate) fn encode_endpoint(addr: SocketAddr) -> Endpoint {
    let mut ep = Endpoint::new();
    ep.address = match addr.ip() {
        IpAddr::V4(ip) => ip.octets().to_vec(),
        IpAddr::V6(ip) => ip.octets().to_vec(),
    };
    ep.port = addr.port().into();
    ep
}

pub(crate) fn decode_endpoint(ep: &Endpoint) -> Result<SocketAddr> {
    let port = u16::try_from(ep.port).map_err(|_| Error::new(InvalidData, "invalid port"))?;

    let ip: IpAddr = match ep.address.len() {
        4 => {
            let octets: [u8; 4] = ep.address[..]
                .try_into()
                .map_err(|_| Error::new(InvalidData, "invalid ipv4 address"))?;
            Ipv4Addr::from(octets).into()
        }
        16 => {
            let octets: [u8; 16] = ep.address[..]
                .try_into()
                .map_err(|_| Error::new(InvalidData, "invalid ipv6 address"))?;
            Ipv6Addr::from(octets).into()
        }
        n => {
            return Err(Error::new(
                InvalidData,
                format!("invalid address length {}", n),
            ))
        }
    };

    Ok(SocketAddr::new(ip, port))
}

pub(crate) fn decode_endpoint_field(ep: &MessageField<Endpoint>) -> Result<SocketAddr> {
    ep.as_ref()
        .ok_or_else(|| Error::new(InvalidData, "missing endpoint"))
        .and_then(decode_endpoint)
}

impl From<AddressInfo> for AddressInfoMsg {
    fn from(info: AddressInfo) -> Self {
        let mut msg = AddressInfoMsg::new();
        msg.peer_id = info.peer_id;
        msg.public_endpoint = MessageField::some(encode_endpoint(info.public));
        msg.private_endpoint = MessageField::some(encode_endpoint(info.private));
        msg
    }
}

impl TryFrom<&AddressInfoMsg> for AddressInfo {
    type Error = Error;

    fn try_from(msg: &AddressInfoMsg) -> Result<Self> {
        Ok(Self {
            peer_id: msg.peer_id,
            public: decode_endpoint_field(&msg.public_endpoint)?,
            private: decode_endpoint_field(&msg.private_endpoint)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_v6() {
        let addr: SocketAddr = "[2001:db8::1]:4000".parse().unwrap();
        let ep = encode_endpoint(addr);
        assert_eq!(ep.address.len(), 16);
        assert_eq!(decode_endpoint(&ep).unwrap(), addr);
    }

    #[test]
    fn test_endpoint_bad_length() {
        let mut ep = Endpoint::new();
        ep.address = vec![10, 0, 0];
        ep.port = 80;
        assert_eq!(decode_endpoint(&ep).unwrap_err().kind(), InvalidData);
    }

    #[test]
    fn test_endpoint_bad_port() {
        let mut ep = encode_endpoint("10.0.0.1:80".parse().unwrap());
        ep.port = 70000;
        assert!(decode_endpoint(&ep).is_err());
    }

    #[test]
    fn test_address_info_missing_endpoint() {
        let info = AddressInfo {
            peer_id: 7,
            public: "1.2.3.4:5000".parse().unwrap(),
            private: "192.168.1.2:5000".parse().unwrap(),
        };
        let mut msg = AddressInfoMsg::from(info);
        assert_eq!(AddressInfo::try_from(&msg).unwrap(), info);

        msg.private_endpoint = MessageField::none();
        assert!(AddressInfo::try_from(&msg).is_err());
    }
}
