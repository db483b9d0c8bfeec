// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `rendezvous.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:rendezvous.Endpoint)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Endpoint {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Endpoint.address)
    pub address: ::std::vec::Vec<u8>,
    // @@protoc_insertion_point(field:rendezvous.Endpoint.port)
    pub port: u32,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Endpoint.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Endpoint {
    fn default() -> &'a Endpoint {
        <Endpoint as ::protobuf::Message>::default_instance()
    }
}

impl Endpoint {
    pub fn new() -> Endpoint {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "address",
            |m: &Endpoint| { &m.address },
            |m: &mut Endpoint| { &mut m.address },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "port",
            |m: &Endpoint| { &m.port },
            |m: &mut Endpoint| { &mut m.port },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Endpoint>(
            "Endpoint",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Endpoint {
    const NAME: &'static str = "Endpoint";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.address = is.read_bytes()?;
                },
                16 => {
                    self.port = is.read_uint32()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.address.is_empty() {
            my_size += ::protobuf::rt::bytes_size(1, &self.address);
        }
        if self.port != 0 {
            my_size += ::protobuf::rt::uint32_size(2, self.port);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.address.is_empty() {
            os.write_bytes(1, &self.address)?;
        }
        if self.port != 0 {
            os.write_uint32(2, self.port)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Endpoint {
        Endpoint::new()
    }

    fn clear(&mut self) {
        self.address.clear();
        self.port = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Endpoint {
        static instance: Endpoint = Endpoint {
            address: ::std::vec::Vec::new(),
            port: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Endpoint {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Endpoint").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Endpoint {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.AddressInfo)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct AddressInfo {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.AddressInfo.peer_id)
    pub peer_id: u64,
    // @@protoc_insertion_point(field:rendezvous.AddressInfo.public_endpoint)
    pub public_endpoint: ::protobuf::MessageField<Endpoint>,
    // @@protoc_insertion_point(field:rendezvous.AddressInfo.private_endpoint)
    pub private_endpoint: ::protobuf::MessageField<Endpoint>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.AddressInfo.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a AddressInfo {
    fn default() -> &'a AddressInfo {
        <AddressInfo as ::protobuf::Message>::default_instance()
    }
}

impl AddressInfo {
    pub fn new() -> AddressInfo {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "peer_id",
            |m: &AddressInfo| { &m.peer_id },
            |m: &mut AddressInfo| { &mut m.peer_id },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Endpoint>(
            "public_endpoint",
            |m: &AddressInfo| { &m.public_endpoint },
            |m: &mut AddressInfo| { &mut m.public_endpoint },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Endpoint>(
            "private_endpoint",
            |m: &AddressInfo| { &m.private_endpoint },
            |m: &mut AddressInfo| { &mut m.private_endpoint },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<AddressInfo>(
            "AddressInfo",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for AddressInfo {
    const NAME: &'static str = "AddressInfo";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.peer_id = is.read_uint64()?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.public_endpoint)?;
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.private_endpoint)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.peer_id != 0 {
            my_size += ::protobuf::rt::uint64_size(1, self.peer_id);
        }
        if let Some(v) = self.public_endpoint.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if let Some(v) = self.private_endpoint.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.peer_id != 0 {
            os.write_uint64(1, self.peer_id)?;
        }
        if let Some(v) = self.public_endpoint.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        if let Some(v) = self.private_endpoint.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> AddressInfo {
        AddressInfo::new()
    }

    fn clear(&mut self) {
        self.peer_id = 0;
        self.public_endpoint.clear();
        self.private_endpoint.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static AddressInfo {
        static instance: AddressInfo = AddressInfo {
            peer_id: 0,
            public_endpoint: ::protobuf::MessageField::none(),
            private_endpoint: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for AddressInfo {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("AddressInfo").unwrap()).clone()
    }
}

impl ::std::fmt::Display for AddressInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for AddressInfo {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.LobbyInfo)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct LobbyInfo {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.LobbyInfo.lobby_id)
    pub lobby_id: u64,
    // @@protoc_insertion_point(field:rendezvous.LobbyInfo.host_id)
    pub host_id: u64,
    // @@protoc_insertion_point(field:rendezvous.LobbyInfo.capacity)
    pub capacity: u32,
    // @@protoc_insertion_point(field:rendezvous.LobbyInfo.member_ids)
    pub member_ids: ::std::vec::Vec<u64>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.LobbyInfo.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a LobbyInfo {
    fn default() -> &'a LobbyInfo {
        <LobbyInfo as ::protobuf::Message>::default_instance()
    }
}

impl LobbyInfo {
    pub fn new() -> LobbyInfo {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(4);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "lobby_id",
            |m: &LobbyInfo| { &m.lobby_id },
            |m: &mut LobbyInfo| { &mut m.lobby_id },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "host_id",
            |m: &LobbyInfo| { &m.host_id },
            |m: &mut LobbyInfo| { &mut m.host_id },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "capacity",
            |m: &LobbyInfo| { &m.capacity },
            |m: &mut LobbyInfo| { &mut m.capacity },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "member_ids",
            |m: &LobbyInfo| { &m.member_ids },
            |m: &mut LobbyInfo| { &mut m.member_ids },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<LobbyInfo>(
            "LobbyInfo",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for LobbyInfo {
    const NAME: &'static str = "LobbyInfo";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.lobby_id = is.read_uint64()?;
                },
                16 => {
                    self.host_id = is.read_uint64()?;
                },
                24 => {
                    self.capacity = is.read_uint32()?;
                },
                34 => {
                    is.read_repeated_packed_uint64_into(&mut self.member_ids)?;
                },
                32 => {
                    self.member_ids.push(is.read_uint64()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.lobby_id != 0 {
            my_size += ::protobuf::rt::uint64_size(1, self.lobby_id);
        }
        if self.host_id != 0 {
            my_size += ::protobuf::rt::uint64_size(2, self.host_id);
        }
        if self.capacity != 0 {
            my_size += ::protobuf::rt::uint32_size(3, self.capacity);
        }
        my_size += ::protobuf::rt::vec_packed_uint64_size(4, &self.member_ids);
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.lobby_id != 0 {
            os.write_uint64(1, self.lobby_id)?;
        }
        if self.host_id != 0 {
            os.write_uint64(2, self.host_id)?;
        }
        if self.capacity != 0 {
            os.write_uint32(3, self.capacity)?;
        }
        os.write_repeated_packed_uint64(4, &self.member_ids)?;
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> LobbyInfo {
        LobbyInfo::new()
    }

    fn clear(&mut self) {
        self.lobby_id = 0;
        self.host_id = 0;
        self.capacity = 0;
        self.member_ids.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static LobbyInfo {
        static instance: LobbyInfo = LobbyInfo {
            lobby_id: 0,
            host_id: 0,
            capacity: 0,
            member_ids: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for LobbyInfo {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("LobbyInfo").unwrap()).clone()
    }
}

impl ::std::fmt::Display for LobbyInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for LobbyInfo {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Initialization)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Initialization {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Initialization.peer_id)
    pub peer_id: u64,
    // @@protoc_insertion_point(field:rendezvous.Initialization.private_endpoint)
    pub private_endpoint: ::protobuf::MessageField<Endpoint>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Initialization.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Initialization {
    fn default() -> &'a Initialization {
        <Initialization as ::protobuf::Message>::default_instance()
    }
}

impl Initialization {
    pub fn new() -> Initialization {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "peer_id",
            |m: &Initialization| { &m.peer_id },
            |m: &mut Initialization| { &mut m.peer_id },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, Endpoint>(
            "private_endpoint",
            |m: &Initialization| { &m.private_endpoint },
            |m: &mut Initialization| { &mut m.private_endpoint },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Initialization>(
            "Initialization",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Initialization {
    const NAME: &'static str = "Initialization";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.peer_id = is.read_uint64()?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.private_endpoint)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.peer_id != 0 {
            my_size += ::protobuf::rt::uint64_size(1, self.peer_id);
        }
        if let Some(v) = self.private_endpoint.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.peer_id != 0 {
            os.write_uint64(1, self.peer_id)?;
        }
        if let Some(v) = self.private_endpoint.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Initialization {
        Initialization::new()
    }

    fn clear(&mut self) {
        self.peer_id = 0;
        self.private_endpoint.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Initialization {
        static instance: Initialization = Initialization {
            peer_id: 0,
            private_endpoint: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Initialization {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Initialization").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Initialization {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Initialization {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Ping)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Ping {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.Ping.data)
    pub data: u64,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Ping.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Ping {
    fn default() -> &'a Ping {
        <Ping as ::protobuf::Message>::default_instance()
    }
}

impl Ping {
    pub fn new() -> Ping {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "data",
            |m: &Ping| { &m.data },
            |m: &mut Ping| { &mut m.data },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Ping>(
            "Ping",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Ping {
    const NAME: &'static str = "Ping";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.data = is.read_uint64()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.data != 0 {
            my_size += ::protobuf::rt::uint64_size(1, self.data);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.data != 0 {
            os.write_uint64(1, self.data)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Ping {
        Ping::new()
    }

    fn clear(&mut self) {
        self.data = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Ping {
        static instance: Ping = Ping {
            data: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Ping {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Ping").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Ping {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Ping {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.CreateLobby)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct CreateLobby {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.CreateLobby.password)
    pub password: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.CreateLobby.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a CreateLobby {
    fn default() -> &'a CreateLobby {
        <CreateLobby as ::protobuf::Message>::default_instance()
    }
}

impl CreateLobby {
    pub fn new() -> CreateLobby {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "password",
            |m: &CreateLobby| { &m.password },
            |m: &mut CreateLobby| { &mut m.password },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<CreateLobby>(
            "CreateLobby",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for CreateLobby {
    const NAME: &'static str = "CreateLobby";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.password = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if !self.password.is_empty() {
            my_size += ::protobuf::rt::string_size(1, &self.password);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if !self.password.is_empty() {
            os.write_string(1, &self.password)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> CreateLobby {
        CreateLobby::new()
    }

    fn clear(&mut self) {
        self.password.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static CreateLobby {
        static instance: CreateLobby = CreateLobby {
            password: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for CreateLobby {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("CreateLobby").unwrap()).clone()
    }
}

impl ::std::fmt::Display for CreateLobby {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CreateLobby {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.JoinLobby)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct JoinLobby {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.JoinLobby.lobby_id)
    pub lobby_id: u64,
    // @@protoc_insertion_point(field:rendezvous.JoinLobby.password)
    pub password: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.JoinLobby.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a JoinLobby {
    fn default() -> &'a JoinLobby {
        <JoinLobby as ::protobuf::Message>::default_instance()
    }
}

impl JoinLobby {
    pub fn new() -> JoinLobby {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "lobby_id",
            |m: &JoinLobby| { &m.lobby_id },
            |m: &mut JoinLobby| { &mut m.lobby_id },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "password",
            |m: &JoinLobby| { &m.password },
            |m: &mut JoinLobby| { &mut m.password },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<JoinLobby>(
            "JoinLobby",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for JoinLobby {
    const NAME: &'static str = "JoinLobby";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.lobby_id = is.read_uint64()?;
                },
                18 => {
                    self.password = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.lobby_id != 0 {
            my_size += ::protobuf::rt::uint64_size(1, self.lobby_id);
        }
        if !self.password.is_empty() {
            my_size += ::protobuf::rt::string_size(2, &self.password);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.lobby_id != 0 {
            os.write_uint64(1, self.lobby_id)?;
        }
        if !self.password.is_empty() {
            os.write_string(2, &self.password)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> JoinLobby {
        JoinLobby::new()
    }

    fn clear(&mut self) {
        self.lobby_id = 0;
        self.password.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static JoinLobby {
        static instance: JoinLobby = JoinLobby {
            lobby_id: 0,
            password: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for JoinLobby {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("JoinLobby").unwrap()).clone()
    }
}

impl ::std::fmt::Display for JoinLobby {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for JoinLobby {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.MyAddressInfo)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct MyAddressInfo {
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.MyAddressInfo.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a MyAddressInfo {
    fn default() -> &'a MyAddressInfo {
        <MyAddressInfo as ::protobuf::Message>::default_instance()
    }
}

impl MyAddressInfo {
    pub fn new() -> MyAddressInfo {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(0);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<MyAddressInfo>(
            "MyAddressInfo",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for MyAddressInfo {
    const NAME: &'static str = "MyAddressInfo";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> MyAddressInfo {
        MyAddressInfo::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static MyAddressInfo {
        static instance: MyAddressInfo = MyAddressInfo {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for MyAddressInfo {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("MyAddressInfo").unwrap()).clone()
    }
}

impl ::std::fmt::Display for MyAddressInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MyAddressInfo {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Leave)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Leave {
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Leave.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Leave {
    fn default() -> &'a Leave {
        <Leave as ::protobuf::Message>::default_instance()
    }
}

impl Leave {
    pub fn new() -> Leave {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(0);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Leave>(
            "Leave",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Leave {
    const NAME: &'static str = "Leave";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Leave {
        Leave::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Leave {
        static instance: Leave = Leave {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Leave {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Leave").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Leave {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Leave {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.MakeHost)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct MakeHost {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.MakeHost.peer_id)
    pub peer_id: u64,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.MakeHost.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a MakeHost {
    fn default() -> &'a MakeHost {
        <MakeHost as ::protobuf::Message>::default_instance()
    }
}

impl MakeHost {
    pub fn new() -> MakeHost {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "peer_id",
            |m: &MakeHost| { &m.peer_id },
            |m: &mut MakeHost| { &mut m.peer_id },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<MakeHost>(
            "MakeHost",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for MakeHost {
    const NAME: &'static str = "MakeHost";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.peer_id = is.read_uint64()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.peer_id != 0 {
            my_size += ::protobuf::rt::uint64_size(1, self.peer_id);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.peer_id != 0 {
            os.write_uint64(1, self.peer_id)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> MakeHost {
        MakeHost::new()
    }

    fn clear(&mut self) {
        self.peer_id = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static MakeHost {
        static instance: MakeHost = MakeHost {
            peer_id: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for MakeHost {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("MakeHost").unwrap()).clone()
    }
}

impl ::std::fmt::Display for MakeHost {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MakeHost {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Go)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Go {
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Go.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Go {
    fn default() -> &'a Go {
        <Go as ::protobuf::Message>::default_instance()
    }
}

impl Go {
    pub fn new() -> Go {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(0);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Go>(
            "Go",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Go {
    const NAME: &'static str = "Go";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Go {
        Go::new()
    }

    fn clear(&mut self) {
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Go {
        static instance: Go = Go {
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Go {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Go").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Go {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Go {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Request)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Request {
    // message oneof groups
    pub kind: ::std::option::Option<request::Kind>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Request.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Request {
    fn default() -> &'a Request {
        <Request as ::protobuf::Message>::default_instance()
    }
}

impl Request {
    pub fn new() -> Request {
        ::std::default::Default::default()
    }

    // .rendezvous.Initialization initialization = 1;

    pub fn initialization(&self) -> &Initialization {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Initialization(ref v)) => v,
            _ => <Initialization as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_initialization(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_initialization(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Initialization(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_initialization(&mut self, v: Initialization) {
        self.kind = ::std::option::Option::Some(request::Kind::Initialization(v))
    }

    // Mutable pointer to the field.
    pub fn mut_initialization(&mut self) -> &mut Initialization {
        if let ::std::option::Option::Some(request::Kind::Initialization(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::Initialization(Initialization::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::Initialization(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_initialization(&mut self) -> Initialization {
        if self.has_initialization() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::Initialization(v)) => v,
                _ => panic!(),
            }
        } else {
            Initialization::new()
        }
    }

    // .rendezvous.Ping ping = 2;

    pub fn ping(&self) -> &Ping {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Ping(ref v)) => v,
            _ => <Ping as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_ping(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_ping(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Ping(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_ping(&mut self, v: Ping) {
        self.kind = ::std::option::Option::Some(request::Kind::Ping(v))
    }

    // Mutable pointer to the field.
    pub fn mut_ping(&mut self) -> &mut Ping {
        if let ::std::option::Option::Some(request::Kind::Ping(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::Ping(Ping::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::Ping(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_ping(&mut self) -> Ping {
        if self.has_ping() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::Ping(v)) => v,
                _ => panic!(),
            }
        } else {
            Ping::new()
        }
    }

    // .rendezvous.CreateLobby create_lobby = 3;

    pub fn create_lobby(&self) -> &CreateLobby {
        match self.kind {
            ::std::option::Option::Some(request::Kind::CreateLobby(ref v)) => v,
            _ => <CreateLobby as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_create_lobby(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_create_lobby(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::CreateLobby(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_create_lobby(&mut self, v: CreateLobby) {
        self.kind = ::std::option::Option::Some(request::Kind::CreateLobby(v))
    }

    // Mutable pointer to the field.
    pub fn mut_create_lobby(&mut self) -> &mut CreateLobby {
        if let ::std::option::Option::Some(request::Kind::CreateLobby(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::CreateLobby(CreateLobby::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::CreateLobby(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_create_lobby(&mut self) -> CreateLobby {
        if self.has_create_lobby() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::CreateLobby(v)) => v,
                _ => panic!(),
            }
        } else {
            CreateLobby::new()
        }
    }

    // .rendezvous.JoinLobby join_lobby = 4;

    pub fn join_lobby(&self) -> &JoinLobby {
        match self.kind {
            ::std::option::Option::Some(request::Kind::JoinLobby(ref v)) => v,
            _ => <JoinLobby as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_join_lobby(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_join_lobby(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::JoinLobby(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_join_lobby(&mut self, v: JoinLobby) {
        self.kind = ::std::option::Option::Some(request::Kind::JoinLobby(v))
    }

    // Mutable pointer to the field.
    pub fn mut_join_lobby(&mut self) -> &mut JoinLobby {
        if let ::std::option::Option::Some(request::Kind::JoinLobby(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::JoinLobby(JoinLobby::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::JoinLobby(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_join_lobby(&mut self) -> JoinLobby {
        if self.has_join_lobby() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::JoinLobby(v)) => v,
                _ => panic!(),
            }
        } else {
            JoinLobby::new()
        }
    }

    // .rendezvous.MyAddressInfo my_address_info = 5;

    pub fn my_address_info(&self) -> &MyAddressInfo {
        match self.kind {
            ::std::option::Option::Some(request::Kind::MyAddressInfo(ref v)) => v,
            _ => <MyAddressInfo as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_my_address_info(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_my_address_info(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::MyAddressInfo(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_my_address_info(&mut self, v: MyAddressInfo) {
        self.kind = ::std::option::Option::Some(request::Kind::MyAddressInfo(v))
    }

    // Mutable pointer to the field.
    pub fn mut_my_address_info(&mut self) -> &mut MyAddressInfo {
        if let ::std::option::Option::Some(request::Kind::MyAddressInfo(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::MyAddressInfo(MyAddressInfo::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::MyAddressInfo(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_my_address_info(&mut self) -> MyAddressInfo {
        if self.has_my_address_info() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::MyAddressInfo(v)) => v,
                _ => panic!(),
            }
        } else {
            MyAddressInfo::new()
        }
    }

    // .rendezvous.Leave leave = 6;

    pub fn leave(&self) -> &Leave {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Leave(ref v)) => v,
            _ => <Leave as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_leave(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_leave(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Leave(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_leave(&mut self, v: Leave) {
        self.kind = ::std::option::Option::Some(request::Kind::Leave(v))
    }

    // Mutable pointer to the field.
    pub fn mut_leave(&mut self) -> &mut Leave {
        if let ::std::option::Option::Some(request::Kind::Leave(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::Leave(Leave::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::Leave(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_leave(&mut self) -> Leave {
        if self.has_leave() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::Leave(v)) => v,
                _ => panic!(),
            }
        } else {
            Leave::new()
        }
    }

    // .rendezvous.MakeHost make_host = 7;

    pub fn make_host(&self) -> &MakeHost {
        match self.kind {
            ::std::option::Option::Some(request::Kind::MakeHost(ref v)) => v,
            _ => <MakeHost as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_make_host(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_make_host(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::MakeHost(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_make_host(&mut self, v: MakeHost) {
        self.kind = ::std::option::Option::Some(request::Kind::MakeHost(v))
    }

    // Mutable pointer to the field.
    pub fn mut_make_host(&mut self) -> &mut MakeHost {
        if let ::std::option::Option::Some(request::Kind::MakeHost(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::MakeHost(MakeHost::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::MakeHost(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_make_host(&mut self) -> MakeHost {
        if self.has_make_host() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::MakeHost(v)) => v,
                _ => panic!(),
            }
        } else {
            MakeHost::new()
        }
    }

    // .rendezvous.Go go = 8;

    pub fn go(&self) -> &Go {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Go(ref v)) => v,
            _ => <Go as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_go(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_go(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(request::Kind::Go(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_go(&mut self, v: Go) {
        self.kind = ::std::option::Option::Some(request::Kind::Go(v))
    }

    // Mutable pointer to the field.
    pub fn mut_go(&mut self) -> &mut Go {
        if let ::std::option::Option::Some(request::Kind::Go(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(request::Kind::Go(Go::new()));
        }
        match self.kind {
            ::std::option::Option::Some(request::Kind::Go(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_go(&mut self) -> Go {
        if self.has_go() {
            match self.kind.take() {
                ::std::option::Option::Some(request::Kind::Go(v)) => v,
                _ => panic!(),
            }
        } else {
            Go::new()
        }
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(8);
        let mut oneofs = ::std::vec::Vec::with_capacity(1);
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Initialization>(
            "initialization",
            Request::has_initialization,
            Request::initialization,
            Request::mut_initialization,
            Request::set_initialization,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Ping>(
            "ping",
            Request::has_ping,
            Request::ping,
            Request::mut_ping,
            Request::set_ping,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, CreateLobby>(
            "create_lobby",
            Request::has_create_lobby,
            Request::create_lobby,
            Request::mut_create_lobby,
            Request::set_create_lobby,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, JoinLobby>(
            "join_lobby",
            Request::has_join_lobby,
            Request::join_lobby,
            Request::mut_join_lobby,
            Request::set_join_lobby,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, MyAddressInfo>(
            "my_address_info",
            Request::has_my_address_info,
            Request::my_address_info,
            Request::mut_my_address_info,
            Request::set_my_address_info,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Leave>(
            "leave",
            Request::has_leave,
            Request::leave,
            Request::mut_leave,
            Request::set_leave,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, MakeHost>(
            "make_host",
            Request::has_make_host,
            Request::make_host,
            Request::mut_make_host,
            Request::set_make_host,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, Go>(
            "go",
            Request::has_go,
            Request::go,
            Request::mut_go,
            Request::set_go,
        ));
        oneofs.push(request::Kind::generated_oneof_descriptor_data());
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Request>(
            "Request",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Request {
    const NAME: &'static str = "Request";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.kind = ::std::option::Option::Some(request::Kind::Initialization(is.read_message()?));
                },
                18 => {
                    self.kind = ::std::option::Option::Some(request::Kind::Ping(is.read_message()?));
                },
                26 => {
                    self.kind = ::std::option::Option::Some(request::Kind::CreateLobby(is.read_message()?));
                },
                34 => {
                    self.kind = ::std::option::Option::Some(request::Kind::JoinLobby(is.read_message()?));
                },
                42 => {
                    self.kind = ::std::option::Option::Some(request::Kind::MyAddressInfo(is.read_message()?));
                },
                50 => {
                    self.kind = ::std::option::Option::Some(request::Kind::Leave(is.read_message()?));
                },
                58 => {
                    self.kind = ::std::option::Option::Some(request::Kind::MakeHost(is.read_message()?));
                },
                66 => {
                    self.kind = ::std::option::Option::Some(request::Kind::Go(is.read_message()?));
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.kind {
            match v {
                &request::Kind::Initialization(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Kind::Ping(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Kind::CreateLobby(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Kind::JoinLobby(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Kind::MyAddressInfo(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Kind::Leave(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Kind::MakeHost(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &request::Kind::Go(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let ::std::option::Option::Some(ref v) = self.kind {
            match v {
                &request::Kind::Initialization(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
                },
                &request::Kind::Ping(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
                },
                &request::Kind::CreateLobby(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
                },
                &request::Kind::JoinLobby(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
                },
                &request::Kind::MyAddressInfo(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
                },
                &request::Kind::Leave(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(6, v, os)?;
                },
                &request::Kind::MakeHost(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(7, v, os)?;
                },
                &request::Kind::Go(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(8, v, os)?;
                },
            };
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Request {
        Request::new()
    }

    fn clear(&mut self) {
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Request {
        static instance: Request = Request {
            kind: ::std::option::Option::None,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Request {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Request").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Request {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Request {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Request`
pub mod request {

    #[derive(Clone,PartialEq,Debug)]
    #[non_exhaustive]
    // @@protoc_insertion_point(oneof:rendezvous.Request.kind)
    pub enum Kind {
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.initialization)
        Initialization(super::Initialization),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.ping)
        Ping(super::Ping),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.create_lobby)
        CreateLobby(super::CreateLobby),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.join_lobby)
        JoinLobby(super::JoinLobby),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.my_address_info)
        MyAddressInfo(super::MyAddressInfo),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.leave)
        Leave(super::Leave),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.make_host)
        MakeHost(super::MakeHost),
        // @@protoc_insertion_point(oneof_field:rendezvous.Request.go)
        Go(super::Go),
    }

    impl ::protobuf::Oneof for Kind {
    }

    impl ::protobuf::OneofFull for Kind {
        fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| <super::Request as ::protobuf::MessageFull>::descriptor().oneof_by_name("kind").unwrap()).clone()
        }
    }

    impl Kind {
        pub(in super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
            ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Kind>("kind")
        }
    }
}

// @@protoc_insertion_point(message:rendezvous.InitializationResult)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct InitializationResult {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.InitializationResult.sample_lobby_ids)
    pub sample_lobby_ids: ::std::vec::Vec<u64>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.InitializationResult.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a InitializationResult {
    fn default() -> &'a InitializationResult {
        <InitializationResult as ::protobuf::Message>::default_instance()
    }
}

impl InitializationResult {
    pub fn new() -> InitializationResult {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "sample_lobby_ids",
            |m: &InitializationResult| { &m.sample_lobby_ids },
            |m: &mut InitializationResult| { &mut m.sample_lobby_ids },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<InitializationResult>(
            "InitializationResult",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for InitializationResult {
    const NAME: &'static str = "InitializationResult";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    is.read_repeated_packed_uint64_into(&mut self.sample_lobby_ids)?;
                },
                8 => {
                    self.sample_lobby_ids.push(is.read_uint64()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        my_size += ::protobuf::rt::vec_packed_uint64_size(1, &self.sample_lobby_ids);
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        os.write_repeated_packed_uint64(1, &self.sample_lobby_ids)?;
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> InitializationResult {
        InitializationResult::new()
    }

    fn clear(&mut self) {
        self.sample_lobby_ids.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static InitializationResult {
        static instance: InitializationResult = InitializationResult {
            sample_lobby_ids: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for InitializationResult {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("InitializationResult").unwrap()).clone()
    }
}

impl ::std::fmt::Display for InitializationResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for InitializationResult {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.CreateLobbyResult)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct CreateLobbyResult {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.CreateLobbyResult.success)
    pub success: bool,
    // @@protoc_insertion_point(field:rendezvous.CreateLobbyResult.lobby_id)
    pub lobby_id: u64,
    // @@protoc_insertion_point(field:rendezvous.CreateLobbyResult.lobby)
    pub lobby: ::protobuf::MessageField<LobbyInfo>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.CreateLobbyResult.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a CreateLobbyResult {
    fn default() -> &'a CreateLobbyResult {
        <CreateLobbyResult as ::protobuf::Message>::default_instance()
    }
}

impl CreateLobbyResult {
    pub fn new() -> CreateLobbyResult {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "success",
            |m: &CreateLobbyResult| { &m.success },
            |m: &mut CreateLobbyResult| { &mut m.success },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "lobby_id",
            |m: &CreateLobbyResult| { &m.lobby_id },
            |m: &mut CreateLobbyResult| { &mut m.lobby_id },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, LobbyInfo>(
            "lobby",
            |m: &CreateLobbyResult| { &m.lobby },
            |m: &mut CreateLobbyResult| { &mut m.lobby },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<CreateLobbyResult>(
            "CreateLobbyResult",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for CreateLobbyResult {
    const NAME: &'static str = "CreateLobbyResult";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.success = is.read_bool()?;
                },
                16 => {
                    self.lobby_id = is.read_uint64()?;
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.lobby)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.success != false {
            my_size += 1 + 1;
        }
        if self.lobby_id != 0 {
            my_size += ::protobuf::rt::uint64_size(2, self.lobby_id);
        }
        if let Some(v) = self.lobby.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.success != false {
            os.write_bool(1, self.success)?;
        }
        if self.lobby_id != 0 {
            os.write_uint64(2, self.lobby_id)?;
        }
        if let Some(v) = self.lobby.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> CreateLobbyResult {
        CreateLobbyResult::new()
    }

    fn clear(&mut self) {
        self.success = false;
        self.lobby_id = 0;
        self.lobby.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static CreateLobbyResult {
        static instance: CreateLobbyResult = CreateLobbyResult {
            success: false,
            lobby_id: 0,
            lobby: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for CreateLobbyResult {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("CreateLobbyResult").unwrap()).clone()
    }
}

impl ::std::fmt::Display for CreateLobbyResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for CreateLobbyResult {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.JoinLobbyResult)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct JoinLobbyResult {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.JoinLobbyResult.success)
    pub success: bool,
    // @@protoc_insertion_point(field:rendezvous.JoinLobbyResult.lobby)
    pub lobby: ::protobuf::MessageField<LobbyInfo>,
    // @@protoc_insertion_point(field:rendezvous.JoinLobbyResult.reason)
    pub reason: ::std::string::String,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.JoinLobbyResult.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a JoinLobbyResult {
    fn default() -> &'a JoinLobbyResult {
        <JoinLobbyResult as ::protobuf::Message>::default_instance()
    }
}

impl JoinLobbyResult {
    pub fn new() -> JoinLobbyResult {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "success",
            |m: &JoinLobbyResult| { &m.success },
            |m: &mut JoinLobbyResult| { &mut m.success },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, LobbyInfo>(
            "lobby",
            |m: &JoinLobbyResult| { &m.lobby },
            |m: &mut JoinLobbyResult| { &mut m.lobby },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "reason",
            |m: &JoinLobbyResult| { &m.reason },
            |m: &mut JoinLobbyResult| { &mut m.reason },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<JoinLobbyResult>(
            "JoinLobbyResult",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for JoinLobbyResult {
    const NAME: &'static str = "JoinLobbyResult";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.success = is.read_bool()?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.lobby)?;
                },
                26 => {
                    self.reason = is.read_string()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.success != false {
            my_size += 1 + 1;
        }
        if let Some(v) = self.lobby.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if !self.reason.is_empty() {
            my_size += ::protobuf::rt::string_size(3, &self.reason);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.success != false {
            os.write_bool(1, self.success)?;
        }
        if let Some(v) = self.lobby.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        if !self.reason.is_empty() {
            os.write_string(3, &self.reason)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> JoinLobbyResult {
        JoinLobbyResult::new()
    }

    fn clear(&mut self) {
        self.success = false;
        self.lobby.clear();
        self.reason.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static JoinLobbyResult {
        static instance: JoinLobbyResult = JoinLobbyResult {
            success: false,
            lobby: ::protobuf::MessageField::none(),
            reason: ::std::string::String::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for JoinLobbyResult {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("JoinLobbyResult").unwrap()).clone()
    }
}

impl ::std::fmt::Display for JoinLobbyResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for JoinLobbyResult {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.LeaveResult)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct LeaveResult {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.LeaveResult.success)
    pub success: bool,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.LeaveResult.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a LeaveResult {
    fn default() -> &'a LeaveResult {
        <LeaveResult as ::protobuf::Message>::default_instance()
    }
}

impl LeaveResult {
    pub fn new() -> LeaveResult {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "success",
            |m: &LeaveResult| { &m.success },
            |m: &mut LeaveResult| { &mut m.success },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<LeaveResult>(
            "LeaveResult",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for LeaveResult {
    const NAME: &'static str = "LeaveResult";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.success = is.read_bool()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.success != false {
            my_size += 1 + 1;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.success != false {
            os.write_bool(1, self.success)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> LeaveResult {
        LeaveResult::new()
    }

    fn clear(&mut self) {
        self.success = false;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static LeaveResult {
        static instance: LeaveResult = LeaveResult {
            success: false,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for LeaveResult {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("LeaveResult").unwrap()).clone()
    }
}

impl ::std::fmt::Display for LeaveResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for LeaveResult {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.MakeHostResult)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct MakeHostResult {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.MakeHostResult.success)
    pub success: bool,
    // @@protoc_insertion_point(field:rendezvous.MakeHostResult.host_id)
    pub host_id: u64,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.MakeHostResult.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a MakeHostResult {
    fn default() -> &'a MakeHostResult {
        <MakeHostResult as ::protobuf::Message>::default_instance()
    }
}

impl MakeHostResult {
    pub fn new() -> MakeHostResult {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "success",
            |m: &MakeHostResult| { &m.success },
            |m: &mut MakeHostResult| { &mut m.success },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "host_id",
            |m: &MakeHostResult| { &m.host_id },
            |m: &mut MakeHostResult| { &mut m.host_id },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<MakeHostResult>(
            "MakeHostResult",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for MakeHostResult {
    const NAME: &'static str = "MakeHostResult";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.success = is.read_bool()?;
                },
                16 => {
                    self.host_id = is.read_uint64()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.success != false {
            my_size += 1 + 1;
        }
        if self.host_id != 0 {
            my_size += ::protobuf::rt::uint64_size(2, self.host_id);
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.success != false {
            os.write_bool(1, self.success)?;
        }
        if self.host_id != 0 {
            os.write_uint64(2, self.host_id)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> MakeHostResult {
        MakeHostResult::new()
    }

    fn clear(&mut self) {
        self.success = false;
        self.host_id = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static MakeHostResult {
        static instance: MakeHostResult = MakeHostResult {
            success: false,
            host_id: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for MakeHostResult {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("MakeHostResult").unwrap()).clone()
    }
}

impl ::std::fmt::Display for MakeHostResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for MakeHostResult {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.GoResult)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct GoResult {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.GoResult.success)
    pub success: bool,
    // @@protoc_insertion_point(field:rendezvous.GoResult.peers)
    pub peers: ::std::vec::Vec<AddressInfo>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.GoResult.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a GoResult {
    fn default() -> &'a GoResult {
        <GoResult as ::protobuf::Message>::default_instance()
    }
}

impl GoResult {
    pub fn new() -> GoResult {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "success",
            |m: &GoResult| { &m.success },
            |m: &mut GoResult| { &mut m.success },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "peers",
            |m: &GoResult| { &m.peers },
            |m: &mut GoResult| { &mut m.peers },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<GoResult>(
            "GoResult",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for GoResult {
    const NAME: &'static str = "GoResult";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.success = is.read_bool()?;
                },
                18 => {
                    self.peers.push(is.read_message()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.success != false {
            my_size += 1 + 1;
        }
        for value in &self.peers {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.success != false {
            os.write_bool(1, self.success)?;
        }
        for v in &self.peers {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> GoResult {
        GoResult::new()
    }

    fn clear(&mut self) {
        self.success = false;
        self.peers.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static GoResult {
        static instance: GoResult = GoResult {
            success: false,
            peers: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for GoResult {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("GoResult").unwrap()).clone()
    }
}

impl ::std::fmt::Display for GoResult {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for GoResult {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.BecomeHost)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BecomeHost {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.BecomeHost.lobby)
    pub lobby: ::protobuf::MessageField<LobbyInfo>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.BecomeHost.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BecomeHost {
    fn default() -> &'a BecomeHost {
        <BecomeHost as ::protobuf::Message>::default_instance()
    }
}

impl BecomeHost {
    pub fn new() -> BecomeHost {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, LobbyInfo>(
            "lobby",
            |m: &BecomeHost| { &m.lobby },
            |m: &mut BecomeHost| { &mut m.lobby },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BecomeHost>(
            "BecomeHost",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BecomeHost {
    const NAME: &'static str = "BecomeHost";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.lobby)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.lobby.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.lobby.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> BecomeHost {
        BecomeHost::new()
    }

    fn clear(&mut self) {
        self.lobby.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BecomeHost {
        static instance: BecomeHost = BecomeHost {
            lobby: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BecomeHost {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BecomeHost").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BecomeHost {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BecomeHost {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.HostAddressInfo)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct HostAddressInfo {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.HostAddressInfo.host)
    pub host: ::protobuf::MessageField<AddressInfo>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.HostAddressInfo.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a HostAddressInfo {
    fn default() -> &'a HostAddressInfo {
        <HostAddressInfo as ::protobuf::Message>::default_instance()
    }
}

impl HostAddressInfo {
    pub fn new() -> HostAddressInfo {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, AddressInfo>(
            "host",
            |m: &HostAddressInfo| { &m.host },
            |m: &mut HostAddressInfo| { &mut m.host },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<HostAddressInfo>(
            "HostAddressInfo",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for HostAddressInfo {
    const NAME: &'static str = "HostAddressInfo";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.host)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.host.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.host.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> HostAddressInfo {
        HostAddressInfo::new()
    }

    fn clear(&mut self) {
        self.host.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static HostAddressInfo {
        static instance: HostAddressInfo = HostAddressInfo {
            host: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for HostAddressInfo {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("HostAddressInfo").unwrap()).clone()
    }
}

impl ::std::fmt::Display for HostAddressInfo {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for HostAddressInfo {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.LobbyUpdate)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct LobbyUpdate {
    // message fields
    // @@protoc_insertion_point(field:rendezvous.LobbyUpdate.lobby)
    pub lobby: ::protobuf::MessageField<LobbyInfo>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.LobbyUpdate.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a LobbyUpdate {
    fn default() -> &'a LobbyUpdate {
        <LobbyUpdate as ::protobuf::Message>::default_instance()
    }
}

impl LobbyUpdate {
    pub fn new() -> LobbyUpdate {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(1);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, LobbyInfo>(
            "lobby",
            |m: &LobbyUpdate| { &m.lobby },
            |m: &mut LobbyUpdate| { &mut m.lobby },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<LobbyUpdate>(
            "LobbyUpdate",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for LobbyUpdate {
    const NAME: &'static str = "LobbyUpdate";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.lobby)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let Some(v) = self.lobby.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let Some(v) = self.lobby.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> LobbyUpdate {
        LobbyUpdate::new()
    }

    fn clear(&mut self) {
        self.lobby.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static LobbyUpdate {
        static instance: LobbyUpdate = LobbyUpdate {
            lobby: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for LobbyUpdate {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("LobbyUpdate").unwrap()).clone()
    }
}

impl ::std::fmt::Display for LobbyUpdate {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for LobbyUpdate {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:rendezvous.Response)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct Response {
    // message oneof groups
    pub kind: ::std::option::Option<response::Kind>,
    // special fields
    // @@protoc_insertion_point(special_field:rendezvous.Response.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a Response {
    fn default() -> &'a Response {
        <Response as ::protobuf::Message>::default_instance()
    }
}

impl Response {
    pub fn new() -> Response {
        ::std::default::Default::default()
    }

    // .rendezvous.InitializationResult initialization_result = 1;

    pub fn initialization_result(&self) -> &InitializationResult {
        match self.kind {
            ::std::option::Option::Some(response::Kind::InitializationResult(ref v)) => v,
            _ => <InitializationResult as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_initialization_result(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_initialization_result(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::InitializationResult(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_initialization_result(&mut self, v: InitializationResult) {
        self.kind = ::std::option::Option::Some(response::Kind::InitializationResult(v))
    }

    // Mutable pointer to the field.
    pub fn mut_initialization_result(&mut self) -> &mut InitializationResult {
        if let ::std::option::Option::Some(response::Kind::InitializationResult(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::InitializationResult(InitializationResult::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::InitializationResult(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_initialization_result(&mut self) -> InitializationResult {
        if self.has_initialization_result() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::InitializationResult(v)) => v,
                _ => panic!(),
            }
        } else {
            InitializationResult::new()
        }
    }

    // .rendezvous.CreateLobbyResult create_lobby_result = 2;

    pub fn create_lobby_result(&self) -> &CreateLobbyResult {
        match self.kind {
            ::std::option::Option::Some(response::Kind::CreateLobbyResult(ref v)) => v,
            _ => <CreateLobbyResult as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_create_lobby_result(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_create_lobby_result(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::CreateLobbyResult(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_create_lobby_result(&mut self, v: CreateLobbyResult) {
        self.kind = ::std::option::Option::Some(response::Kind::CreateLobbyResult(v))
    }

    // Mutable pointer to the field.
    pub fn mut_create_lobby_result(&mut self) -> &mut CreateLobbyResult {
        if let ::std::option::Option::Some(response::Kind::CreateLobbyResult(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::CreateLobbyResult(CreateLobbyResult::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::CreateLobbyResult(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_create_lobby_result(&mut self) -> CreateLobbyResult {
        if self.has_create_lobby_result() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::CreateLobbyResult(v)) => v,
                _ => panic!(),
            }
        } else {
            CreateLobbyResult::new()
        }
    }

    // .rendezvous.JoinLobbyResult join_lobby_result = 3;

    pub fn join_lobby_result(&self) -> &JoinLobbyResult {
        match self.kind {
            ::std::option::Option::Some(response::Kind::JoinLobbyResult(ref v)) => v,
            _ => <JoinLobbyResult as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_join_lobby_result(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_join_lobby_result(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::JoinLobbyResult(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_join_lobby_result(&mut self, v: JoinLobbyResult) {
        self.kind = ::std::option::Option::Some(response::Kind::JoinLobbyResult(v))
    }

    // Mutable pointer to the field.
    pub fn mut_join_lobby_result(&mut self) -> &mut JoinLobbyResult {
        if let ::std::option::Option::Some(response::Kind::JoinLobbyResult(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::JoinLobbyResult(JoinLobbyResult::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::JoinLobbyResult(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_join_lobby_result(&mut self) -> JoinLobbyResult {
        if self.has_join_lobby_result() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::JoinLobbyResult(v)) => v,
                _ => panic!(),
            }
        } else {
            JoinLobbyResult::new()
        }
    }

    // .rendezvous.AddressInfo address_info = 4;

    pub fn address_info(&self) -> &AddressInfo {
        match self.kind {
            ::std::option::Option::Some(response::Kind::AddressInfo(ref v)) => v,
            _ => <AddressInfo as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_address_info(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_address_info(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::AddressInfo(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_address_info(&mut self, v: AddressInfo) {
        self.kind = ::std::option::Option::Some(response::Kind::AddressInfo(v))
    }

    // Mutable pointer to the field.
    pub fn mut_address_info(&mut self) -> &mut AddressInfo {
        if let ::std::option::Option::Some(response::Kind::AddressInfo(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::AddressInfo(AddressInfo::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::AddressInfo(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_address_info(&mut self) -> AddressInfo {
        if self.has_address_info() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::AddressInfo(v)) => v,
                _ => panic!(),
            }
        } else {
            AddressInfo::new()
        }
    }

    // .rendezvous.LeaveResult leave_result = 5;

    pub fn leave_result(&self) -> &LeaveResult {
        match self.kind {
            ::std::option::Option::Some(response::Kind::LeaveResult(ref v)) => v,
            _ => <LeaveResult as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_leave_result(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_leave_result(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::LeaveResult(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_leave_result(&mut self, v: LeaveResult) {
        self.kind = ::std::option::Option::Some(response::Kind::LeaveResult(v))
    }

    // Mutable pointer to the field.
    pub fn mut_leave_result(&mut self) -> &mut LeaveResult {
        if let ::std::option::Option::Some(response::Kind::LeaveResult(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::LeaveResult(LeaveResult::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::LeaveResult(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_leave_result(&mut self) -> LeaveResult {
        if self.has_leave_result() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::LeaveResult(v)) => v,
                _ => panic!(),
            }
        } else {
            LeaveResult::new()
        }
    }

    // .rendezvous.MakeHostResult make_host_result = 6;

    pub fn make_host_result(&self) -> &MakeHostResult {
        match self.kind {
            ::std::option::Option::Some(response::Kind::MakeHostResult(ref v)) => v,
            _ => <MakeHostResult as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_make_host_result(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_make_host_result(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::MakeHostResult(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_make_host_result(&mut self, v: MakeHostResult) {
        self.kind = ::std::option::Option::Some(response::Kind::MakeHostResult(v))
    }

    // Mutable pointer to the field.
    pub fn mut_make_host_result(&mut self) -> &mut MakeHostResult {
        if let ::std::option::Option::Some(response::Kind::MakeHostResult(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::MakeHostResult(MakeHostResult::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::MakeHostResult(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_make_host_result(&mut self) -> MakeHostResult {
        if self.has_make_host_result() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::MakeHostResult(v)) => v,
                _ => panic!(),
            }
        } else {
            MakeHostResult::new()
        }
    }

    // .rendezvous.GoResult go_result = 7;

    pub fn go_result(&self) -> &GoResult {
        match self.kind {
            ::std::option::Option::Some(response::Kind::GoResult(ref v)) => v,
            _ => <GoResult as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_go_result(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_go_result(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::GoResult(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_go_result(&mut self, v: GoResult) {
        self.kind = ::std::option::Option::Some(response::Kind::GoResult(v))
    }

    // Mutable pointer to the field.
    pub fn mut_go_result(&mut self) -> &mut GoResult {
        if let ::std::option::Option::Some(response::Kind::GoResult(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::GoResult(GoResult::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::GoResult(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_go_result(&mut self) -> GoResult {
        if self.has_go_result() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::GoResult(v)) => v,
                _ => panic!(),
            }
        } else {
            GoResult::new()
        }
    }

    // .rendezvous.BecomeHost become_host = 8;

    pub fn become_host(&self) -> &BecomeHost {
        match self.kind {
            ::std::option::Option::Some(response::Kind::BecomeHost(ref v)) => v,
            _ => <BecomeHost as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_become_host(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_become_host(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::BecomeHost(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_become_host(&mut self, v: BecomeHost) {
        self.kind = ::std::option::Option::Some(response::Kind::BecomeHost(v))
    }

    // Mutable pointer to the field.
    pub fn mut_become_host(&mut self) -> &mut BecomeHost {
        if let ::std::option::Option::Some(response::Kind::BecomeHost(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::BecomeHost(BecomeHost::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::BecomeHost(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_become_host(&mut self) -> BecomeHost {
        if self.has_become_host() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::BecomeHost(v)) => v,
                _ => panic!(),
            }
        } else {
            BecomeHost::new()
        }
    }

    // .rendezvous.HostAddressInfo host_address_info = 9;

    pub fn host_address_info(&self) -> &HostAddressInfo {
        match self.kind {
            ::std::option::Option::Some(response::Kind::HostAddressInfo(ref v)) => v,
            _ => <HostAddressInfo as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_host_address_info(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_host_address_info(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::HostAddressInfo(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_host_address_info(&mut self, v: HostAddressInfo) {
        self.kind = ::std::option::Option::Some(response::Kind::HostAddressInfo(v))
    }

    // Mutable pointer to the field.
    pub fn mut_host_address_info(&mut self) -> &mut HostAddressInfo {
        if let ::std::option::Option::Some(response::Kind::HostAddressInfo(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::HostAddressInfo(HostAddressInfo::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::HostAddressInfo(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_host_address_info(&mut self) -> HostAddressInfo {
        if self.has_host_address_info() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::HostAddressInfo(v)) => v,
                _ => panic!(),
            }
        } else {
            HostAddressInfo::new()
        }
    }

    // .rendezvous.LobbyUpdate lobby_update = 10;

    pub fn lobby_update(&self) -> &LobbyUpdate {
        match self.kind {
            ::std::option::Option::Some(response::Kind::LobbyUpdate(ref v)) => v,
            _ => <LobbyUpdate as ::protobuf::Message>::default_instance(),
        }
    }

    pub fn clear_lobby_update(&mut self) {
        self.kind = ::std::option::Option::None;
    }

    pub fn has_lobby_update(&self) -> bool {
        match self.kind {
            ::std::option::Option::Some(response::Kind::LobbyUpdate(..)) => true,
            _ => false,
        }
    }

    // Param is passed by value, moved
    pub fn set_lobby_update(&mut self, v: LobbyUpdate) {
        self.kind = ::std::option::Option::Some(response::Kind::LobbyUpdate(v))
    }

    // Mutable pointer to the field.
    pub fn mut_lobby_update(&mut self) -> &mut LobbyUpdate {
        if let ::std::option::Option::Some(response::Kind::LobbyUpdate(_)) = self.kind {
        } else {
            self.kind = ::std::option::Option::Some(response::Kind::LobbyUpdate(LobbyUpdate::new()));
        }
        match self.kind {
            ::std::option::Option::Some(response::Kind::LobbyUpdate(ref mut v)) => v,
            _ => panic!(),
        }
    }

    // Take field
    pub fn take_lobby_update(&mut self) -> LobbyUpdate {
        if self.has_lobby_update() {
            match self.kind.take() {
                ::std::option::Option::Some(response::Kind::LobbyUpdate(v)) => v,
                _ => panic!(),
            }
        } else {
            LobbyUpdate::new()
        }
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(10);
        let mut oneofs = ::std::vec::Vec::with_capacity(1);
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, InitializationResult>(
            "initialization_result",
            Response::has_initialization_result,
            Response::initialization_result,
            Response::mut_initialization_result,
            Response::set_initialization_result,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, CreateLobbyResult>(
            "create_lobby_result",
            Response::has_create_lobby_result,
            Response::create_lobby_result,
            Response::mut_create_lobby_result,
            Response::set_create_lobby_result,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, JoinLobbyResult>(
            "join_lobby_result",
            Response::has_join_lobby_result,
            Response::join_lobby_result,
            Response::mut_join_lobby_result,
            Response::set_join_lobby_result,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, AddressInfo>(
            "address_info",
            Response::has_address_info,
            Response::address_info,
            Response::mut_address_info,
            Response::set_address_info,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, LeaveResult>(
            "leave_result",
            Response::has_leave_result,
            Response::leave_result,
            Response::mut_leave_result,
            Response::set_leave_result,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, MakeHostResult>(
            "make_host_result",
            Response::has_make_host_result,
            Response::make_host_result,
            Response::mut_make_host_result,
            Response::set_make_host_result,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, GoResult>(
            "go_result",
            Response::has_go_result,
            Response::go_result,
            Response::mut_go_result,
            Response::set_go_result,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, BecomeHost>(
            "become_host",
            Response::has_become_host,
            Response::become_host,
            Response::mut_become_host,
            Response::set_become_host,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, HostAddressInfo>(
            "host_address_info",
            Response::has_host_address_info,
            Response::host_address_info,
            Response::mut_host_address_info,
            Response::set_host_address_info,
        ));
        fields.push(::protobuf::reflect::rt::v2::make_oneof_message_has_get_mut_set_accessor::<_, LobbyUpdate>(
            "lobby_update",
            Response::has_lobby_update,
            Response::lobby_update,
            Response::mut_lobby_update,
            Response::set_lobby_update,
        ));
        oneofs.push(response::Kind::generated_oneof_descriptor_data());
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Response>(
            "Response",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for Response {
    const NAME: &'static str = "Response";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                10 => {
                    self.kind = ::std::option::Option::Some(response::Kind::InitializationResult(is.read_message()?));
                },
                18 => {
                    self.kind = ::std::option::Option::Some(response::Kind::CreateLobbyResult(is.read_message()?));
                },
                26 => {
                    self.kind = ::std::option::Option::Some(response::Kind::JoinLobbyResult(is.read_message()?));
                },
                34 => {
                    self.kind = ::std::option::Option::Some(response::Kind::AddressInfo(is.read_message()?));
                },
                42 => {
                    self.kind = ::std::option::Option::Some(response::Kind::LeaveResult(is.read_message()?));
                },
                50 => {
                    self.kind = ::std::option::Option::Some(response::Kind::MakeHostResult(is.read_message()?));
                },
                58 => {
                    self.kind = ::std::option::Option::Some(response::Kind::GoResult(is.read_message()?));
                },
                66 => {
                    self.kind = ::std::option::Option::Some(response::Kind::BecomeHost(is.read_message()?));
                },
                74 => {
                    self.kind = ::std::option::Option::Some(response::Kind::HostAddressInfo(is.read_message()?));
                },
                82 => {
                    self.kind = ::std::option::Option::Some(response::Kind::LobbyUpdate(is.read_message()?));
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if let ::std::option::Option::Some(ref v) = self.kind {
            match v {
                &response::Kind::InitializationResult(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::CreateLobbyResult(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::JoinLobbyResult(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::AddressInfo(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::LeaveResult(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::MakeHostResult(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::GoResult(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::BecomeHost(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::HostAddressInfo(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
                &response::Kind::LobbyUpdate(ref v) => {
                    let len = v.compute_size();
                    my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
                },
            };
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if let ::std::option::Option::Some(ref v) = self.kind {
            match v {
                &response::Kind::InitializationResult(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(1, v, os)?;
                },
                &response::Kind::CreateLobbyResult(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
                },
                &response::Kind::JoinLobbyResult(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
                },
                &response::Kind::AddressInfo(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(4, v, os)?;
                },
                &response::Kind::LeaveResult(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(5, v, os)?;
                },
                &response::Kind::MakeHostResult(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(6, v, os)?;
                },
                &response::Kind::GoResult(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(7, v, os)?;
                },
                &response::Kind::BecomeHost(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(8, v, os)?;
                },
                &response::Kind::HostAddressInfo(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(9, v, os)?;
                },
                &response::Kind::LobbyUpdate(ref v) => {
                    ::protobuf::rt::write_message_field_with_cached_size(10, v, os)?;
                },
            };
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> Response {
        Response::new()
    }

    fn clear(&mut self) {
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.kind = ::std::option::Option::None;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static Response {
        static instance: Response = Response {
            kind: ::std::option::Option::None,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for Response {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("Response").unwrap()).clone()
    }
}

impl ::std::fmt::Display for Response {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for Response {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `Response`
pub mod response {

    #[derive(Clone,PartialEq,Debug)]
    #[non_exhaustive]
    // @@protoc_insertion_point(oneof:rendezvous.Response.kind)
    pub enum Kind {
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.initialization_result)
        InitializationResult(super::InitializationResult),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.create_lobby_result)
        CreateLobbyResult(super::CreateLobbyResult),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.join_lobby_result)
        JoinLobbyResult(super::JoinLobbyResult),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.address_info)
        AddressInfo(super::AddressInfo),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.leave_result)
        LeaveResult(super::LeaveResult),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.make_host_result)
        MakeHostResult(super::MakeHostResult),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.go_result)
        GoResult(super::GoResult),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.become_host)
        BecomeHost(super::BecomeHost),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.host_address_info)
        HostAddressInfo(super::HostAddressInfo),
        // @@protoc_insertion_point(oneof_field:rendezvous.Response.lobby_update)
        LobbyUpdate(super::LobbyUpdate),
    }

    impl ::protobuf::Oneof for Kind {
    }

    impl ::protobuf::OneofFull for Kind {
        fn descriptor() -> ::protobuf::reflect::OneofDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::OneofDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| <super::Response as ::protobuf::MessageFull>::descriptor().oneof_by_name("kind").unwrap()).clone()
        }
    }

    impl Kind {
        pub(in super) fn generated_oneof_descriptor_data() -> ::protobuf::reflect::GeneratedOneofDescriptorData {
            ::protobuf::reflect::GeneratedOneofDescriptorData::new::<Kind>("kind")
        }
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x10rendezvous.proto\x12\nrendezvous\"8\n\x08Endpoint\x12\x18\n\x07add\
    ress\x18\x01\x20\x01(\x0cR\x07address\x12\x12\n\x04port\x18\x02\x20\x01(\
    \rR\x04port\"\xa6\x01\n\x0bAddressInfo\x12\x17\n\x07peer_id\x18\x01\x20\
    \x01(\x04R\x06peerId\x12=\n\x0fpublic_endpoint\x18\x02\x20\x01(\x0b2\x14\
    .rendezvous.EndpointR\x0epublicEndpoint\x12?\n\x10private_endpoint\x18\
    \x03\x20\x01(\x0b2\x14.rendezvous.EndpointR\x0fprivateEndpoint\"z\n\tLob\
    byInfo\x12\x19\n\x08lobby_id\x18\x01\x20\x01(\x04R\x07lobbyId\x12\x17\n\
    \x07host_id\x18\x02\x20\x01(\x04R\x06hostId\x12\x1a\n\x08capacity\x18\
    \x03\x20\x01(\rR\x08capacity\x12\x1d\n\nmember_ids\x18\x04\x20\x03(\x04R\
    \tmemberIds\"j\n\x0eInitialization\x12\x17\n\x07peer_id\x18\x01\x20\x01(\
    \x04R\x06peerId\x12?\n\x10private_endpoint\x18\x02\x20\x01(\x0b2\x14.ren\
    dezvous.EndpointR\x0fprivateEndpoint\"\x1a\n\x04Ping\x12\x12\n\x04data\
    \x18\x01\x20\x01(\x04R\x04data\")\n\x0bCreateLobby\x12\x1a\n\x08password\
    \x18\x01\x20\x01(\tR\x08password\"B\n\tJoinLobby\x12\x19\n\x08lobby_id\
    \x18\x01\x20\x01(\x04R\x07lobbyId\x12\x1a\n\x08password\x18\x02\x20\x01(\
    \tR\x08password\"\x0f\n\rMyAddressInfo\"\x07\n\x05Leave\"#\n\x08MakeHost\
    \x12\x17\n\x07peer_id\x18\x01\x20\x01(\x04R\x06peerId\"\x04\n\x02Go\"\
    \xbc\x03\n\x07Request\x12D\n\x0einitialization\x18\x01\x20\x01(\x0b2\x1a\
    .rendezvous.InitializationH\0R\x0einitialization\x12&\n\x04ping\x18\x02\
    \x20\x01(\x0b2\x10.rendezvous.PingH\0R\x04ping\x12<\n\x0ccreate_lobby\
    \x18\x03\x20\x01(\x0b2\x17.rendezvous.CreateLobbyH\0R\x0bcreateLobby\x12\
    6\n\njoin_lobby\x18\x04\x20\x01(\x0b2\x15.rendezvous.JoinLobbyH\0R\tjoin\
    Lobby\x12C\n\x0fmy_address_info\x18\x05\x20\x01(\x0b2\x19.rendezvous.MyA\
    ddressInfoH\0R\rmyAddressInfo\x12)\n\x05leave\x18\x06\x20\x01(\x0b2\x11.\
    rendezvous.LeaveH\0R\x05leave\x123\n\tmake_host\x18\x07\x20\x01(\x0b2\
    \x14.rendezvous.MakeHostH\0R\x08makeHost\x12\x20\n\x02go\x18\x08\x20\x01\
    (\x0b2\x0e.rendezvous.GoH\0R\x02goB\x06\n\x04kind\"@\n\x14Initialization\
    Result\x12(\n\x10sample_lobby_ids\x18\x01\x20\x03(\x04R\x0esampleLobbyId\
    s\"u\n\x11CreateLobbyResult\x12\x18\n\x07success\x18\x01\x20\x01(\x08R\
    \x07success\x12\x19\n\x08lobby_id\x18\x02\x20\x01(\x04R\x07lobbyId\x12+\
    \n\x05lobby\x18\x03\x20\x01(\x0b2\x15.rendezvous.LobbyInfoR\x05lobby\"p\
    \n\x0fJoinLobbyResult\x12\x18\n\x07success\x18\x01\x20\x01(\x08R\x07succ\
    ess\x12+\n\x05lobby\x18\x02\x20\x01(\x0b2\x15.rendezvous.LobbyInfoR\x05l\
    obby\x12\x16\n\x06reason\x18\x03\x20\x01(\tR\x06reason\"'\n\x0bLeaveResu\
    lt\x12\x18\n\x07success\x18\x01\x20\x01(\x08R\x07success\"C\n\x0eMakeHos\
    tResult\x12\x18\n\x07success\x18\x01\x20\x01(\x08R\x07success\x12\x17\n\
    \x07host_id\x18\x02\x20\x01(\x04R\x06hostId\"S\n\x08GoResult\x12\x18\n\
    \x07success\x18\x01\x20\x01(\x08R\x07success\x12-\n\x05peers\x18\x02\x20\
    \x03(\x0b2\x17.rendezvous.AddressInfoR\x05peers\"9\n\nBecomeHost\x12+\n\
    \x05lobby\x18\x01\x20\x01(\x0b2\x15.rendezvous.LobbyInfoR\x05lobby\">\n\
    \x0fHostAddressInfo\x12+\n\x04host\x18\x01\x20\x01(\x0b2\x17.rendezvous.\
    AddressInfoR\x04host\":\n\x0bLobbyUpdate\x12+\n\x05lobby\x18\x01\x20\x01\
    (\x0b2\x15.rendezvous.LobbyInfoR\x05lobby\"\xc4\x05\n\x08Response\x12W\n\
    \x15initialization_result\x18\x01\x20\x01(\x0b2\x20.rendezvous.Initializ\
    ationResultH\0R\x14initializationResult\x12O\n\x13create_lobby_result\
    \x18\x02\x20\x01(\x0b2\x1d.rendezvous.CreateLobbyResultH\0R\x11createLob\
    byResult\x12I\n\x11join_lobby_result\x18\x03\x20\x01(\x0b2\x1b.rendezvou\
    s.JoinLobbyResultH\0R\x0fjoinLobbyResult\x12<\n\x0caddress_info\x18\x04\
    \x20\x01(\x0b2\x17.rendezvous.AddressInfoH\0R\x0baddressInfo\x12<\n\x0cl\
    eave_result\x18\x05\x20\x01(\x0b2\x17.rendezvous.LeaveResultH\0R\x0bleav\
    eResult\x12F\n\x10make_host_result\x18\x06\x20\x01(\x0b2\x1a.rendezvous.\
    MakeHostResultH\0R\x0emakeHostResult\x123\n\tgo_result\x18\x07\x20\x01(\
    \x0b2\x14.rendezvous.GoResultH\0R\x08goResult\x129\n\x0bbecome_host\x18\
    \x08\x20\x01(\x0b2\x16.rendezvous.BecomeHostH\0R\nbecomeHost\x12I\n\x11h\
    ost_address_info\x18\t\x20\x01(\x0b2\x1b.rendezvous.HostAddressInfoH\0R\
    \x0fhostAddressInfo\x12<\n\x0clobby_update\x18\n\x20\x01(\x0b2\x17.rende\
    zvous.LobbyUpdateH\0R\x0blobbyUpdateB\x06\n\x04kindb\x06proto3\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(22);
            messages.push(Endpoint::generated_message_descriptor_data());
            messages.push(AddressInfo::generated_message_descriptor_data());
            messages.push(LobbyInfo::generated_message_descriptor_data());
            messages.push(Initialization::generated_message_descriptor_data());
            messages.push(Ping::generated_message_descriptor_data());
            messages.push(CreateLobby::generated_message_descriptor_data());
            messages.push(JoinLobby::generated_message_descriptor_data());
            messages.push(MyAddressInfo::generated_message_descriptor_data());
            messages.push(Leave::generated_message_descriptor_data());
            messages.push(MakeHost::generated_message_descriptor_data());
            messages.push(Go::generated_message_descriptor_data());
            messages.push(Request::generated_message_descriptor_data());
            messages.push(InitializationResult::generated_message_descriptor_data());
            messages.push(CreateLobbyResult::generated_message_descriptor_data());
            messages.push(JoinLobbyResult::generated_message_descriptor_data());
            messages.push(LeaveResult::generated_message_descriptor_data());
            messages.push(MakeHostResult::generated_message_descriptor_data());
            messages.push(GoResult::generated_message_descriptor_data());
            messages.push(BecomeHost::generated_message_descriptor_data());
            messages.push(HostAddressInfo::generated_message_descriptor_data());
            messages.push(LobbyUpdate::generated_message_descriptor_data());
            messages.push(Response::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(0);
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
