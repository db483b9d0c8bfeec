// @generated

pub mod rendezvous;
