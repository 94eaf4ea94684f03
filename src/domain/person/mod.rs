//! Person domain: wire types and sub-client.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{
    CreatePersonRequest, EmploymentResponse, FamilyMemberResponse, PersonResponse,
    UpdatePersonRequest,
};
