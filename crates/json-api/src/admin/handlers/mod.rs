//! Admin Handlers

pub(crate) mod status;
pub(crate) mod verify;
