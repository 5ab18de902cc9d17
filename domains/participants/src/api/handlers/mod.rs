//! HTTP handlers for the Participants domain

pub mod participants;
