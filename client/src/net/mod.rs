//! Networking modules for the certificate backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns every REST call the UI makes: processing a certificate,
//! sending it for approval and submitting an appeal.

pub mod api;
