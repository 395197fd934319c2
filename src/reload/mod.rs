//! Reload triggers.
//!
//! The certificate core never decides when to reload. The triggers in this
//! module do, and they only know about [`traits::reloadable::Reloadable`]:
//!
//! - interval: reload every N seconds
//! - watch: reload when the certificate or key file changes on disk
//! - signal: reload on SIGHUP (unix)
//!
//! The API endpoint `POST /api/certificate/reload` is a fourth trigger, see
//! [`crate::api`]. Every trigger runs the reload on the blocking pool and stops
//! when the shutdown channel changes.

pub mod traits;

pub mod structs;

pub mod impls;

#[allow(clippy::module_inception)]
pub mod reload;
