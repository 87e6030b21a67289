//! Access to the remote move-resolution service.

mod rest_client;
mod service;

pub use rest_client::RestMoveClient;
pub use service::MoveService;
