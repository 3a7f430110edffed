//! Session-backed models.

pub mod cart;
pub mod session;

pub use cart::SessionCart;
pub use session::keys as session_keys;
