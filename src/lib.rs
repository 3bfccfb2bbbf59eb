pub mod error;
pub mod game_boy;

pub use error::{CartridgeError, ExecutionError, InputError};
pub use game_boy::GameBoy;
