mod error;
mod game;
mod lobby;
mod player;
mod round;
mod view;

pub use error::*;
pub use game::*;
pub use lobby::*;
pub use player::*;
pub use round::*;
pub use view::*;
