pub mod grid;
pub mod user;
pub mod word;

pub use grid::{Grid, Orientation, Placement, Position, BLANK};
pub use user::User;
pub use word::Word;
