// Word search generation

pub mod grid;
pub mod locator;
pub mod validator;

pub use grid::GridGenerator;
pub use locator::locate_word;
pub use validator::WordValidator;
