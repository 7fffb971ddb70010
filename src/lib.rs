pub mod game;
pub mod scenario;
