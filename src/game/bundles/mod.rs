mod entity;

pub use entity::CharacterBundle;
