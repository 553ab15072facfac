pub mod accordion;
pub mod button;
pub mod card;
pub mod footer;
pub mod nav;
pub mod reveal;
