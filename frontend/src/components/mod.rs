// Reusable components live here.

pub mod article_card;
pub mod comment_section;
pub mod footer;
pub mod header;
pub mod like_button;
pub mod notice;
pub mod pagination;
