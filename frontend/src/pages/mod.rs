pub mod about;
pub mod blog;
pub mod blog_detail;
pub mod contact;
pub mod home;
pub mod not_found;
