pub mod chat;
pub mod nav;
pub mod pages;
