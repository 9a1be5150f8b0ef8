pub mod client;
pub mod types;

pub use client::StoreApi;
pub use types::{
  AuthSession, Comment, CommentAuthor, CommentPage, Post, PostPage, Product, ProductInput, ProductPage, ProductPatch,
  Profile, ProfilePatch, UserPage,
};
