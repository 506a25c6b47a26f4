//! # Chirp Shared
//!
//! Form payloads shared between the web server and its tests.

pub mod dto;

pub use dto::{LoginForm, PostForm, SignupForm};
