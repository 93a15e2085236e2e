//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, so that conversions from Serenity types into the
//! bot's own models can be tested without a live connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_invite, create_test_user};
//!
//! let inviter = create_test_user(111111111, "alice");
//! let invite = create_test_invite("abc", 10, Some(inviter));
//! ```
//!
//! # Available Factories
//!
//! - `invite::create_test_invite` - Create Serenity RichInvite objects
//! - `user::create_test_user` - Create Serenity User objects

pub mod invite;
pub mod user;

pub use invite::create_test_invite;
pub use user::create_test_user;
