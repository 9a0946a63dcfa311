//! Section renderers for the storefront pages.
//!
//! Every renderer is a pure function from data to an HTML fragment; the
//! handler decides the order and streams them.

mod about;
mod card;
mod contact;
mod faq;
mod filters;
mod gallery;
mod home;
mod layout;
mod not_found;
mod policies;
mod product;
mod related;
mod variants;

pub use about::*;
pub use card::*;
pub use contact::*;
pub use faq::*;
pub use filters::*;
pub use gallery::*;
pub use home::*;
pub use layout::*;
pub use not_found::*;
pub use policies::*;
pub use product::*;
pub use related::*;
pub use variants::*;
