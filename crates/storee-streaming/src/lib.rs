//! Shell-first HTML streaming.
//!
//! Pages are written as a shell (doctype, head, opening body) followed by
//! named sections and a closing fragment:
//! - `Shell` / `HeadContent` - The page frame
//! - `StreamingSink` - Enforces shell, then sections, then close
//! - `escape_html` - Escaping for text and attribute values

mod escape;
mod shell;
mod sink;

pub use escape::*;
pub use shell::*;
pub use sink::*;
