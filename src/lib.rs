pub mod api;
pub mod config;
pub mod error;
pub mod lexer;
pub mod notation;
pub mod parser;
pub mod transpose;
pub mod view;

pub use api::{original_key_for, parse_abc_notation, render_all_keys, DEFAULT_KEY};
pub use config::DisplayConfig;
pub use error::*;
pub use notation::*;
pub use parser::parse;
pub use transpose::{
    get_transpose_amount, normalize_key, semitone_offset, try_transpose_amount, DISPLAY_KEYS,
    PITCH_CLASSES,
};
pub use view::{strip_header_tags, transposed_views};
