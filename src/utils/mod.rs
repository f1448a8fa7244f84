mod string;

pub use string::{decode_js_string, is_valid_identifier, quote_js_string, unquote_string};
