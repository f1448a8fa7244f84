pub mod test_utils;

pub mod folding;
pub mod identifier;
pub mod member_chain;
pub mod ordering;
pub mod typeof_expr;
pub mod typescript;
pub mod write_positions;
