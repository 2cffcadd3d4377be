//! Currency display formatting.

pub mod format;

#[cfg(test)]
mod props;

pub use format::{
    RUPEE, format_abbreviated_currency, format_abbreviated_str, format_currency, round_half_away,
};
