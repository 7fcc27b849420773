//! Lumen IR - shared vocabulary of the highlighting engine.
//!
//! This crate contains the data that flows out of the engine:
//! - [`Span`]: half-open byte range into the tokenized text
//! - [`TokenType`]: opaque classification tag agreed with the renderer
//! - [`Token`] and [`TokenStream`]: the gapless, non-overlapping output
//!
//! Nothing here knows about patterns or rules; the rule model lives in
//! `lumen_rules` and the scanning engine in `lumen_engine`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenStream, TokenType};
