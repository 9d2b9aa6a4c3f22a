pub mod source_buffer;

pub use source_buffer::SourceBuffer;

/// Builds an in-memory [SourceBuffer] named after the location of the macro invocation.
#[macro_export]
macro_rules! ahk {
    ( $s:literal ) => {
        &$crate::toolchain::source::SourceBuffer::new_from_string(
            $s,
            const_format::formatcp!("{}:{}:{}", file!(), line!(), column!()),
        )
    };
}
