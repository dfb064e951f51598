//! Compile-time constants for the PDS parser

pub mod compile_time {
    pub mod lexical {
        /// Maximum identifier segment length (255 characters)
        /// Prevents parser complexity attacks via enormous names
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Maximum string literal size (1MB)
        /// Prevents memory exhaustion via enormous string literals
        pub const MAX_STRING_SIZE: usize = 1_048_576;

        /// Maximum numeric literal length
        /// Anything longer is noise; conversion would degrade to null anyway
        pub const MAX_NUMBER_LENGTH: usize = 64;

        /// Maximum comment length to prevent memory exhaustion
        pub const MAX_COMMENT_LENGTH: usize = 10_000;

        /// Maximum segments in a dotted name continuation
        pub const MAX_DOTTED_SEGMENTS: usize = 64;
    }
}
