//! Crate error types.
//!
//! Create the Error, ErrorKind, ResultExt, and Result types.
//! Result is a typedef of std `Result` with the error type our own `Error`.

use error_chain::*;

error_chain! {

    foreign_links {
        Carve(crate::grid::CarveError);
    }

    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: width and height must both be at least 1",
                    width, height)
        }

        GridTooLarge(width: usize, height: usize) {
            description("maze dimensions too large")
            display("maze dimensions {}x{} are too large to address every cell", width, height)
        }
    }
}
