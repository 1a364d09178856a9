//! Libcoalign performs exact global (Needleman-Wunsch) pairwise
//! sequence alignment. Instead of breaking score ties arbitrarily, it
//! records every tied traceback move in an explicit move graph, which
//! makes it possible to enumerate every co-optimal alignment of a pair
//! up to a configured cap.

pub mod align;
pub mod alphabet;
pub mod output;
pub mod structs;

#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}
