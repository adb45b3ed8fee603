// Footer line formatter for the passport data page.
// Both operations are pure and total over their argument types.

pub mod checksum;
pub mod lines;

pub use checksum::{check_digit, CheckSums};
pub use lines::{format_check_line, format_name_line, CHECK_LINE_LEN, NAME_LINE_WIDTH};
