use std::io::{self, Write};

/// Write the upstream body exactly as received: no newline, no reformatting.
pub fn write_body<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    out.write_all(body)?;
    out.flush()
}
