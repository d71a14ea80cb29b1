//! Human-readable rendering of a sequence.

use std::io::{self, Write};

use crate::error::SequenceResult;
use crate::types::NumericSequence;

impl NumericSequence {
    /// Print the sequence to stdout: `title` on its own line (if non-empty), then all values on
    /// one tab-separated line.
    pub fn print(&self, title: &str) -> SequenceResult<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_pretty(&mut out, title)
    }

    /// Same rendering as [`Self::print`], written to any `out`.
    pub fn write_pretty<W: Write>(&self, out: &mut W, title: &str) -> SequenceResult<()> {
        if !title.is_empty() {
            writeln!(out, "{title}")?;
        }
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                out.write_all(b"\t")?;
            }
            write!(out, "{v}")?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::types::NumericSequence;

    fn render(seq: &NumericSequence, title: &str) -> String {
        let mut buf = Vec::new();
        seq.write_pretty(&mut buf, title).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_title_then_values() {
        let seq = NumericSequence::from([1.0, -0.5, 3.25]);
        assert_eq!(render(&seq, "weights"), "weights\n1\t-0.5\t3.25\n");
    }

    #[test]
    fn omits_empty_title() {
        let seq = NumericSequence::from([2.0]);
        assert_eq!(render(&seq, ""), "2\n");
        assert_eq!(render(&NumericSequence::new(), ""), "\n");
    }
}
