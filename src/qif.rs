use crate::types::Entry;

const HEADER: &str = "!Type:Bank";

/// Render one entry as its six-line QIF block.
///
/// Field prefixes and order are what Quicken-compatible importers parse:
/// `D` date, `P` payee, `M` memo (duplicates the payee verbatim), `CC`
/// cleared marker, `T` amount fixed to three decimal places, `^`
/// terminator.
pub fn format_entry(entry: &Entry) -> String {
    format!(
        "D{date}\nP{description}\nM{description}\nCC\nT{amount:.3}\n^",
        date = entry.date,
        description = entry.description,
        amount = entry.amount,
    )
}

/// An ordered QIF bank-statement document. Entries render in insertion
/// order; `render` is a pure function of the accumulated state.
#[derive(Debug, Default)]
pub struct QifDocument {
    entries: Vec<Entry>,
}

impl QifDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the whole document: header, entry blocks, one trailing
    /// blank line. An empty document still renders the header and the
    /// blank line.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(HEADER.to_string());

        for entry in &self.entries {
            lines.push(format_entry(entry));
        }

        lines.push("\n".to_string());
        lines.join("\n")
    }
}
