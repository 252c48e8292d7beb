//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format, one object per
//! diagnostic inside a top-level array.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, trailing_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }

    fn write_string_list(&mut self, key: &str, items: &[String], last: bool) {
        let _ = writeln!(self.writer, "    \"{key}\": [");
        for (i, item) in items.iter().enumerate() {
            let comma = trailing_comma(i, items.len());
            let _ = writeln!(self.writer, "      \"{}\"{comma}", escape_json(item));
        }
        let _ = writeln!(self.writer, "    ]{}", if last { "" } else { "," });
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        let _ = writeln!(self.writer, "    \"name\": \"{}\",", diagnostic.code.name());
        let _ = writeln!(
            self.writer,
            "    \"severity\": \"{}\",",
            diagnostic.severity
        );
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message())
        );

        match &diagnostic.location {
            Some(location) => {
                let _ = writeln!(
                    self.writer,
                    "    \"location\": {{ \"file\": \"{}\", \"line\": {}, \"column\": {} }},",
                    escape_json(&location.file),
                    location.line,
                    location.column
                );
            }
            None => {
                let _ = writeln!(self.writer, "    \"location\": null,");
            }
        }

        self.write_string_list("arguments", &diagnostic.args, false);

        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(
                self.writer,
                "        \"file\": \"{}\",",
                escape_json(&label.location.file)
            );
            let _ = writeln!(self.writer, "        \"line\": {},", label.location.line);
            let _ = writeln!(self.writer, "        \"column\": {},", label.location.column);
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\"",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        self.write_string_list("notes", &diagnostic.notes, false);
        self.write_string_list("suggestions", &diagnostic.suggestions, true);

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {
        // JSON output doesn't need a summary - the data speaks for itself
    }
}
