//! Code generation context and state.
//!
//! The `CodegenContext` owns the output buffer of one generated file along
//! with its indentation level and the identifiers already declared in it.

use rustc_hash::FxHashSet;

use crate::EmitOptions;

/// Marker the host uses to recognise generated files.
const AUTO_GENERATED: &str = "// <auto-generated/>";

/// Code generation context for one generated C# file.
pub struct CodegenContext {
    /// Current indentation level.
    indent: usize,
    /// Generated code output.
    output: String,
    /// Local identifiers declared so far.
    declared: FxHashSet<String>,
    /// Whether `begin_container` opened a namespace block.
    in_namespace: bool,
}

impl CodegenContext {
    pub fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(1024),
            declared: FxHashSet::default(),
            in_namespace: false,
        }
    }

    /// Turn a type name into a fragment usable inside a C# identifier.
    ///
    /// A leading `global::` alias is dropped, every other character that
    /// cannot appear in an identifier becomes `_`, and runs of `_` collapse.
    pub fn mangle(type_name: &str) -> String {
        let name = type_name.strip_prefix("global::").unwrap_or(type_name);
        let mut result = String::with_capacity(name.len());
        for c in name.chars() {
            let c = if c.is_alphanumeric() || c == '_' { c } else { '_' };
            if c == '_' && result.ends_with('_') {
                continue;
            }
            result.push(c);
        }
        let trimmed = result.trim_matches('_');
        if trimmed.is_empty() {
            "service".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Declare a local identifier, suffixing `_2`, `_3`, ... if `base` is
    /// already taken in this file.
    pub fn unique_identifier(&mut self, base: &str) -> String {
        let mut candidate = base.to_string();
        let mut n = 1;
        while self.declared.contains(&candidate) {
            n += 1;
            candidate = format!("{base}_{n}");
        }
        self.declared.insert(candidate.clone());
        candidate
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write indentation to output.
    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        self.write_indent();
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a newline.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Write `header`, then `{` on its own line, and indent.
    pub fn open_block(&mut self, header: &str) {
        self.writeln(header);
        self.writeln("{");
        self.indent();
    }

    /// Dedent and write the closing `}`.
    pub fn close_block(&mut self) {
        self.dedent();
        self.writeln("}");
    }

    /// Write the auto-generated marker and `using` directives.
    ///
    /// `extra` directives follow the configured ones; duplicates are
    /// written once.
    pub fn write_file_header(&mut self, usings: &[String], extra: &[&str]) {
        self.writeln(AUTO_GENERATED);
        self.newline();

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let all = usings.iter().map(String::as_str).chain(extra.iter().copied());
        let mut any = false;
        for using in all {
            if !using.is_empty() && seen.insert(using) {
                self.writeln(&format!("using {using};"));
                any = true;
            }
        }
        if any {
            self.newline();
        }
    }

    /// Open the optional namespace block and the partial container class.
    pub fn begin_container(&mut self, options: &EmitOptions) {
        if let Some(namespace) = options.namespace.as_deref().filter(|ns| !ns.is_empty()) {
            self.open_block(&format!("namespace {namespace}"));
            self.in_namespace = true;
        }
        self.open_block(&format!("public partial class {}", options.container_class));
    }

    /// Close everything `begin_container` opened.
    pub fn end_container(&mut self) {
        self.close_block();
        if self.in_namespace {
            self.close_block();
            self.in_namespace = false;
        }
    }

    /// Take the generated output.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Default for CodegenContext {
    fn default() -> Self {
        Self::new()
    }
}
