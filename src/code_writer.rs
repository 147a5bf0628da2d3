use std::io::Write;

use crate::error::Result;
use crate::utils::escape_comment;

/// A writer for generating C text with configurable indentation
pub struct CodeWriter<W: Write> {
  /// The underlying writer
  writer: W,
  /// Current indentation level
  indent_level: usize,
  /// Text emitted once per indentation level
  indent_unit: String,
}

impl<W: Write> CodeWriter<W> {
  /// Create a new CodeWriter indenting with tabs
  pub fn new(writer: W) -> Self {
    Self::with_indent(writer, "\t")
  }

  /// Create a new CodeWriter with a custom indentation unit
  pub fn with_indent(writer: W, indent_unit: &str) -> Self {
    Self {
      writer,
      indent_level: 0,
      indent_unit: indent_unit.to_string(),
    }
  }

  /// Increase the indentation level
  pub fn indent(&mut self) {
    self.indent_level += 1;
  }

  /// Decrease the indentation level
  pub fn dedent(&mut self) {
    if self.indent_level > 0 {
      self.indent_level -= 1;
    }
  }

  /// Get the current indentation level
  pub fn indent_level(&self) -> usize {
    self.indent_level
  }

  /// Write each line of `content` at the current indentation, then a newline.
  /// Empty lines are written without indentation.
  pub fn writeln(&mut self, content: &str) -> Result<()> {
    if content.is_empty() {
      return self.newline();
    }

    let indent = self.indent_unit.repeat(self.indent_level);
    for line in content.lines() {
      if !line.is_empty() {
        self.writer.write_all(indent.as_bytes())?;
        self.writer.write_all(line.as_bytes())?;
      }
      self.writer.write_all(b"\n")?;
    }
    Ok(())
  }

  /// Write a newline
  pub fn newline(&mut self) -> Result<()> {
    self.writer.write_all(b"\n")?;
    Ok(())
  }

  /// Write a `/* ... */` comment on one line
  pub fn write_comment(&mut self, comment: &str) -> Result<()> {
    self.writeln(&format!("/* {} */", escape_comment(comment)))
  }

  /// Write a #include directive
  pub fn write_include(&mut self, header: &str, is_system: bool) -> Result<()> {
    if is_system {
      self.writeln(&format!("#include <{}>", header))
    } else {
      self.writeln(&format!("#include \"{}\"", header))
    }
  }

  /// Write a #define directive
  pub fn write_define(&mut self, name: &str, value: Option<&str>) -> Result<()> {
    match value {
      Some(val) => self.writeln(&format!("#define {} {}", name, val)),
      None => self.writeln(&format!("#define {}", name)),
    }
  }

  /// Write a #ifndef directive
  pub fn write_ifndef(&mut self, name: &str) -> Result<()> {
    self.writeln(&format!("#ifndef {}", name))
  }

  /// Write a #endif directive
  pub fn write_endif(&mut self, comment: Option<&str>) -> Result<()> {
    match comment {
      Some(cmt) => self.writeln(&format!("#endif /* {} */", escape_comment(cmt))),
      None => self.writeln("#endif"),
    }
  }

  /// Begin an enum definition; `None` writes an anonymous enum
  pub fn begin_enum(&mut self, name: Option<&str>) -> Result<()> {
    match name {
      Some(name) => self.writeln(&format!("enum {} {{", name))?,
      None => self.writeln("enum {")?,
    }
    self.indent();
    Ok(())
  }

  /// Write an enum member
  pub fn write_enum_member(&mut self, name: &str, value: Option<usize>) -> Result<()> {
    match value {
      Some(val) => self.writeln(&format!("{} = {},", name, val)),
      None => self.writeln(&format!("{},", name)),
    }
  }

  /// End a brace-enclosed definition or initializer list with `};`
  pub fn end_block(&mut self) -> Result<()> {
    self.dedent();
    self.writeln("};")
  }

  /// Begin a `<decl>[] = {` array initializer
  pub fn begin_array(&mut self, decl: &str) -> Result<()> {
    self.writeln(&format!("{}[] = {{", decl))?;
    self.indent();
    Ok(())
  }

  /// Write a string literal array element
  pub fn write_string_element(&mut self, value: &str) -> Result<()> {
    self.writeln(&format!("\"{}\",", escape_c_string(value)))
  }

  /// Begin a brace-enclosed aggregate element inside an array
  pub fn begin_element(&mut self) -> Result<()> {
    self.writeln("{")?;
    self.indent();
    Ok(())
  }

  /// End an aggregate element with `},`
  pub fn end_element(&mut self) -> Result<()> {
    self.dedent();
    self.writeln("},")
  }

  /// Write a `.field = value` designated initializer; `last` drops the comma
  pub fn write_field(&mut self, field: &str, value: &str, last: bool) -> Result<()> {
    let sep = if last { "" } else { "," };
    self.writeln(&format!(".{} = {}{}", field, value, sep))
  }

  /// Write an `extern` declaration
  pub fn write_extern(&mut self, decl: &str) -> Result<()> {
    self.writeln(&format!("extern {};", decl))
  }

  /// Flush the underlying writer
  pub fn flush(&mut self) -> Result<()> {
    self.writer.flush()?;
    Ok(())
  }
}

/// Escape text for use inside a C string literal
pub fn escape_c_string(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      '\t' => out.push_str("\\t"),
      _ => out.push(c),
    }
  }
  out
}
