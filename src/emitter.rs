use std::ffi::OsStr;
use std::io::Write;

use tracing::{debug, warn};

use crate::code_writer::CodeWriter;
use crate::error::Result;
use crate::primitive::Primitive;

/// Which file to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
  /// The C source defining the string arrays and the aggregate table
  Source,
  /// The C header with the index enums and the table declaration
  Header,
}

impl OutputMode {
  /// Map a command-line selector to a mode.
  ///
  /// Only `c` selects the source; every other selector produces the header.
  pub fn from_selector(selector: &str) -> Self {
    match selector {
      "c" => OutputMode::Source,
      "h" => OutputMode::Header,
      other => {
        warn!(selector = other, "unrecognized mode selector, emitting header");
        OutputMode::Header
      }
    }
  }

  /// Map a raw command-line argument to a mode; it need not be UTF-8
  pub fn from_os_selector(selector: &OsStr) -> Self {
    Self::from_selector(&selector.to_string_lossy())
  }
}

/// Names baked into the generated files
#[derive(Debug, Clone)]
pub struct EmitterConfig {
  /// Program named in the "generated automatically" banner
  pub program: String,
  /// Prefix of every enum member in the header
  pub namespace: String,
  /// Symbol of the aggregate table
  pub table_symbol: String,
  /// Struct tag of the aggregate table records
  pub record_type: String,
  /// Value of each record's `.type` field
  pub type_tag: String,
  /// Header include guard macro
  pub include_guard: String,
  /// System headers included by the source file, in order
  pub source_includes: Vec<String>,
  /// Text emitted per indentation level
  pub indent: String,
}

impl Default for EmitterConfig {
  fn default() -> Self {
    Self {
      program: "mk_xilprims".to_string(),
      namespace: "NETLIST_XIL".to_string(),
      table_symbol: "netlist_xilprims".to_string(),
      record_type: "netlist_primitive".to_string(),
      type_tag: "NETLIST_PRIMITIVE_INTERNAL".to_string(),
      include_guard: "__NETLIST_XILPRIMS_H".to_string(),
      source_includes: vec![
        "stdlib.h".to_string(),
        "netlist/net.h".to_string(),
        "netlist/xilprims.h".to_string(),
      ],
      indent: "\t".to_string(),
    }
  }
}

impl EmitterConfig {
  /// Default names with the banner crediting `program`
  pub fn for_program(program: &str) -> Self {
    Self {
      program: program.to_string(),
      ..Self::default()
    }
  }
}

/// Symbol of a primitive's attribute-name array
pub fn attribute_names_symbol(primitive: &Primitive) -> String {
  format!("{}_attribute_names", primitive.name)
}

/// Symbol of a primitive's attribute-default array
pub fn attribute_defaults_symbol(primitive: &Primitive) -> String {
  format!("{}_attribute_defaults", primitive.name)
}

/// Symbol of a primitive's input-name array
pub fn inputs_symbol(primitive: &Primitive) -> String {
  format!("{}_inputs", primitive.name)
}

/// Symbol of a primitive's output-name array
pub fn outputs_symbol(primitive: &Primitive) -> String {
  format!("{}_outputs", primitive.name)
}

/// Emits a primitive table as C source or header text
pub struct TableEmitter<'a> {
  primitives: &'a [Primitive],
  config: EmitterConfig,
}

impl<'a> TableEmitter<'a> {
  pub fn new(primitives: &'a [Primitive]) -> Self {
    Self::with_config(primitives, EmitterConfig::default())
  }

  pub fn with_config(primitives: &'a [Primitive], config: EmitterConfig) -> Self {
    Self { primitives, config }
  }

  /// Enum member naming a primitive's index
  pub fn primitive_enum_name(&self, primitive: &Primitive) -> String {
    format!("{}_{}", self.config.namespace, primitive.name)
  }

  /// Enum member naming an expanded pin's index within its primitive
  pub fn pin_enum_name(&self, primitive: &Primitive, pin: &str) -> String {
    format!("{}_{}_{}", self.config.namespace, primitive.name, pin)
  }

  /// Emit the file selected by `mode`
  pub fn emit<W: Write>(&self, mode: OutputMode, out: W) -> Result<()> {
    match mode {
      OutputMode::Source => self.emit_source(out),
      OutputMode::Header => self.emit_header(out),
    }
  }

  fn write_banner<W: Write>(&self, writer: &mut CodeWriter<W>) -> Result<()> {
    writer.write_comment(&format!(
      "Generated automatically by {}. Do not edit manually!",
      self.config.program
    ))
  }

  fn write_string_array<W: Write>(
    &self,
    writer: &mut CodeWriter<W>,
    symbol: &str,
    values: &[String],
  ) -> Result<()> {
    writer.begin_array(&format!("static char *{}", symbol))?;
    for value in values {
      writer.write_string_element(value)?;
    }
    writer.end_block()
  }

  /// Emit the C source: per-primitive string arrays, then the aggregate table
  pub fn emit_source<W: Write>(&self, out: W) -> Result<()> {
    let mut writer = CodeWriter::with_indent(out, &self.config.indent);

    self.write_banner(&mut writer)?;
    for header in &self.config.source_includes {
      writer.write_include(header, true)?;
    }

    for primitive in self.primitives {
      debug!(primitive = primitive.name, "emitting string arrays");
      writer.newline()?;
      writer.write_comment(primitive.name)?;

      if !primitive.attributes.is_empty() {
        let names: Vec<String> = primitive.attributes.iter().map(|a| a.name.to_string()).collect();
        let defaults: Vec<String> = primitive
          .attributes
          .iter()
          .map(|a| a.default.to_string())
          .collect();
        self.write_string_array(&mut writer, &attribute_names_symbol(primitive), &names)?;
        self.write_string_array(&mut writer, &attribute_defaults_symbol(primitive), &defaults)?;
      }
      if !primitive.inputs.is_empty() {
        self.write_string_array(&mut writer, &inputs_symbol(primitive), &primitive.input_names())?;
      }
      if !primitive.outputs.is_empty() {
        self.write_string_array(&mut writer, &outputs_symbol(primitive), &primitive.output_names())?;
      }
    }

    writer.newline()?;
    writer.newline()?;
    writer.begin_array(&format!(
      "struct {} {}",
      self.config.record_type, self.config.table_symbol
    ))?;
    for primitive in self.primitives {
      self.write_record(&mut writer, primitive)?;
    }
    writer.end_block()?;

    writer.flush()
  }

  fn write_record<W: Write>(&self, writer: &mut CodeWriter<W>, primitive: &Primitive) -> Result<()> {
    let or_null = |present: bool, symbol: String| if present { symbol } else { "NULL".to_string() };
    let has_attributes = !primitive.attributes.is_empty();

    writer.begin_element()?;
    writer.write_field("type", &self.config.type_tag, false)?;
    writer.write_field("name", &format!("\"{}\"", primitive.name), false)?;
    writer.write_field(
      "attribute_count",
      &primitive.attributes.len().to_string(),
      false,
    )?;
    writer.write_field(
      "attribute_names",
      &or_null(has_attributes, attribute_names_symbol(primitive)),
      false,
    )?;
    writer.write_field(
      "default_attributes",
      &or_null(has_attributes, attribute_defaults_symbol(primitive)),
      false,
    )?;
    writer.write_field("inputs", &primitive.input_count().to_string(), false)?;
    writer.write_field(
      "input_names",
      &or_null(!primitive.inputs.is_empty(), inputs_symbol(primitive)),
      false,
    )?;
    writer.write_field("outputs", &primitive.output_count().to_string(), false)?;
    writer.write_field(
      "output_names",
      &or_null(!primitive.outputs.is_empty(), outputs_symbol(primitive)),
      true,
    )?;
    writer.end_element()
  }

  fn write_pin_enum<W: Write>(
    &self,
    writer: &mut CodeWriter<W>,
    primitive: &Primitive,
    pins: &[String],
  ) -> Result<()> {
    writer.begin_enum(None)?;
    for (ordinal, pin) in pins.iter().enumerate() {
      writer.write_enum_member(&self.pin_enum_name(primitive, pin), Some(ordinal))?;
    }
    writer.end_block()
  }

  /// Emit the C header: index enums and the aggregate table declaration
  pub fn emit_header<W: Write>(&self, out: W) -> Result<()> {
    let mut writer = CodeWriter::with_indent(out, &self.config.indent);
    let guard = &self.config.include_guard;

    self.write_banner(&mut writer)?;
    writer.write_ifndef(guard)?;
    writer.write_define(guard, None)?;
    writer.newline()?;

    writer.begin_enum(None)?;
    for (ordinal, primitive) in self.primitives.iter().enumerate() {
      writer.write_enum_member(&self.primitive_enum_name(primitive), Some(ordinal))?;
    }
    writer.end_block()?;

    for primitive in self.primitives {
      debug!(primitive = primitive.name, "emitting pin enums");
      if !primitive.inputs.is_empty() {
        writer.newline()?;
        writer.write_comment(&format!("{}: inputs", primitive.name))?;
        self.write_pin_enum(&mut writer, primitive, &primitive.input_names())?;
      }
      if !primitive.outputs.is_empty() {
        writer.write_comment(&format!("{}: outputs", primitive.name))?;
        self.write_pin_enum(&mut writer, primitive, &primitive.output_names())?;
      }
    }

    writer.newline()?;
    writer.write_extern(&format!(
      "struct {} {}[]",
      self.config.record_type, self.config.table_symbol
    ))?;
    writer.newline()?;
    writer.write_endif(Some(guard))?;

    writer.flush()
  }
}
