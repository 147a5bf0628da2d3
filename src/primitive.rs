/// A named configuration parameter of a primitive with its default value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
  pub name: &'static str,
  pub default: &'static str,
}

impl Attribute {
  pub const fn new(name: &'static str, default: &'static str) -> Self {
    Self { name, default }
  }
}

/// An input or output connection point; `width > 1` expands into indexed sub-pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
  pub width: u32,
  pub name: &'static str,
}

impl Pin {
  pub const fn new(width: u32, name: &'static str) -> Self {
    Self { width, name }
  }

  /// A single-bit pin
  pub const fn bit(name: &'static str) -> Self {
    Self::new(1, name)
  }

  /// Names this pin expands to
  pub fn expand(&self) -> Vec<String> {
    expand_pin(self.name, self.width)
  }
}

/// Descriptor of one digital-logic primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
  pub name: &'static str,
  pub attributes: &'static [Attribute],
  pub inputs: &'static [Pin],
  pub outputs: &'static [Pin],
}

impl Primitive {
  /// Number of input sub-pins after width expansion
  pub fn input_count(&self) -> usize {
    pin_count(self.inputs)
  }

  /// Number of output sub-pins after width expansion
  pub fn output_count(&self) -> usize {
    pin_count(self.outputs)
  }

  pub fn input_names(&self) -> Vec<String> {
    expand_pins(self.inputs)
  }

  pub fn output_names(&self) -> Vec<String> {
    expand_pins(self.outputs)
  }
}

/// Expand a pin into its sub-pin names.
///
/// A pin of width 1 keeps its name verbatim, a wider pin becomes
/// `name_0` .. `name_{width-1}`.
pub fn expand_pin(name: &str, width: u32) -> Vec<String> {
  if width > 1 {
    (0..width).map(|i| format!("{}_{}", name, i)).collect()
  } else {
    vec![name.to_string()]
  }
}

/// Expand a pin list in declaration order
pub fn expand_pins(pins: &[Pin]) -> Vec<String> {
  pins.iter().flat_map(Pin::expand).collect()
}

/// Total number of sub-pins, i.e. the sum of the declared widths
pub fn pin_count(pins: &[Pin]) -> usize {
  pins.iter().map(|pin| pin.width as usize).sum()
}
