use std::collections::HashSet;

use crate::error::{CodeGenError, Result};
use crate::primitive::{Pin, Primitive};
use crate::utils::{is_c_identifier, is_c_keyword};

fn check_identifier(context: &str, name: &str) -> Result<()> {
  if !is_c_identifier(name) {
    return Err(CodeGenError::InvalidIdentifier {
      context: context.to_string(),
      name: name.to_string(),
    });
  }
  if is_c_keyword(name) {
    return Err(CodeGenError::ReservedKeyword {
      context: context.to_string(),
      name: name.to_string(),
    });
  }
  Ok(())
}

fn check_pins(primitive: &Primitive, kind: &str, pins: &[Pin]) -> Result<()> {
  for pin in pins {
    if pin.width == 0 {
      return Err(CodeGenError::ZeroWidthPin {
        primitive: primitive.name.to_string(),
        pin: pin.name.to_string(),
      });
    }
    check_identifier(&format!("{} {}", primitive.name, kind), pin.name)?;
  }
  Ok(())
}

/// Check that a primitive table can be emitted as C.
///
/// Every name ends up as a symbol fragment or enum member, so it has to be
/// a non-keyword C identifier. Primitive names must be unique.
pub fn validate(primitives: &[Primitive]) -> Result<()> {
  let mut seen = HashSet::new();

  for primitive in primitives {
    check_identifier("primitive name", primitive.name)?;
    if !seen.insert(primitive.name) {
      return Err(CodeGenError::DuplicatePrimitive(primitive.name.to_string()));
    }

    for attr in primitive.attributes {
      check_identifier(&format!("{} attribute", primitive.name), attr.name)?;
    }
    check_pins(primitive, "input", primitive.inputs)?;
    check_pins(primitive, "output", primitive.outputs)?;
  }

  Ok(())
}
