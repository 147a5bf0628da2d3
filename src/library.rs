//! The Xilinx primitives known to libnetlist.
//!
//! Order matters: a primitive's position here is its `NETLIST_XIL_*`
//! index in the generated header.

use crate::primitive::{Attribute, Pin, Primitive};

const BUF_IN: &[Pin] = &[Pin::bit("I")];
const SINGLE_OUT: &[Pin] = &[Pin::bit("O")];

pub static XILINX_PRIMITIVES: &[Primitive] = &[
  Primitive {
    name: "IBUF",
    attributes: &[],
    inputs: BUF_IN,
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "OBUF",
    attributes: &[],
    inputs: BUF_IN,
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "FDE",
    attributes: &[],
    inputs: &[Pin::bit("C"), Pin::bit("CE"), Pin::bit("D")],
    outputs: &[Pin::bit("Q")],
  },
  Primitive {
    name: "VCC",
    attributes: &[],
    inputs: &[],
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "GND",
    attributes: &[],
    inputs: &[],
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "LUT1",
    attributes: &[Attribute::new("INIT", "0")],
    inputs: &[Pin::bit("I0")],
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "LUT2",
    attributes: &[Attribute::new("INIT", "0")],
    inputs: &[Pin::bit("I0"), Pin::bit("I1")],
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "LUT3",
    attributes: &[Attribute::new("INIT", "00")],
    inputs: &[Pin::bit("I0"), Pin::bit("I1"), Pin::bit("I2")],
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "LUT4",
    attributes: &[Attribute::new("INIT", "0000")],
    inputs: &[Pin::bit("I0"), Pin::bit("I1"), Pin::bit("I2"), Pin::bit("I3")],
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "LUT5",
    attributes: &[Attribute::new("INIT", "00000000")],
    inputs: &[
      Pin::bit("I0"),
      Pin::bit("I1"),
      Pin::bit("I2"),
      Pin::bit("I3"),
      Pin::bit("I4"),
    ],
    outputs: SINGLE_OUT,
  },
  Primitive {
    name: "LUT6",
    attributes: &[Attribute::new("INIT", "0000000000000000")],
    inputs: &[
      Pin::bit("I0"),
      Pin::bit("I1"),
      Pin::bit("I2"),
      Pin::bit("I3"),
      Pin::bit("I4"),
      Pin::bit("I5"),
    ],
    outputs: SINGLE_OUT,
  },
];

/// Look up a built-in primitive by name
pub fn find_primitive(name: &str) -> Option<&'static Primitive> {
  XILINX_PRIMITIVES.iter().find(|p| p.name == name)
}
