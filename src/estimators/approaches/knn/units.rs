// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

/// Output unit of an entropy estimate, i.e. the logarithm base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    /// Natural logarithm (base e).
    #[default]
    Nats,
    /// Base 2.
    Bits,
    /// Base 10.
    Hartleys,
}

impl Units {
    /// Natural logarithm of the base; divide a nats value by this to convert.
    pub fn ln_base(self) -> f64 {
        match self {
            Units::Nats => 1.0,
            Units::Bits => std::f64::consts::LN_2,
            Units::Hartleys => std::f64::consts::LN_10,
        }
    }

    /// Convert a value expressed in nats into these units.
    pub fn from_nats(self, nats: f64) -> f64 {
        nats / self.ln_base()
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Units::Nats => "nats",
            Units::Bits => "bits",
            Units::Hartleys => "hartleys",
        })
    }
}
