//! # Mnemonic Registry
//!
//! Stable textual names for every instruction variant the model evaluates.
//! Record forms carry the architectural trailing-`.` spelling (`"add."`),
//! OE forms the `o` suffix (`"addo"`). The registry is a closed set: parsing
//! an unlisted name is the caller's integration error, reported as
//! [`UnknownMnemonic`], and callers can enumerate [`Mnemonic::ALL`] to avoid
//! it entirely.

use crate::error::UnknownMnemonic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! name_enum {
    (
        $(#[$attr:meta])*
        pub enum $enum_name:ident {
            $(
                $(#[$vattr:meta])*
                $variant:ident = $name:literal,
            )+
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $enum_name {
            $(
                $(#[$vattr])*
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl $enum_name {
            /// Every registered variant, in registry order.
            pub const ALL: &'static [Self] = &[
                $(
                    Self::$variant,
                )+
            ];

            /// Assembly spelling of this variant.
            pub fn name(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $name,
                    )+
                }
            }

            /// Look a variant up by its assembly spelling.
            pub fn from_name(name: &str) -> Result<Self, UnknownMnemonic> {
                match name {
                    $(
                        $name => Ok(Self::$variant),
                    )+
                    _ => Err(UnknownMnemonic(name.to_string())),
                }
            }
        }

        impl FromStr for $enum_name {
            type Err = UnknownMnemonic;

            fn from_str(s: &str) -> Result<Self, UnknownMnemonic> {
                Self::from_name(s)
            }
        }

        impl fmt::Display for $enum_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

name_enum! {
    /// Instruction mnemonic in the full registry.
    ///
    /// Each OE-capable family contributes four variants (base, `o`, `.`,
    /// `o.`); the high-multiply families contribute base and `.`; modulo and
    /// fused multiply-add forms have a single variant each.
    pub enum Mnemonic {
        // ========== Add / subtract-from ==========
        Add = "add",
        AddO = "addo",
        Add_ = "add.",
        AddO_ = "addo.",
        SubF = "subf",
        SubFO = "subfo",
        SubF_ = "subf.",
        SubFO_ = "subfo.",

        // ========== Extended divide ==========
        DivDE = "divde",
        DivDEO = "divdeo",
        DivDE_ = "divde.",
        DivDEO_ = "divdeo.",
        DivDEU = "divdeu",
        DivDEUO = "divdeuo",
        DivDEU_ = "divdeu.",
        DivDEUO_ = "divdeuo.",
        DivWE = "divwe",
        DivWEO = "divweo",
        DivWE_ = "divwe.",
        DivWEO_ = "divweo.",
        DivWEU = "divweu",
        DivWEUO = "divweuo",
        DivWEU_ = "divweu.",
        DivWEUO_ = "divweuo.",

        // ========== Plain divide ==========
        DivD = "divd",
        DivDO = "divdo",
        DivD_ = "divd.",
        DivDO_ = "divdo.",
        DivDU = "divdu",
        DivDUO = "divduo",
        DivDU_ = "divdu.",
        DivDUO_ = "divduo.",
        DivW = "divw",
        DivWO = "divwo",
        DivW_ = "divw.",
        DivWO_ = "divwo.",
        DivWU = "divwu",
        DivWUO = "divwuo",
        DivWU_ = "divwu.",
        DivWUO_ = "divwuo.",

        // ========== Modulo ==========
        ModSD = "modsd",
        ModUD = "modud",
        ModSW = "modsw",
        ModUW = "moduw",

        // ========== Multiply ==========
        MulLW = "mullw",
        MulLWO = "mullwo",
        MulLW_ = "mullw.",
        MulLWO_ = "mullwo.",
        MulLD = "mulld",
        MulLDO = "mulldo",
        MulLD_ = "mulld.",
        MulLDO_ = "mulldo.",
        MulHW = "mulhw",
        MulHW_ = "mulhw.",
        MulHWU = "mulhwu",
        MulHWU_ = "mulhwu.",
        MulHD = "mulhd",
        MulHD_ = "mulhd.",
        MulHDU = "mulhdu",
        MulHDU_ = "mulhdu.",

        // ========== Fused multiply-add ==========
        MAddHD = "maddhd",
        MAddHDU = "maddhdu",
        MAddLD = "maddld",
    }
}

name_enum! {
    /// Legacy divide/modulo surface: the mnemonics the hardware cross-check
    /// harness historically drove through [`DivInput`](crate::DivInput).
    pub enum DivInstr {
        DivDEO = "divdeo",
        DivDEUO = "divdeuo",
        DivDO = "divdo",
        DivDUO = "divduo",
        DivWEO = "divweo",
        DivWEUO = "divweuo",
        DivWO = "divwo",
        DivWUO = "divwuo",
        ModSD = "modsd",
        ModUD = "modud",
        ModSW = "modsw",
        ModUW = "moduw",
    }
}

impl Mnemonic {
    /// True for record (`.`) forms, which write CR0.
    pub fn is_record_form(self) -> bool {
        self.name().ends_with('.')
    }

    /// True for modulo forms, which never report overflow status.
    pub fn is_modulo(self) -> bool {
        matches!(self, Self::ModSD | Self::ModUD | Self::ModSW | Self::ModUW)
    }
}

impl DivInstr {
    /// The same instruction in the full registry.
    pub fn mnemonic(self) -> Mnemonic {
        match self {
            Self::DivDEO => Mnemonic::DivDEO,
            Self::DivDEUO => Mnemonic::DivDEUO,
            Self::DivDO => Mnemonic::DivDO,
            Self::DivDUO => Mnemonic::DivDUO,
            Self::DivWEO => Mnemonic::DivWEO,
            Self::DivWEUO => Mnemonic::DivWEUO,
            Self::DivWO => Mnemonic::DivWO,
            Self::DivWUO => Mnemonic::DivWUO,
            Self::ModSD => Mnemonic::ModSD,
            Self::ModUD => Mnemonic::ModUD,
            Self::ModSW => Mnemonic::ModSW,
            Self::ModUW => Mnemonic::ModUW,
        }
    }
}
