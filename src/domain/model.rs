use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element ids the card is rendered into.
pub const NAME_ELEMENT_ID: &str = "nombre";
pub const PROGRAM_ELEMENT_ID: &str = "programa";
pub const CODE_ELEMENT_ID: &str = "codigoEstudiante";

pub const CARD_ELEMENT_IDS: [&str; 3] = [NAME_ELEMENT_ID, PROGRAM_ELEMENT_ID, CODE_ELEMENT_ID];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
}

impl UserProfile {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The fixed list of academic programs a student can be enrolled in.
#[derive(Debug, Clone, Copy)]
pub struct ProgramCatalog {
    programs: &'static [&'static str],
}

impl ProgramCatalog {
    pub const PROGRAMS: [&'static str; 6] = [
        "Ingeniería de Sistemas",
        "Ingeniería Industrial",
        "Derecho",
        "Administración de Empresas",
        "Contaduría Pública",
        "Ingeniería TIC",
    ];

    pub const fn standard() -> Self {
        Self {
            programs: &Self::PROGRAMS,
        }
    }

    pub fn programs(&self) -> &'static [&'static str] {
        self.programs
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn contains(&self, program: &str) -> bool {
        self.programs.contains(&program)
    }
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Year prefix followed by a six digit suffix, e.g. `2025482913`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCode {
    suffix: u32,
}

impl StudentCode {
    pub const PREFIX: &'static str = "2025";
    pub const MIN_SUFFIX: u32 = 100_000;
    pub const MAX_SUFFIX: u32 = 999_999;

    /// Returns `None` when the suffix is not exactly six digits.
    pub fn from_suffix(suffix: u32) -> Option<Self> {
        (Self::MIN_SUFFIX..=Self::MAX_SUFFIX)
            .contains(&suffix)
            .then_some(Self { suffix })
    }

    pub fn clamped(suffix: u32) -> Self {
        Self {
            suffix: suffix.clamp(Self::MIN_SUFFIX, Self::MAX_SUFFIX),
        }
    }

    pub fn suffix(&self) -> u32 {
        self.suffix
    }
}

impl fmt::Display for StudentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.suffix)
    }
}

/// Everything that ends up on the page, computed before any element is touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentCard {
    pub full_name: String,
    pub program: String,
    pub code: String,
    pub issued_at: DateTime<Utc>,
}

impl StudentCard {
    /// (element id, text) pairs in render order.
    pub fn text_updates(&self) -> [(&'static str, &str); 3] {
        [
            (NAME_ELEMENT_ID, self.full_name.as_str()),
            (PROGRAM_ELEMENT_ID, self.program.as_str()),
            (CODE_ELEMENT_ID, self.code.as_str()),
        ]
    }
}
