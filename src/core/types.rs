use serde::{Deserialize, Serialize};

/// A single-base allele
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    T,
    C,
    G,
}

/// The nucleotides alleles are drawn from, in draw order
pub const NUCLEOTIDES: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::T, Nucleotide::C, Nucleotide::G];

impl Nucleotide {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::T => 'T',
            Self::C => 'C',
            Self::G => 'G',
        }
    }

    /// Parse a nucleotide from a single-character allele string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" | "a" => Some(Self::A),
            "T" | "t" => Some(Self::T),
            "C" | "c" => Some(Self::C),
            "G" | "g" => Some(Self::G),
            _ => None,
        }
    }
}

impl std::fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Cardinality of an INFO/FORMAT field (the `Number` key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Number {
    /// A fixed number of values
    Count(usize),
    /// One value per alternate allele
    A,
    /// One value per allele, reference included
    R,
    /// One value per possible genotype
    G,
    /// Unknown or unbounded (`.`)
    Unknown,
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::A => write!(f, "A"),
            Self::R => write!(f, "R"),
            Self::G => write!(f, "G"),
            Self::Unknown => write!(f, "."),
        }
    }
}

/// Value type of an INFO/FORMAT field (the `Type` key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Integer,
    Float,
    Flag,
    Character,
    String,
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
            Self::Flag => write!(f, "Flag"),
            Self::Character => write!(f, "Character"),
            Self::String => write!(f, "String"),
        }
    }
}

/// A single INFO value carried by a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfoValue {
    Integer(i64),
    String(String),
}

impl InfoValue {
    /// The declared type this value must be rendered under
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Integer(_) => FieldType::Integer,
            Self::String(_) => FieldType::String,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::String(_) => None,
        }
    }
}

impl std::fmt::Display for InfoValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}
