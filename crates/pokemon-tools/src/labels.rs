//! Localized labels and placeholder text for rendered tool output.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Language used for labels and placeholders.
///
/// Upstream data (type, color and shape names, effect text) is never
/// translated; only the surrounding text is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

/// Returned when a locale code is not recognised.
#[derive(Debug, Error)]
#[error("Unknown locale '{0}' (expected 'en' or 'es')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" | "español" => Ok(Self::Spanish),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::English => "en",
            Self::Spanish => "es",
        })
    }
}

/// Fixed strings for one locale.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub name: &'static str,
    pub types: &'static str,
    pub abilities: &'static str,
    pub weight: &'static str,
    pub ability: &'static str,
    pub effect: &'static str,
    pub kind: &'static str,
    pub double_damage_from: &'static str,
    pub double_damage_to: &'static str,
    pub half_damage_from: &'static str,
    pub half_damage_to: &'static str,
    pub color: &'static str,
    pub shape: &'static str,
    pub habitat: &'static str,
    pub legendary: &'static str,
    pub mythical: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub none: &'static str,
    pub unknown: &'static str,
    pub no_english_effect: &'static str,
    pub list_failed: &'static str,
    pub evolution_fetch_failed: &'static str,
}

const ENGLISH: Labels = Labels {
    name: "Name",
    types: "Types",
    abilities: "Abilities",
    weight: "Weight",
    ability: "Ability",
    effect: "Effect",
    kind: "Type",
    double_damage_from: "Double damage from",
    double_damage_to: "Double damage to",
    half_damage_from: "Half damage from",
    half_damage_to: "Half damage to",
    color: "Color",
    shape: "Shape",
    habitat: "Habitat",
    legendary: "Legendary",
    mythical: "Mythical",
    yes: "Yes",
    no: "No",
    none: "None",
    unknown: "Unknown",
    no_english_effect: "No English description available.",
    list_failed: "Could not fetch the Pokémon list.",
    evolution_fetch_failed: "Could not fetch the evolution chain.",
};

const SPANISH: Labels = Labels {
    name: "Nombre",
    types: "Tipos",
    abilities: "Habilidades",
    weight: "Peso",
    ability: "Habilidad",
    effect: "Efecto",
    kind: "Tipo",
    double_damage_from: "Doble daño de",
    double_damage_to: "Doble daño a",
    half_damage_from: "Mitad de daño de",
    half_damage_to: "Mitad de daño a",
    color: "Color",
    shape: "Forma",
    habitat: "Hábitat",
    legendary: "Legendario",
    mythical: "Mítico",
    yes: "Sí",
    no: "No",
    none: "Ninguno",
    unknown: "Desconocido",
    no_english_effect: "Sin descripción en inglés.",
    list_failed: "No se pudo obtener la lista de Pokémon.",
    evolution_fetch_failed: "No se pudo obtener la cadena evolutiva.",
};

impl Locale {
    /// Fixed strings for this locale.
    pub fn labels(&self) -> &'static Labels {
        match self {
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
        }
    }

    /// Yes/no label for a flag.
    pub fn yes_no(&self, flag: bool) -> &'static str {
        let labels = self.labels();
        if flag {
            labels.yes
        } else {
            labels.no
        }
    }

    pub fn pokemon_not_found(&self, name: &str) -> String {
        match self {
            Self::English => format!("No information found for Pokémon: {}", name),
            Self::Spanish => format!("No se encontró información para el Pokémon: {}", name),
        }
    }

    pub fn ability_not_found(&self, name: &str) -> String {
        match self {
            Self::English => format!("No information found for ability: {}", name),
            Self::Spanish => format!("No se encontró información para la habilidad: {}", name),
        }
    }

    pub fn type_not_found(&self, name: &str) -> String {
        match self {
            Self::English => format!("No information found for type: {}", name),
            Self::Spanish => format!("No se encontró información para el tipo: {}", name),
        }
    }

    pub fn species_not_found(&self, name: &str) -> String {
        match self {
            Self::English => format!("No species information found for {}.", name),
            Self::Spanish => format!("No se encontró información de especie para {}.", name),
        }
    }

    pub fn evolution_not_found(&self, name: &str) -> String {
        match self {
            Self::English => format!("No evolution chain found for {}.", name),
            Self::Spanish => format!("No se encontró la cadena evolutiva para {}.", name),
        }
    }

    /// Heading of the species block.
    pub fn species_heading(&self, display_name: &str) -> String {
        match self {
            Self::English => format!("Species of {}:", display_name),
            Self::Spanish => format!("Especie de {}:", display_name),
        }
    }
}
