use crate::error::ErrorCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Instruction used for any genre tag outside the known table.
pub const GENERIC_INSTRUCTION: &str =
    "You are a creative writing assistant. Generate engaging, original writing prompts.";

/// Genres with a dedicated system instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Fantasy,
    SciFi,
    Mystery,
    Romance,
    Horror,
    Adventure,
    Historical,
    Contemporary,
    Thriller,
    Drama,
}

impl Genre {
    pub const ALL: [Genre; 10] = [
        Genre::Fantasy,
        Genre::SciFi,
        Genre::Mystery,
        Genre::Romance,
        Genre::Horror,
        Genre::Adventure,
        Genre::Historical,
        Genre::Contemporary,
        Genre::Thriller,
        Genre::Drama,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Genre::Fantasy => "fantasy",
            Genre::SciFi => "sci-fi",
            Genre::Mystery => "mystery",
            Genre::Romance => "romance",
            Genre::Horror => "horror",
            Genre::Adventure => "adventure",
            Genre::Historical => "historical",
            Genre::Contemporary => "contemporary",
            Genre::Thriller => "thriller",
            Genre::Drama => "drama",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            Genre::Fantasy => "You are a creative writing assistant specializing in fantasy literature. Generate engaging, original writing prompts with magical elements, mythical creatures, or fantastical worlds.",
            Genre::SciFi => "You are a creative writing assistant specializing in science fiction. Generate engaging, original writing prompts exploring futuristic technology, space exploration, or scientific concepts.",
            Genre::Mystery => "You are a creative writing assistant specializing in mystery and thriller genres. Generate engaging, original writing prompts with suspense, intrigue, and compelling puzzles.",
            Genre::Romance => "You are a creative writing assistant specializing in romance. Generate engaging, original writing prompts focusing on relationships, emotions, and romantic tension.",
            Genre::Horror => "You are a creative writing assistant specializing in horror. Generate engaging, original writing prompts that create tension, fear, and supernatural or psychological dread.",
            Genre::Adventure => "You are a creative writing assistant specializing in adventure stories. Generate engaging, original writing prompts featuring exploration, quests, and exciting challenges.",
            Genre::Historical => "You are a creative writing assistant specializing in historical fiction. Generate engaging, original writing prompts set in a specific historical period with authentic details.",
            Genre::Contemporary => "You are a creative writing assistant specializing in contemporary fiction. Generate engaging, original writing prompts set in modern times with relatable, realistic situations.",
            Genre::Thriller => "You are a creative writing assistant specializing in thrillers. Generate engaging, original writing prompts with high stakes, tension, and an exciting pace.",
            Genre::Drama => "You are a creative writing assistant specializing in dramatic fiction. Generate engaging, original writing prompts focusing on complex emotions, relationships, and meaningful conflicts.",
        }
    }

    /// Case-insensitive lookup; `None` for tags outside the table.
    pub fn from_tag(tag: &str) -> Option<Genre> {
        tag.parse().ok()
    }
}

impl FromStr for Genre {
    type Err = ErrorCore;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Genre::ALL
            .into_iter()
            .find(|genre| genre.tag() == tag)
            .ok_or_else(|| ErrorCore::UnknownGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// System instruction for a raw genre tag. Unknown tags get
/// [`GENERIC_INSTRUCTION`]; they are never rejected.
pub fn instruction_for(tag: &str) -> &'static str {
    Genre::from_tag(tag)
        .map(|genre| genre.instruction())
        .unwrap_or(GENERIC_INSTRUCTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_genre_has_its_own_instruction() {
        for genre in Genre::ALL {
            let instruction = instruction_for(genre.tag());
            assert_ne!(instruction, GENERIC_INSTRUCTION, "{genre}");
            assert_eq!(instruction, genre.instruction());
        }
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        assert_eq!(Genre::from_tag("  Fantasy "), Some(Genre::Fantasy));
        assert_eq!(Genre::from_tag("SCI-FI"), Some(Genre::SciFi));
    }

    #[test]
    fn unknown_genres_fall_back_to_generic_instruction() {
        for tag in ["cyberpunk", "", "poetry", "science fiction"] {
            assert_eq!(Genre::from_tag(tag), None);
            assert_eq!(instruction_for(tag), GENERIC_INSTRUCTION);
        }
    }

    #[test]
    fn parse_error_names_the_tag() {
        let err = "western".parse::<Genre>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown genre: western");
    }
}
