use std::fmt;

/// Analysis notes for the four fixed slots shown beside every still.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ShotAnalysis {
    /// How the frame is lit.
    pub lighting: String,
    /// How the frame is arranged.
    pub composition: String,
    /// Palette and grading notes.
    pub color: String,
    /// Camera placement and movement.
    pub camera: String,
}

impl ShotAnalysis {
    /// Returns the `(label, value)` pairs in the order the analysis panel
    /// lays them out: lighting, composition, color, camera.
    pub fn slots(&self) -> [(&'static str, &str); 4] {
        [
            ("Lighting", self.lighting.as_str()),
            ("Composition", self.composition.as_str()),
            ("Color", self.color.as_str()),
            ("Camera", self.camera.as_str()),
        ]
    }
}

/// One trivia still: a frame image, the film it was taken from, and the
/// option labels offered for it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilmStill {
    /// Path of the frame image. Opaque reference; existence is never checked.
    pub image: String,
    /// Film title that counts as the correct answer.
    pub answer: String,
    /// Option labels in display order. A valid still carries exactly four
    /// unique labels including `answer`.
    pub options: Vec<String>,
    /// Analysis text for the four fixed display slots.
    pub analysis: ShotAnalysis,
}

impl FilmStill {
    /// Whether `label` is one of the offered options.
    pub fn has_option(&self, label: &str) -> bool {
        self.options.iter().any(|option| option == label)
    }
}

impl fmt::Display for FilmStill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.answer, self.image)
    }
}
