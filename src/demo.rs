use crate::film::{FilmStill, ShotAnalysis};

#[cfg(test)]
use crate::game::{GameSession, OPTION_COUNT};

/// The three stills the page ships with, in presentation order.
pub fn demo_stills() -> Vec<FilmStill> {
    vec![
        FilmStill {
            image: "images/pulpfiction_2.jpg".to_string(),
            answer: "Pulp Fiction".to_string(),
            options: vec![
                "Pulp Fiction".to_string(),
                "The Matrix".to_string(),
                "The Shining".to_string(),
                "Blade Runner".to_string(),
            ],
            analysis: ShotAnalysis {
                lighting: "High contrast, dramatic shadows".to_string(),
                composition: "Rule of thirds, dynamic framing".to_string(),
                color: "Warm tones, saturated colors".to_string(),
                camera: "Medium shot, eye-level angle".to_string(),
            },
        },
        FilmStill {
            image: "images/thematrix.jpg".to_string(),
            answer: "The Matrix".to_string(),
            options: vec![
                "Pulp Fiction".to_string(),
                "The Matrix".to_string(),
                "Fight Club".to_string(),
                "Blade Runner".to_string(),
            ],
            analysis: ShotAnalysis {
                lighting: "Green tint, cyberpunk aesthetic".to_string(),
                composition: "Centered subject, digital feel".to_string(),
                color: "Monochrome green, cool tones".to_string(),
                camera: "Bullet time effect, 360 rotation".to_string(),
            },
        },
        FilmStill {
            image: "images/theshinning.jpg".to_string(),
            answer: "The Shining".to_string(),
            options: vec![
                "The Shining".to_string(),
                "No Country for Old Men".to_string(),
                "Fight Club".to_string(),
                "Inglourious Basterds".to_string(),
            ],
            analysis: ShotAnalysis {
                lighting: "Natural light, eerie atmosphere".to_string(),
                composition: "Symmetrical, haunting empty spaces".to_string(),
                color: "Warm interiors, cold exteriors".to_string(),
                camera: "Steadicam, tracking shots".to_string(),
            },
        },
    ]
}
