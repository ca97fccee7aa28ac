use rand::Rng;
use rand::seq::SliceRandom;

pub const QUOTES: &[&str] = &[
    "I believe in you like Sundowns believes in winning. \u{1F3C6}",
    "You're not just smart, you're brilliant! \u{1F48E}",
    "Every task you complete makes me prouder than the last. \u{1F979}",
    "You've got the heart of a champion! \u{1F495}",
    "Watching you chase your dreams is my favorite show. \u{1F4FA}",
    "Proof that angels can multitask. \u{1F47C}",
    "Boss energy: activated! Time to dominate! \u{1F451}",
    "You're writing your success story, one task at a time. \u{1F4D6}",
];

pub const SUCCESS_MESSAGES: &[&str] = &[
    "You're killing it! \u{1FAF6}",
    "One step closer to being the smartest person in the room \u{1F485}",
    "Look at you being all productive \u{1F60D}",
    "I'd give you a gold star, but you already shine \u{2728}",
    "Boss energy is OFF THE CHARTS! \u{1F4C8}",
    "Absolutely crushing it \u{1F4AA}",
    "You're like the Sundowns of productivity - always winning! \u{1F3C6}",
    "Another W for my favorite genius \u{1F9E0}",
    "So proud I could cry happy tears \u{1F979}",
    "You deserve all the boba tea after this! \u{1F9CB}",
    "You're unstoppable when you put your mind to it! \u{1F680}",
    "You just made future you SO grateful \u{1F64F}",
];

pub const CONFETTI: &[&str] = &[
    "\u{1F389}", "\u{2728}", "\u{1F496}", "\u{1F31F}", "\u{1F495}", "\u{1F973}", "\u{1F451}",
    "\u{1F48E}",
];

/// Greeting for the local hour of day (0..=23)
pub fn greeting(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning, smartypants \u{1F31E}"
    } else if hour < 17 {
        "Good afternoon, superstar \u{2B50}"
    } else {
        "Good evening, beautiful \u{1F319}"
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or("")
}

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, QUOTES)
}

pub fn random_success_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, SUCCESS_MESSAGES)
}

/// A confetti glyph placed at a relative position inside the celebration popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfettiPiece {
    pub glyph: &'static str,
    /// Percent of the popup width, 0..100
    pub x: u16,
    /// Percent of the popup height, 0..100
    pub y: u16,
}

pub fn confetti<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            glyph: pick(rng, CONFETTI),
            x: rng.gen_range(0..100),
            y: rng.gen_range(0..100),
        })
        .collect()
}
