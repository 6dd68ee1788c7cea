use crate::rng::{RandomSource, pick_from};

/// Whether a reaction cheers or jeers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReactionTone {
    Celebratory,
    Punitive,
}

impl ReactionTone {
    #[must_use]
    pub fn for_answer(correct: bool) -> Self {
        if correct { Self::Celebratory } else { Self::Punitive }
    }

    #[must_use]
    pub fn table(self) -> &'static [Reaction] {
        match self {
            Self::Celebratory => &CELEBRATORY,
            Self::Punitive => &PUNITIVE,
        }
    }
}

/// Animation hint for the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReactionEffect {
    RainbowSplash,
    PsychBurst,
    Shake,
}

/// Full-screen reaction shown after each answer.
///
/// `palette` is a style key the renderer maps onto its own theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Reaction {
    pub headline: &'static str,
    pub subtext: &'static str,
    pub emoji: &'static str,
    pub palette: &'static str,
    pub effect: ReactionEffect,
    pub tone: ReactionTone,
}

impl Reaction {
    /// Pick a reaction uniformly from the table for `tone`.
    #[must_use]
    pub fn pick(tone: ReactionTone, rng: &mut dyn RandomSource) -> Self {
        let table = tone.table();
        pick_from(rng, table).copied().unwrap_or(table[0])
    }
}

const fn celebrate(
    headline: &'static str,
    subtext: &'static str,
    emoji: &'static str,
    palette: &'static str,
    effect: ReactionEffect,
) -> Reaction {
    Reaction {
        headline,
        subtext,
        emoji,
        palette,
        effect,
        tone: ReactionTone::Celebratory,
    }
}

const fn punish(
    headline: &'static str,
    subtext: &'static str,
    emoji: &'static str,
    palette: &'static str,
) -> Reaction {
    Reaction {
        headline,
        subtext,
        emoji,
        palette,
        effect: ReactionEffect::Shake,
        tone: ReactionTone::Punitive,
    }
}

#[rustfmt::skip]
pub const CELEBRATORY: [Reaction; 8] = [
    celebrate("MARKETING NIRVANA", "Your WTP just spiked", "🌈", "nirvana", ReactionEffect::RainbowSplash),
    celebrate("IPO READY", "The board is impressed", "🚀", "gold", ReactionEffect::PsychBurst),
    celebrate("STRATEGIC ASCENSION", "You've climbed the ladder", "🦄", "rose", ReactionEffect::RainbowSplash),
    celebrate("GO BEARS!", "Haas would be proud", "🐻", "berkeley", ReactionEffect::PsychBurst),
    celebrate("WTP OVERFLOW", "Consumer surplus achieved", "💎", "teal", ReactionEffect::RainbowSplash),
    celebrate("MCKINSEY CRYING", "Your strategy is superior", "😭", "violet", ReactionEffect::PsychBurst),
    celebrate("VALUE WEDGE WIDE", "Margin expands infinitely", "📈", "emerald", ReactionEffect::RainbowSplash),
    celebrate("BRAND SOUL INTACT", "Authenticity confirmed", "🔥", "amber", ReactionEffect::PsychBurst),
];

#[rustfmt::skip]
pub const PUNITIVE: [Reaction; 8] = [
    punish("INFERNO", "Your career burns", "🔥", "inferno"),
    punish("GUILLOTINE", "Strategic execution", "⚔️", "void"),
    punish("COMMODITY TRAP", "You are now generic", "💩", "mud"),
    punish("STRATEGIC CLOWN", "The board questions you", "🤡", "clown"),
    punish("WRONG!!", "McKinsey laughs", "❌", "blood"),
    punish("CAREER LIQUIDATED", "Pack your desk", "💀", "void"),
    punish("WTP COLLAPSE", "Value wedge implodes", "📉", "ash"),
    punish("BRAND DILUTION", "Your soul is commodity", "🌀", "bruise"),
];
