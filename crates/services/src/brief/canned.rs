use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use humbug_core::rng::{RandomSource, ThreadRandom, pick_from};

use super::{BriefGenerator, BriefTier};
use crate::error::BriefError;

const EXCELLENT: [&str; 5] = [
    "Your strategic acumen has temporarily suspended my disappointment in this generation of MBAs. The Value Wedge isn't just a concept to you—it's a weapon. Enjoy this fleeting moment of competence.",
    "I've seen McKinsey partners with less strategic clarity. Your WTP intuition is almost... acceptable. Don't let it go to your head—the market corrects for hubris.",
    "Remarkable. You've demonstrated that Haas hasn't completely abandoned rigor. Your understanding of brand moats suggests you might actually survive your first CMO role. Might.",
    "The board would be impressed. I'm merely... not actively disappointed. Your grasp of positioning suggests you've been paying attention. Continue this trajectory.",
    "Strategic ascension achieved. You've proven that not all MBA candidates are expensive PowerPoint generators. Your Value Wedge is wide and your soul is intact.",
];

const GOOD: [&str; 5] = [
    "Acceptable performance. Your understanding of brand architecture won't get you fired immediately. The Value Wedge concept has clearly penetrated your neural pathways. Keep climbing.",
    "You've demonstrated competence, which in today's marketing landscape is practically exceptional. Your mental availability is high. Capitalize on it.",
    "Not bad for someone who probably still Googles 'what is CLV.' Your brand soul shows promise—don't let corporate bureaucracy optimize it into oblivion.",
    "Your strategic instincts are developing. The 60/40 rule clearly resonates. Now apply it before your CFO reallocates your budget to 'efficiency initiatives.'",
    "Passing grade achieved with minimal embarrassment. Your understanding of the benefits ladder suggests you might actually climb it someday.",
];

const POOR: [&str; 5] = [
    "Your strategic clarity is roughly equivalent to a Magic 8-Ball's. The Value Wedge weeps. Consider pivoting to a career where WTP is irrelevant—like government work.",
    "I've witnessed category commoditization less painful than this performance. Your brand soul appears to be on life support. Immediate strategic intervention required.",
    "The Inferno of Incompetence has claimed another victim. Your understanding of positioning suggests you'd place Ferrari next to Kia in a perceptual map.",
    "Byron Sharp would demand his theories back after seeing this. Your mental availability is negative. Your physical availability to marketing roles should be too.",
    "This performance represents a negative brand equity event for your career. Your Value Wedge has collapsed. The CFO is already reallocating your budget.",
];

const TERRIBLE: [&str; 5] = [
    "Strategic liquidation complete. Your career WTP has achieved commodity status. I've seen interns with better positioning instincts. Consider LinkedIn for 'growth opportunities.'",
    "WASTED. Your understanding of marketing strategy suggests you believe 'brand soul' is something you sell to a crossroads demon. It's not. Usually.",
    "The market has spoken, and it said 'no.' Your grasp of the Value Wedge is approximately that of a wet paper towel. Recommend immediate remedial education.",
    "Catastrophic strategic failure. Your brand moat is a puddle. Your CLV calculation would make a CFO weep. The Inferno of Incompetence welcomes you.",
    "I regret to inform you that your strategic competence has filed for chapter 11. Your positioning is 'everyone, everywhere, somehow.' That's not a strategy—it's a cry for help.",
];

/// (session title, line when passing, line when failing)
const FLAVORS: [(&str, &str, &str); 10] = [
    (
        "Value Creation",
        "Your Value Wedge stands tall.",
        "Your Value Wedge is a value crevice.",
    ),
    (
        "Brand Audits",
        "The architecture holds.",
        "Your brand house has foundation issues.",
    ),
    (
        "Brand Soul",
        "Liquid Death would approve.",
        "Your brand soul has been optimized into oblivion.",
    ),
    (
        "Positioning",
        "You've climbed the ladder.",
        "You're stuck at the attributes rung.",
    ),
    (
        "Influencers",
        "Trust transferred successfully.",
        "Your influencer strategy is a trust deficit.",
    ),
    (
        "Content Strategy",
        "Category authority established.",
        "Your content is expensive noise.",
    ),
    (
        "Performance",
        "The funnel flows.",
        "Your CAC exceeds your LTV. Classic.",
    ),
    (
        "Loyalty",
        "Byron Sharp nods approvingly.",
        "Sharp would use this as a cautionary example.",
    ),
    (
        "Brand Moats",
        "Your moat is filling with water.",
        "Your moat is a drainage ditch.",
    ),
    (
        "Modern CMO",
        "P&L ownership achieved.",
        "You're still a cost center. Fix that.",
    ),
];

const FLAVOR_PASS_MARK: u32 = 7;

fn briefs_for(tier: BriefTier) -> &'static [&'static str] {
    match tier {
        BriefTier::Excellent => &EXCELLENT,
        BriefTier::Good => &GOOD,
        BriefTier::Poor => &POOR,
        BriefTier::Terrible => &TERRIBLE,
    }
}

/// Closing line for a known session title, or `None`.
#[must_use]
pub fn session_flavor(session_title: &str, correct: u32) -> Option<&'static str> {
    FLAVORS
        .iter()
        .find(|(title, _, _)| *title == session_title)
        .map(|(_, pass, fail)| {
            if correct >= FLAVOR_PASS_MARK {
                *pass
            } else {
                *fail
            }
        })
}

/// Offline generator built from fixed copy. Never fails.
pub struct CannedBriefGenerator {
    rng: Mutex<Box<dyn RandomSource>>,
}

impl CannedBriefGenerator {
    #[must_use]
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Compose a brief synchronously.
    #[must_use]
    pub fn compose(&self, correct: u32, session_title: &str) -> String {
        let briefs = briefs_for(BriefTier::for_correct(correct));
        let brief = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            pick_from(rng.as_mut(), briefs)
                .copied()
                .unwrap_or(briefs[0])
        };
        match session_flavor(session_title, correct) {
            Some(flavor) => format!("{brief} {flavor}"),
            None => brief.to_string(),
        }
    }
}

impl Default for CannedBriefGenerator {
    fn default() -> Self {
        Self::new(Box::new(ThreadRandom))
    }
}

#[async_trait]
impl BriefGenerator for CannedBriefGenerator {
    async fn generate_brief(
        &self,
        correct: u32,
        session_title: &str,
    ) -> Result<String, BriefError> {
        Ok(self.compose(correct, session_title))
    }
}
