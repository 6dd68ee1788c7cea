use humbug_core::game::GameStatus;
use humbug_core::model::BANK_SIZE;
use services::GameSnapshot;

const LOW_SCORE: u32 = 30;
const CRITICAL_SCORE: u32 = 15;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeterMood {
    Healthy,
    Low,
    Critical,
}

impl MeterMood {
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        if score < CRITICAL_SCORE {
            Self::Critical
        } else if score < LOW_SCORE {
            Self::Low
        } else {
            Self::Healthy
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Healthy => "meter",
            Self::Low => "meter meter-low",
            Self::Critical => "meter meter-critical",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayVm {
    pub session_label: String,
    pub question_label: String,
    pub correct_label: String,
    pub score: u32,
    pub mood: MeterMood,
    pub strikes: Vec<bool>,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub input_open: bool,
    pub insight: Option<String>,
}

/// Map a snapshot to the play screen, or `None` outside of `Playing`.
#[must_use]
pub fn map_play(snapshot: &GameSnapshot) -> Option<PlayVm> {
    let state = &snapshot.state;
    if state.status != GameStatus::Playing {
        return None;
    }
    let question = snapshot.question.as_ref()?;

    let session = state
        .current_session_id
        .map_or_else(String::new, |id| id.to_string());
    let bank = state
        .current_bank
        .map_or_else(String::new, |bank| bank.to_string());

    let choices = question
        .choices()
        .iter()
        .zip('A'..='Z')
        .enumerate()
        .map(|(index, (text, letter))| ChoiceVm {
            index,
            letter,
            text: text.clone(),
        })
        .collect();

    Some(PlayVm {
        session_label: format!("SESSION {session}.{bank}"),
        question_label: format!("Q{}/{BANK_SIZE}", state.current_question_index + 1),
        correct_label: format!("{} CORRECT", state.total_correct),
        score: state.competence_score,
        mood: MeterMood::for_score(state.competence_score),
        strikes: (0..snapshot.max_strikes)
            .map(|i| i < state.total_wrong)
            .collect(),
        prompt: question.text().to_string(),
        choices,
        input_open: snapshot.input_open,
        insight: state.show_insight.clone(),
    })
}
