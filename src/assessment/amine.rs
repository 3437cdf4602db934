//! Amine evidence level.
//!
//! Unlike the nitrite rules, every amine rule runs: each one may raise
//! evidence for one or more levels, and the strongest evidence found wins.

use super::nitrite::equipment_nitrite_source;
use super::AmineLevel;
use crate::answers::{keys, Answer, AnswerSet};

/// Evidence collected across all amine rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct AmineEvidence {
    la1: bool,
    la2: bool,
    la3: bool,
}

impl AmineEvidence {
    /// Record an answer whose `"yes"` and `"dont know"` map to two levels.
    fn record(&mut self, answer: Answer<'_>, on_yes: AmineLevel, on_dont_know: AmineLevel) {
        match answer {
            Answer::Yes => self.raise(on_yes),
            Answer::DontKnow => self.raise(on_dont_know),
            _ => {}
        }
    }

    fn raise(&mut self, level: AmineLevel) {
        match level {
            AmineLevel::La1 => self.la1 = true,
            AmineLevel::La2 => self.la2 = true,
            AmineLevel::La3 => self.la3 = true,
            AmineLevel::La4 => {}
        }
    }

    fn strongest(self) -> AmineLevel {
        if self.la1 {
            AmineLevel::La1
        } else if self.la2 {
            AmineLevel::La2
        } else if self.la3 {
            AmineLevel::La3
        } else {
            AmineLevel::La4
        }
    }
}

pub fn classify_amine_level(answers: &AnswerSet) -> AmineLevel {
    let mut evidence = AmineEvidence::default();

    for key in keys::GROUP1_SAME_STEP
        .iter()
        .zip(keys::GROUP1_OTHER_STEP.iter())
        .flat_map(|(same, other)| [*same, *other])
    {
        evidence.record(answers.answer(key), AmineLevel::La1, AmineLevel::La2);
    }

    if ion_exchange_water_used(answers) {
        evidence.raise(AmineLevel::La3);
    }

    evidence.record(answers.answer(keys::GROUP4), AmineLevel::La1, AmineLevel::La2);
    evidence.record(answers.answer(keys::GROUP5), AmineLevel::La2, AmineLevel::La3);
    evidence.record(answers.answer(keys::GROUP6), AmineLevel::La2, AmineLevel::La3);

    if equipment_nitrite_source(answers) {
        evidence.raise(AmineLevel::La3);
    }

    evidence.strongest()
}

fn ion_exchange_water_used(answers: &AnswerSet) -> bool {
    answers.answer(keys::WATER_USED).is_possible()
        && answers.value(keys::WATER_SOURCE) == keys::WATER_SOURCE_ION_EXCHANGE
}
