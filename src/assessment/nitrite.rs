//! Nitrite evidence level.
//!
//! Rules apply in fixed precedence order and stop at the first group 1
//! `"yes"`. Later rules only lift a level that is still `LN4`, so they can
//! never downgrade evidence found earlier.

use super::NitriteLevel;
use crate::answers::{keys, AnswerSet};

pub fn classify_nitrite_level(answers: &AnswerSet) -> NitriteLevel {
    let mut level = NitriteLevel::Ln4;

    for key in keys::GROUP1_PRIMARY {
        let answer = answers.answer(key);
        if answer.is_yes() {
            return NitriteLevel::Ln1;
        }
        if answer.is_dont_know() {
            level = NitriteLevel::Ln2;
        }
    }

    if potable_water_used(answers) && !level.carries_over() {
        level = NitriteLevel::Ln3;
    }

    if level == NitriteLevel::Ln4 && equipment_nitrite_source(answers) {
        level = NitriteLevel::Ln3;
    }

    level
}

fn potable_water_used(answers: &AnswerSet) -> bool {
    answers.answer(keys::WATER_USED).is_possible()
        && answers.value(keys::WATER_SOURCE) == keys::WATER_SOURCE_POTABLE
}

/// Nitrocellulose-type equipment materials in contact with the product.
///
/// A confirmed material needs confirmed contact; an unknown material counts
/// when contact is confirmed or unknown. Also raises amine evidence.
pub(crate) fn equipment_nitrite_source(answers: &AnswerSet) -> bool {
    let materials = answers.answer(keys::EQUIPMENT_MATERIALS);
    let contact = answers.answer(keys::EQUIPMENT_CONTACT);

    (materials.is_yes() && contact.is_yes()) || (materials.is_dont_know() && contact.is_possible())
}
