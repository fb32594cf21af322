use crate::models::Question;

pub const TYPE_KEY: &str = "type";
pub const SIZE_KEY: &str = "size";
pub const ACTIVITY_KEY: &str = "activity";
pub const ALLERGIES_KEY: &str = "allergies";
pub const NEUTERED_KEY: &str = "isNeutered";

/// Answer that turns on the allergy and neuter filters
pub const YES: &str = "Yes";

/// The match quiz, in the order it is asked
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What type of pet are you looking for?",
            &["Dog", "Cat", "Rabbit", "Bird"],
            TYPE_KEY,
        ),
        Question::new(
            "What size of pet would suit your home?",
            &["Small", "Medium", "Large", "No Preference"],
            SIZE_KEY,
        ),
        Question::new(
            "How active is your lifestyle?",
            &["Couch Potato", "Moderately Active", "Very Active"],
            ACTIVITY_KEY,
        ),
        Question::new(
            "Does anyone in your household have pet allergies?",
            &[YES, "No"],
            ALLERGIES_KEY,
        ),
        Question::new(
            "Do you want a pet that is already spayed or neutered?",
            &[YES, "No"],
            NEUTERED_KEY,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_keys_unique() {
        let questions = default_questions();
        let keys: HashSet<_> = questions.iter().map(|q| q.answer_key.as_str()).collect();

        assert_eq!(questions.len(), 5);
        assert_eq!(keys.len(), questions.len());
    }

    #[test]
    fn test_every_question_has_options() {
        for question in default_questions() {
            assert!(!question.options.is_empty(), "{} has no options", question.answer_key);
        }
    }
}
