/// Count how many lexicon keywords occur in `text`.
///
/// Matches are plain substring containment, not token matches: "booking"
/// counts inside "rebooking". Callers lowercase the input once before
/// scoring.
pub fn score_intent(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|&&keyword| text.contains(keyword)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{APPOINTMENT_KEYWORDS, FINANCIAL_KEYWORDS, GENERAL_KEYWORDS};

    #[test]
    fn test_counts_each_matching_keyword_once() {
        let score = score_intent("i want to schedule an appointment", APPOINTMENT_KEYWORDS);
        assert_eq!(score, 2); // "schedule" + "appointment"
    }

    #[test]
    fn test_no_matches_scores_zero() {
        assert_eq!(score_intent("the weather is nice today", APPOINTMENT_KEYWORDS), 0);
        assert_eq!(score_intent("", FINANCIAL_KEYWORDS), 0);
    }

    #[test]
    fn test_substring_containment_is_unanchored() {
        // "rebooking" contains both "booking" and "book"
        assert_eq!(score_intent("about my rebooking", APPOINTMENT_KEYWORDS), 2);
        // "fee" matches inside "coffee"
        assert_eq!(score_intent("i spilled my coffee", FINANCIAL_KEYWORDS), 1);
    }

    #[test]
    fn test_multi_word_phrases_match() {
        assert_eq!(score_intent("can i see the doctor", APPOINTMENT_KEYWORDS), 1);
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let score = score_intent("hours hours hours", GENERAL_KEYWORDS);
        assert_eq!(score, 1);
    }
}
