use super::types::ConsultationTopic;

/// Topic guards in priority order. Order matters: the first guard whose
/// keywords appear in the query decides the topic, so "heart" only routes to
/// `Cardiac` when neither blood pressure nor diabetes is mentioned.
const TOPIC_RULES: [(ConsultationTopic, &[&str]); 3] = [
    (ConsultationTopic::BloodPressure, &["blood pressure", "hypertension"]),
    (ConsultationTopic::Diabetes, &["diabetes", "blood sugar", "a1c"]),
    (ConsultationTopic::Cardiac, &["chest pain", "heart"]),
];

/// Classify a consultation query into a topic using keyword heuristics.
pub fn classify_query(text: &str) -> ConsultationTopic {
    let lower = text.to_lowercase();

    TOPIC_RULES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| lower.contains(p)))
        .map(|(topic, _)| *topic)
        .unwrap_or(ConsultationTopic::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_blood_pressure_queries() {
        assert_eq!(
            classify_query("what does my blood pressure mean"),
            ConsultationTopic::BloodPressure
        );
        assert_eq!(
            classify_query("Is my HYPERTENSION getting worse?"),
            ConsultationTopic::BloodPressure
        );
    }

    #[test]
    fn classify_diabetes_queries() {
        assert_eq!(classify_query("Do I have diabetes?"), ConsultationTopic::Diabetes);
        assert_eq!(
            classify_query("my blood sugar feels off"),
            ConsultationTopic::Diabetes
        );
        assert_eq!(classify_query("explain my A1C"), ConsultationTopic::Diabetes);
    }

    #[test]
    fn classify_cardiac_queries() {
        assert_eq!(
            classify_query("I get chest pain when running"),
            ConsultationTopic::Cardiac
        );
        assert_eq!(classify_query("Is my heart ok?"), ConsultationTopic::Cardiac);
    }

    #[test]
    fn classify_general_fallback() {
        assert_eq!(classify_query("How much should I sleep?"), ConsultationTopic::General);
        assert_eq!(classify_query(""), ConsultationTopic::General);
    }

    #[test]
    fn earlier_topic_wins_when_several_match() {
        assert_eq!(
            classify_query("does diabetes affect my heart and blood pressure"),
            ConsultationTopic::BloodPressure
        );
        assert_eq!(
            classify_query("heart risk from high blood sugar"),
            ConsultationTopic::Diabetes
        );
    }
}
