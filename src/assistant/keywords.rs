//! Canned answers selected by keyword when no model is reachable.

/// One entry of the keyword table. A rule matches when any trigger is a
/// substring of the lowercased question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeywordRule {
    pub topic: &'static str,
    pub triggers: &'static [&'static str],
    pub answer: &'static str,
    pub confidence: f64,
}

impl KeywordRule {
    pub fn matches(&self, lowered_question: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| lowered_question.contains(trigger))
    }
}

/// Rules in priority order. Earlier rules win.
pub static LEGAL_RULES: [KeywordRule; 5] = [
    KeywordRule {
        topic: "miranda",
        triggers: &["miranda", "rights", "arrest"],
        answer: "Miranda rights are constitutional protections that must be read to criminal suspects before police questioning. They include: 1) The right to remain silent, 2) The right to an attorney, 3) The right to have an attorney appointed if you cannot afford one, and 4) The warning that anything you say can be used against you in court. These rights stem from the 5th and 6th Amendments to the U.S. Constitution and were established in the landmark case Miranda v. Arizona (1966).",
        confidence: 0.95,
    },
    KeywordRule {
        topic: "copyright",
        triggers: &["copyright", "software", "intellectual property"],
        answer: "Copyright law protects software as literary works under the Copyright Act of 1976. Software copyright protection covers: 1) Source code and object code, 2) User interfaces and screen displays, 3) Documentation and manuals. Protection is automatic upon creation and lasts for the author's life plus 70 years. However, copyright only protects the expression of ideas, not the ideas themselves. Fair use exceptions may apply for research, education, or reverse engineering.",
        confidence: 0.92,
    },
    KeywordRule {
        topic: "discrimination",
        triggers: &["discrimination", "workplace", "employment"],
        answer: "Workplace discrimination occurs when an employer treats an employee or job applicant unfavorably because of protected characteristics. Protected classes include: race, color, religion, sex, national origin, age (40+), disability, and genetic information. Common forms include: hiring discrimination, pay disparities, promotion denials, harassment, and wrongful termination. The Equal Employment Opportunity Commission (EEOC) enforces federal anti-discrimination laws. Remedies may include back pay, reinstatement, and punitive damages.",
        confidence: 0.89,
    },
    KeywordRule {
        topic: "contract",
        triggers: &["contract", "agreement", "offer", "acceptance"],
        answer: "A valid contract requires four essential elements: 1) Offer - a clear proposal to enter into an agreement, 2) Acceptance - unqualified agreement to the offer's terms, 3) Consideration - something of value exchanged between parties, and 4) Mutual intent - both parties intend to be bound. Additional requirements include: capacity to contract, legality of purpose, and proper form (written for certain types). Contracts can be express (written or oral) or implied from conduct.",
        confidence: 0.91,
    },
    KeywordRule {
        topic: "fourth_amendment",
        triggers: &["fourth amendment", "search", "seizure", "privacy"],
        answer: "The Fourth Amendment protects against unreasonable searches and seizures by government officials. It requires: 1) Probable cause for searches and arrests, 2) Warrants issued by neutral magistrates, 3) Particularity in describing what can be searched or seized. Exceptions include: consent searches, plain view doctrine, exigent circumstances, and automobile searches. The exclusionary rule prevents illegally obtained evidence from being used in court. This protection applies to homes, persons, papers, and effects.",
        confidence: 0.94,
    },
];

/// Result of a keyword lookup. `rule` is `None` for the generic reply.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordAnswer {
    pub rule: Option<&'static KeywordRule>,
    pub text: String,
}

impl KeywordAnswer {
    pub fn topic(&self) -> Option<&'static str> {
        self.rule.map(|rule| rule.topic)
    }

    pub fn confidence(&self) -> Option<f64> {
        self.rule.map(|rule| rule.confidence)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeywordSelector {
    rules: &'static [KeywordRule],
}

impl Default for KeywordSelector {
    fn default() -> Self {
        Self::new(&LEGAL_RULES)
    }
}

impl KeywordSelector {
    pub fn new(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [KeywordRule] {
        self.rules
    }

    pub fn select(&self, question: &str) -> KeywordAnswer {
        let lowered = question.to_lowercase();

        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => KeywordAnswer {
                rule: Some(rule),
                text: rule.answer.to_string(),
            },
            None => KeywordAnswer {
                rule: None,
                text: generic_answer(question),
            },
        }
    }
}

pub fn generic_answer(question: &str) -> String {
    format!(
        "I understand you're asking about: '{question}'. This appears to be a legal question. \
         While I can provide general legal information, please note that this is not legal advice. \
         For specific legal matters, I recommend consulting with a qualified attorney who can provide \
         personalized guidance based on your particular circumstances and jurisdiction."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rule_order() {
        let topics: Vec<_> = LEGAL_RULES.iter().map(|r| r.topic).collect();
        assert_eq!(
            topics,
            vec![
                "miranda",
                "copyright",
                "discrimination",
                "contract",
                "fourth_amendment"
            ]
        );
    }

    #[test]
    fn test_confidences_are_in_range() {
        for rule in &LEGAL_RULES {
            assert!((0.0..=1.0).contains(&rule.confidence), "{}", rule.topic);
        }
    }

    #[test]
    fn test_substring_match_not_whole_word() {
        assert!(LEGAL_RULES[3].matches("subcontractors are common"));
    }

    #[test]
    fn test_custom_rule_table() {
        static RULES: [KeywordRule; 1] = [KeywordRule {
            topic: "lease",
            triggers: &["lease"],
            answer: "Leases are contracts for property.",
            confidence: 0.5,
        }];
        let selector = KeywordSelector::new(&RULES);

        let answer = selector.select("Can I break my LEASE?");
        assert_eq!(answer.topic(), Some("lease"));
        assert_eq!(answer.confidence(), Some(0.5));

        let answer = selector.select("What is a contract?");
        assert_eq!(answer.topic(), None);
        assert!(answer.text.contains("'What is a contract?'"));
    }
}
