//! Static catalog of the job attributes collected by the data-entry screen.
//!
//! The catalog is the single source of field identity: form state, validation,
//! request bodies and prompts all iterate [`definitions`]. Adding a field means
//! adding a definition here and nothing else.

use once_cell::sync::Lazy;

/// One permitted value of a field together with its human readable label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedValue {
    pub value: &'static str,
    pub display_label: &'static str,
}

impl AllowedValue {
    const fn new(value: &'static str, display_label: &'static str) -> Self {
        Self {
            value,
            display_label,
        }
    }

    /// Values whose wire form is also their label.
    const fn plain(value: &'static str) -> Self {
        Self::new(value, value)
    }
}

/// Declarative description of a single required attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub allowed_values: Vec<AllowedValue>,
}

impl FieldDefinition {
    fn new(key: &'static str, label: &'static str, allowed_values: Vec<AllowedValue>) -> Self {
        Self {
            key,
            label,
            allowed_values,
        }
    }

    pub fn allows(&self, value: &str) -> bool {
        self.allowed_values.iter().any(|allowed| allowed.value == value)
    }

    pub fn display_label_for(&self, value: &str) -> Option<&'static str> {
        self.allowed_values
            .iter()
            .find(|allowed| allowed.value == value)
            .map(|allowed| allowed.display_label)
    }

    /// Resolves user input against either the wire value or the display label.
    pub fn resolve(&self, input: &str) -> Option<&'static str> {
        let trimmed = input.trim();
        self.allowed_values
            .iter()
            .find(|allowed| allowed.value == trimmed)
            .or_else(|| {
                self.allowed_values
                    .iter()
                    .find(|allowed| allowed.display_label.eq_ignore_ascii_case(trimmed))
            })
            .map(|allowed| allowed.value)
    }
}

static DEFINITIONS: Lazy<Vec<FieldDefinition>> = Lazy::new(|| {
    vec![
        FieldDefinition::new(
            "jobTitle",
            "Job title or position name",
            [
                "AI Architect",
                "AI Consultant",
                "AI Product Manager",
                "AI Research Scientist",
                "AI Software Engineer",
                "AI Specialist",
                "Autonomous Systems Engineer",
                "Computer Vision Engineer",
                "Data Analyst",
                "Data Engineer",
                "Data Scientist",
                "Deep Learning Engineer",
                "Head of AI",
                "Machine Learning Engineer",
                "Machine Learning Researcher",
                "ML Ops Engineer",
                "NLP Engineer",
                "Principal Data Scientist",
                "Research Scientist",
                "Robotics Engineer",
            ]
            .into_iter()
            .map(AllowedValue::plain)
            .collect(),
        ),
        FieldDefinition::new(
            "experienceLevel",
            "Level of experience",
            vec![
                AllowedValue::new("EN", "Entry level"),
                AllowedValue::new("MI", "Mid level"),
                AllowedValue::new("SE", "Senior level"),
                AllowedValue::new("EX", "Executive"),
            ],
        ),
        FieldDefinition::new(
            "yearsExperience",
            "Required years of work experience",
            vec![
                AllowedValue::new("0-1", "0-1 years"),
                AllowedValue::new("1-3", "1-3 years"),
                AllowedValue::new("3-5", "3-5 years"),
                AllowedValue::new("5-7", "5-7 years"),
                AllowedValue::new("7-10", "7-10 years"),
                AllowedValue::new("10+", "More than 10 years"),
            ],
        ),
        FieldDefinition::new(
            "employmentType",
            "Type of employment",
            vec![
                AllowedValue::new("FT", "Full-time"),
                AllowedValue::new("PT", "Part-time"),
                AllowedValue::new("CT", "Contract"),
                AllowedValue::new("FL", "Freelance"),
            ],
        ),
        FieldDefinition::new(
            "remoteWork",
            "Proportion of remote work",
            vec![
                AllowedValue::new("0", "On-site"),
                AllowedValue::new("50", "Hybrid"),
                AllowedValue::new("100", "Fully remote"),
            ],
        ),
        FieldDefinition::new(
            "companySize",
            "Company size",
            vec![
                AllowedValue::new("S", "Small (fewer than 50 employees)"),
                AllowedValue::new("M", "Medium (50 to 250 employees)"),
                AllowedValue::new("L", "Large (more than 250 employees)"),
            ],
        ),
        FieldDefinition::new(
            "country",
            "Country where the company is located",
            [
                "Australia",
                "Austria",
                "Canada",
                "China",
                "Denmark",
                "Finland",
                "France",
                "Germany",
                "India",
                "Ireland",
                "Israel",
                "Japan",
                "Netherlands",
                "Norway",
                "Singapore",
                "South Korea",
                "Sweden",
                "Switzerland",
                "United Kingdom",
                "United States",
            ]
            .into_iter()
            .map(AllowedValue::plain)
            .collect(),
        ),
        FieldDefinition::new(
            "industry",
            "Industry sector of the company",
            [
                "Automotive",
                "Consulting",
                "Education",
                "Energy",
                "Finance",
                "Gaming",
                "Government",
                "Healthcare",
                "Manufacturing",
                "Media",
                "Real Estate",
                "Retail",
                "Technology",
                "Telecommunications",
                "Transportation",
            ]
            .into_iter()
            .map(AllowedValue::plain)
            .collect(),
        ),
        FieldDefinition::new(
            "education",
            "Required education level",
            vec![
                AllowedValue::new("Associate", "Associate degree"),
                AllowedValue::new("Bachelor", "Bachelor's degree"),
                AllowedValue::new("Master", "Master's degree"),
                AllowedValue::new("PhD", "Doctorate (PhD)"),
            ],
        ),
    ]
});

/// Ordered field definitions. Identical on every call.
pub fn definitions() -> &'static [FieldDefinition] {
    DEFINITIONS.as_slice()
}

pub fn find(key: &str) -> Option<&'static FieldDefinition> {
    definitions().iter().find(|definition| definition.key == key)
}

pub fn keys() -> impl Iterator<Item = &'static str> {
    definitions().iter().map(|definition| definition.key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_holds_nine_fields() {
        assert_eq!(definitions().len(), 9);
    }

    #[test]
    fn keys_are_unique() {
        let unique: HashSet<&str> = keys().collect();
        assert_eq!(unique.len(), definitions().len());
    }

    #[test]
    fn allowed_values_are_non_empty_and_distinct() {
        for definition in definitions() {
            assert!(
                !definition.allowed_values.is_empty(),
                "{} has no allowed values",
                definition.key
            );
            let distinct: HashSet<&str> = definition
                .allowed_values
                .iter()
                .map(|allowed| allowed.value)
                .collect();
            assert_eq!(
                distinct.len(),
                definition.allowed_values.len(),
                "{} has duplicate values",
                definition.key
            );
        }
    }

    #[test]
    fn definitions_are_stable_between_calls() {
        assert_eq!(definitions(), definitions());
        assert!(std::ptr::eq(definitions(), definitions()));
    }

    #[test]
    fn resolve_accepts_value_or_label() {
        let remote = find("remoteWork").unwrap();
        assert_eq!(remote.resolve("50"), Some("50"));
        assert_eq!(remote.resolve("fully remote"), Some("100"));
        assert_eq!(remote.resolve("sometimes"), None);
    }

    #[test]
    fn unknown_key_is_not_found() {
        assert!(find("salary").is_none());
    }
}
