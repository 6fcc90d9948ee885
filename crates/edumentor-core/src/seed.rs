//! Built-in content aligned with NCF 2023.
//!
//! Five subjects across grades 1–10. The table is immutable; every
//! [`ContentLibrary`](crate::ContentLibrary) takes its own copy.

use crate::model::{ContentType, Difficulty, Grade, LearningContent};

use ContentType::{Activity, Quiz, Text};
use Difficulty::{Advanced, Beginner, Intermediate};

struct SeedRecord {
    id: &'static str,
    subject: &'static str,
    topic: &'static str,
    difficulty: Difficulty,
    content_type: ContentType,
    body: &'static str,
    alignment: &'static str,
    grade: u8,
}

static BUILTIN_CONTENT: [SeedRecord; 25] = [
    // Mathematics
    SeedRecord {
        id: "math-001",
        subject: "math",
        topic: "Counting and Numbers",
        difficulty: Beginner,
        content_type: Text,
        body: "Numbers from 1 to 100. Learn to count forwards and backwards. Practice skip counting by 2s, 5s, and 10s.",
        alignment: "NCF-MATH-G1-NUM-1",
        grade: 1,
    },
    SeedRecord {
        id: "math-002",
        subject: "math",
        topic: "Addition and Subtraction",
        difficulty: Beginner,
        content_type: Activity,
        body: "Use counting beads or stones to practise addition and subtraction within 20. Story problems using local contexts.",
        alignment: "NCF-MATH-G2-OPS-1",
        grade: 2,
    },
    SeedRecord {
        id: "math-003",
        subject: "math",
        topic: "Multiplication Tables",
        difficulty: Beginner,
        content_type: Text,
        body: "Multiplication tables from 1 to 10. Visual array models. Repeated addition concept. Practice with rhymes and patterns.",
        alignment: "NCF-MATH-G3-MUL-1",
        grade: 3,
    },
    SeedRecord {
        id: "math-004",
        subject: "math",
        topic: "Fractions",
        difficulty: Intermediate,
        content_type: Text,
        body: "Understanding fractions as parts of a whole. Equivalent fractions. Comparing fractions with same and different denominators. Real-life examples: sharing rotis, dividing land.",
        alignment: "NCF-MATH-G5-FRA-1",
        grade: 5,
    },
    SeedRecord {
        id: "math-005",
        subject: "math",
        topic: "Fractions Quiz",
        difficulty: Intermediate,
        content_type: Quiz,
        body: r#"[{"q":"What is 1/2 + 1/4?","options":["1/2","3/4","2/6","1/6"],"answer":"3/4"},{"q":"Which is bigger: 2/3 or 3/4?","options":["2/3","3/4","Equal","Cannot tell"],"answer":"3/4"}]"#,
        alignment: "NCF-MATH-G5-FRA-2",
        grade: 5,
    },
    SeedRecord {
        id: "math-006",
        subject: "math",
        topic: "Algebra Introduction",
        difficulty: Intermediate,
        content_type: Text,
        body: "Introduction to variables and simple equations. Solving x + 5 = 12. Writing word problems as equations.",
        alignment: "NCF-MATH-G7-ALG-1",
        grade: 7,
    },
    SeedRecord {
        id: "math-007",
        subject: "math",
        topic: "Geometry: Triangles",
        difficulty: Intermediate,
        content_type: Activity,
        body: "Properties of triangles. Sum of angles = 180°. Types: equilateral, isosceles, scalene. Measure angles with protractor activity.",
        alignment: "NCF-MATH-G7-GEO-1",
        grade: 7,
    },
    SeedRecord {
        id: "math-008",
        subject: "math",
        topic: "Linear Equations",
        difficulty: Advanced,
        content_type: Text,
        body: "Solving simultaneous linear equations by substitution and elimination. Real-world applications: mixtures, speed-distance-time.",
        alignment: "NCF-MATH-G9-ALG-2",
        grade: 9,
    },
    SeedRecord {
        id: "math-009",
        subject: "math",
        topic: "Quadratic Equations",
        difficulty: Advanced,
        content_type: Text,
        body: "Solving ax²+bx+c=0 by factorisation and quadratic formula. Discriminant. Nature of roots.",
        alignment: "NCF-MATH-G10-ALG-3",
        grade: 10,
    },
    SeedRecord {
        id: "math-010",
        subject: "math",
        topic: "Statistics: Mean Median Mode",
        difficulty: Intermediate,
        content_type: Activity,
        body: "Calculate mean, median, and mode from real data sets (e.g. rainfall, crop yields). Understand when to use each measure.",
        alignment: "NCF-MATH-G8-STAT-1",
        grade: 8,
    },
    // Science
    SeedRecord {
        id: "sci-001",
        subject: "science",
        topic: "Plants and Photosynthesis",
        difficulty: Beginner,
        content_type: Text,
        body: "How plants make food using sunlight, water, and carbon dioxide. Chlorophyll. Leaf structure. Importance of plants in food chain.",
        alignment: "NCF-SCI-G5-BIO-1",
        grade: 5,
    },
    SeedRecord {
        id: "sci-002",
        subject: "science",
        topic: "Human Body Systems",
        difficulty: Intermediate,
        content_type: Text,
        body: "Digestive, circulatory, and respiratory systems. Functions of major organs. Nutrition and health. Hygiene practices.",
        alignment: "NCF-SCI-G7-BIO-2",
        grade: 7,
    },
    SeedRecord {
        id: "sci-003",
        subject: "science",
        topic: "Electricity and Circuits",
        difficulty: Intermediate,
        content_type: Activity,
        body: "Build a simple circuit with battery, wire, and bulb. Conductors and insulators. Series vs parallel circuits. Safety with electricity.",
        alignment: "NCF-SCI-G7-PHY-1",
        grade: 7,
    },
    SeedRecord {
        id: "sci-004",
        subject: "science",
        topic: "Atoms and Molecules",
        difficulty: Advanced,
        content_type: Text,
        body: "Structure of atom: protons, neutrons, electrons. Valency. Chemical formulae. Balancing equations. Periodic table introduction.",
        alignment: "NCF-SCI-G9-CHE-1",
        grade: 9,
    },
    SeedRecord {
        id: "sci-005",
        subject: "science",
        topic: "Ecosystems",
        difficulty: Intermediate,
        content_type: Text,
        body: "Food chains and food webs. Producers, consumers, decomposers. Biodiversity. Indian ecosystems: forests, wetlands, grasslands.",
        alignment: "NCF-SCI-G8-ENV-1",
        grade: 8,
    },
    SeedRecord {
        id: "sci-006",
        subject: "science",
        topic: "Heredity and Evolution",
        difficulty: Advanced,
        content_type: Text,
        body: "Mendel's laws of inheritance. Dominant and recessive traits. DNA basics. Theory of evolution and natural selection.",
        alignment: "NCF-SCI-G10-BIO-3",
        grade: 10,
    },
    // Hindi
    SeedRecord {
        id: "hindi-001",
        subject: "hindi",
        topic: "Varnamala (Alphabet)",
        difficulty: Beginner,
        content_type: Text,
        body: "Hindi alphabet: 11 swaras (vowels) and 35 vyanjanas (consonants). Devanagari script. Matras. Basic words.",
        alignment: "NCF-HINDI-G1-READ-1",
        grade: 1,
    },
    SeedRecord {
        id: "hindi-002",
        subject: "hindi",
        topic: "Reading Comprehension",
        difficulty: Intermediate,
        content_type: Text,
        body: "Short stories and poems from Rimjhim textbook. Understanding main idea, characters, and moral. Answer in complete sentences.",
        alignment: "NCF-HINDI-G5-READ-2",
        grade: 5,
    },
    SeedRecord {
        id: "hindi-003",
        subject: "hindi",
        topic: "Essay Writing",
        difficulty: Advanced,
        content_type: Activity,
        body: "Structure of a Hindi essay: Prastavan, Mukhya Bhag, Upasanhar. Practice topics: Mera Gaon, Paryavaran Pradushan, Swastha Jeevan.",
        alignment: "NCF-HINDI-G8-WRITE-1",
        grade: 8,
    },
    // Social studies / EVS
    SeedRecord {
        id: "evs-001",
        subject: "social_studies",
        topic: "Our Neighbourhood",
        difficulty: Beginner,
        content_type: Activity,
        body: "Map your school and home. Identify helpers in the community: farmers, teachers, doctors, postmen. Discuss their roles.",
        alignment: "NCF-EVS-G3-SOC-1",
        grade: 3,
    },
    SeedRecord {
        id: "evs-002",
        subject: "social_studies",
        topic: "Indian History: Ancient Civilisations",
        difficulty: Intermediate,
        content_type: Text,
        body: "Indus Valley Civilisation: Harappa and Mohenjo-daro. Vedic period. Maurya Empire. Gupta Golden Age. Key contributions to science, mathematics, and art.",
        alignment: "NCF-SS-G6-HIST-1",
        grade: 6,
    },
    SeedRecord {
        id: "evs-003",
        subject: "social_studies",
        topic: "Indian Constitution and Democracy",
        difficulty: Advanced,
        content_type: Text,
        body: "Fundamental Rights and Duties. Directive Principles. Structure of government: Legislature, Executive, Judiciary. Preamble and its significance.",
        alignment: "NCF-SS-G10-CIV-1",
        grade: 10,
    },
    // English
    SeedRecord {
        id: "eng-001",
        subject: "english",
        topic: "Basic Reading: Phonics",
        difficulty: Beginner,
        content_type: Activity,
        body: "Letter sounds and blends. CVC words (cat, bat, mat). Short stories with illustrations. Oral reading practice.",
        alignment: "NCF-ENG-G1-READ-1",
        grade: 1,
    },
    SeedRecord {
        id: "eng-002",
        subject: "english",
        topic: "Grammar: Tenses",
        difficulty: Intermediate,
        content_type: Text,
        body: "Simple present, past, and future tenses. Present and past continuous. Perfect tenses introduction. Common errors in Indian English.",
        alignment: "NCF-ENG-G6-GRAM-1",
        grade: 6,
    },
    SeedRecord {
        id: "eng-003",
        subject: "english",
        topic: "Letter Writing",
        difficulty: Intermediate,
        content_type: Activity,
        body: "Formal and informal letter formats. Application for leave. Complaint letter. Invitation letter. Practice exercises with real contexts.",
        alignment: "NCF-ENG-G8-WRITE-1",
        grade: 8,
    },
];

/// An owned copy of the built-in content table.
pub(crate) fn builtin_content() -> Vec<LearningContent> {
    BUILTIN_CONTENT
        .iter()
        .map(|r| LearningContent {
            content_id: r.id.to_string(),
            subject: r.subject.to_string(),
            topic: r.topic.to_string(),
            difficulty: r.difficulty,
            content_type: r.content_type,
            body: r.body.to_string(),
            ncf_alignment: vec![r.alignment.to_string()],
            grade_level: Grade::clamped(r.grade),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_25_unique_records() {
        let content = builtin_content();
        assert_eq!(content.len(), 25);
        let ids: HashSet<_> = content.iter().map(|c| c.content_id.as_str()).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn seed_grades_are_in_range_without_clamping() {
        for record in &BUILTIN_CONTENT {
            assert!(
                Grade::new(record.grade).is_ok(),
                "{} has grade {}",
                record.id,
                record.grade
            );
        }
    }

    #[test]
    fn seed_alignment_codes_carry_grade() {
        for content in builtin_content() {
            let code = &content.ncf_alignment[0];
            assert!(code.starts_with("NCF-"), "{code}");
            assert!(
                code.contains(&format!("-G{}-", content.grade_level)),
                "{} / {code}",
                content.content_id
            );
        }
    }
}
