//! Prompt inputs for the e-book instruction template.

use serde::Serialize;

use crate::domain::Audience;

/// Fixed outline every generated e-book must follow, in order.
pub const EBOOK_SECTIONS: [&str; 16] = [
    "PREFACE",
    "TABLE OF CONTENTS",
    "INTRODUCTION",
    "INDUSTRY EVALUATION",
    "ROLES",
    "SKILLS",
    "10-YEAR GROWTH OUTLOOK",
    "HOW TO PREPARE",
    "INTERPERSONAL SKILLS",
    "ROADMAP",
    "EXAMPLE PROJECTS",
    "CERTIFICATIONS",
    "COMPANY EXAMPLES",
    "SALARY",
    "CONCLUSION",
    "APPENDIX",
];

/// Variables exposed to the instruction template.
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext<'a> {
    pub community: &'a str,
    pub sections: &'a [&'static str],
}

impl<'a> PromptContext<'a> {
    pub fn for_audience(audience: &'a Audience) -> Self {
        Self { community: audience.as_str(), sections: &EBOOK_SECTIONS }
    }
}
