use crate::models::LessonSeo;

pub const MAX_SCORE: u32 = 100;
pub const TITLE_LIMIT: usize = 60;
pub const DESCRIPTION_LIMIT: usize = 160;

struct Check {
    label: &'static str,
    points: u32,
    passes: fn(&LessonSeo) -> bool,
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

const CHECKS: &[Check] = &[
    Check {
        label: "meta title is set",
        points: 15,
        passes: |seo| present(&seo.meta_title),
    },
    Check {
        label: "meta title is 60 characters or less",
        points: 10,
        passes: |seo| present(&seo.meta_title) && seo.meta_title.chars().count() <= TITLE_LIMIT,
    },
    Check {
        label: "meta description is set",
        points: 15,
        passes: |seo| present(&seo.meta_description),
    },
    Check {
        label: "meta description is 160 characters or less",
        points: 10,
        passes: |seo| {
            present(&seo.meta_description) && seo.meta_description.chars().count() <= DESCRIPTION_LIMIT
        },
    },
    Check {
        label: "meta keywords are set",
        points: 10,
        passes: |seo| present(&seo.meta_keywords),
    },
    Check {
        label: "Open Graph title is set",
        points: 10,
        passes: |seo| present(&seo.og_title),
    },
    Check {
        label: "Open Graph description is set",
        points: 10,
        passes: |seo| present(&seo.og_description),
    },
    Check {
        label: "Open Graph image is set",
        points: 10,
        passes: |seo| present(&seo.og_image),
    },
    Check {
        label: "reading time is set",
        points: 10,
        passes: |seo| seo.reading_time.unwrap_or(0) > 0,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoReport {
    pub score: u32,
    pub unmet: Vec<&'static str>,
}

/// 0-100 heuristic over the lesson's meta fields.
pub fn seo_score(seo: &LessonSeo) -> u32 {
    seo_report(seo).score
}

pub fn seo_report(seo: &LessonSeo) -> SeoReport {
    let mut score = 0;
    let mut unmet = Vec::new();
    for check in CHECKS {
        if (check.passes)(seo) {
            score += check.points;
        } else {
            unmet.push(check.label);
        }
    }
    SeoReport {
        score: score.min(MAX_SCORE),
        unmet,
    }
}
