//! Overpass QL query construction.
//!
//! Each mood owns a fixed [`MoodTemplate`]: a list of tag filters that are
//! unioned together. The search centre and radius are typed slots filled in
//! by [`OverpassQuery::render`]; templates never contain coordinates, so there
//! is nothing to find-and-replace.

use std::fmt::{self, Write as _};

use moodmap_core::{AppConfig, Coordinates, Mood};

/// A single tag predicate in Overpass QL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagFilter {
    /// `["key"="value"]`
    Equals {
        key: &'static str,
        value: &'static str,
    },
    /// `["key"~"a|b|c"]`
    OneOf {
        key: &'static str,
        values: &'static [&'static str],
    },
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::Equals { key, value } => write!(f, "[\"{key}\"=\"{value}\"]"),
            TagFilter::OneOf { key, values } => write!(f, "[\"{key}\"~\"{}\"]", values.join("|")),
        }
    }
}

/// The set of filters that defines what a mood is looking for.
#[derive(Debug, PartialEq, Eq)]
pub struct MoodTemplate {
    pub mood: Mood,
    pub filters: &'static [TagFilter],
}

static WORK: MoodTemplate = MoodTemplate {
    mood: Mood::Work,
    filters: &[
        TagFilter::OneOf {
            key: "amenity",
            values: &["cafe", "library"],
        },
        TagFilter::Equals {
            key: "office",
            value: "coworking",
        },
    ],
};

static DATE: MoodTemplate = MoodTemplate {
    mood: Mood::Date,
    filters: &[
        TagFilter::OneOf {
            key: "amenity",
            values: &["restaurant", "bar"],
        },
        TagFilter::Equals {
            key: "leisure",
            value: "park",
        },
    ],
};

static QUICK_BITE: MoodTemplate = MoodTemplate {
    mood: Mood::QuickBite,
    filters: &[
        TagFilter::Equals {
            key: "amenity",
            value: "fast_food",
        },
        TagFilter::Equals {
            key: "shop",
            value: "bakery",
        },
    ],
};

static BUDGET: MoodTemplate = MoodTemplate {
    mood: Mood::Budget,
    filters: &[TagFilter::Equals {
        key: "amenity",
        value: "fast_food",
    }],
};

impl MoodTemplate {
    #[must_use]
    pub fn for_mood(mood: Mood) -> &'static MoodTemplate {
        match mood {
            Mood::Work => &WORK,
            Mood::Date => &DATE,
            Mood::QuickBite => &QUICK_BITE,
            Mood::Budget => &BUDGET,
        }
    }

    /// Looks up a template by mood key. Unknown keys get the work template.
    #[must_use]
    pub fn for_key(key: &str) -> &'static MoodTemplate {
        let (mood, fell_back) = Mood::from_key_or_work(key);
        if fell_back {
            tracing::warn!(key, "unknown mood key, using the work template");
        }
        Self::for_mood(mood)
    }
}

/// Tunables that shape every discovery query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Radius of the `around` filter in metres.
    pub radius_m: u32,
    /// Cap on primary elements in the `out body` statement.
    pub result_limit: u32,
    /// Server-side `[timeout:..]` hint in seconds.
    pub timeout_secs: u32,
}

impl QueryOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            radius_m: config.search_radius_m,
            result_limit: config.result_limit,
            timeout_secs: config.query_timeout_secs,
        }
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            radius_m: 2000,
            result_limit: 20,
            timeout_secs: 25,
        }
    }
}

/// A fully parameterised discovery query.
#[derive(Debug, Clone, Copy)]
pub struct OverpassQuery {
    pub template: &'static MoodTemplate,
    pub center: Coordinates,
    pub options: QueryOptions,
}

impl OverpassQuery {
    #[must_use]
    pub fn new(template: &'static MoodTemplate, center: Coordinates, options: QueryOptions) -> Self {
        Self {
            template,
            center,
            options,
        }
    }

    /// Renders the query text posted to the interpreter.
    ///
    /// ```text
    /// [out:json][timeout:25];
    /// (
    ///   node["amenity"~"cafe|library"](around:2000,37.7749,-122.4194);
    ///   node["office"="coworking"](around:2000,37.7749,-122.4194);
    /// );
    /// out body 20;
    /// >;
    /// out skel qt;
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let QueryOptions {
            radius_m,
            result_limit,
            timeout_secs,
        } = self.options;
        let Coordinates { lat, lng } = self.center;

        let mut out = format!("[out:json][timeout:{timeout_secs}];\n(\n");
        for filter in self.template.filters {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "  node{filter}(around:{radius_m},{lat},{lng});");
        }
        let _ = write!(out, ");\nout body {result_limit};\n>;\nout skel qt;\n");
        out
    }
}

impl fmt::Display for OverpassQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
