// SPDX-License-Identifier: MPL-2.0
//! Portfolio categories and category route resolution.
//!
//! Categories form a closed set. Every category has a URL-style slug (used
//! as the remote filter key and on the command line), an English display
//! name, and a localization key.

use std::fmt;
use std::str::FromStr;

/// A portfolio category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Branding,
    LogoDesign,
    SocialMedia,
    PosterFlyers,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Category; 4] = [
        Category::Branding,
        Category::LogoDesign,
        Category::SocialMedia,
        Category::PosterFlyers,
    ];

    /// Returns the slug used as the filter value and route segment.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Category::Branding => "branding",
            Category::LogoDesign => "logo-design",
            Category::SocialMedia => "social-media",
            Category::PosterFlyers => "poster-flyers",
        }
    }

    /// Returns the English display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Branding => "Branding",
            Category::LogoDesign => "Logo Design",
            Category::SocialMedia => "Social Media Design",
            Category::PosterFlyers => "Poster and Flyers",
        }
    }

    /// Returns the i18n message key for the display name.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Category::Branding => "category-branding",
            Category::LogoDesign => "category-logo-design",
            Category::SocialMedia => "category-social-media",
            Category::PosterFlyers => "category-poster-flyers",
        }
    }

    /// Looks a category up by its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.slug() == slug)
    }

    /// Resolves a route segment into a category.
    ///
    /// Absent or unknown segments resolve to the default category and are
    /// reported as redirects.
    #[must_use]
    pub fn resolve_route(segment: Option<&str>) -> RouteResolution {
        match segment.map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => match Self::from_slug(slug) {
                Some(category) => RouteResolution::Matched(category),
                None => RouteResolution::Redirected {
                    requested: Some(slug.to_string()),
                    category: Self::default(),
                },
            },
            None => RouteResolution::Redirected {
                requested: None,
                category: Self::default(),
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when parsing an unknown category slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slug(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Outcome of resolving a category route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution {
    /// The segment named a known category.
    Matched(Category),
    /// The segment was absent or unknown; the default category is used.
    Redirected {
        requested: Option<String>,
        category: Category,
    },
}

impl RouteResolution {
    /// The category to display.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            RouteResolution::Matched(category)
            | RouteResolution::Redirected { category, .. } => *category,
        }
    }
}
