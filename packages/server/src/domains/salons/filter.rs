//! Search filter compilation.
//!
//! [`SalonFilter::compile`] turns the optional `type`, `services` and `city`
//! query parameters into a predicate over provider records. The predicate is
//! always conjoined with `role == provider`. It can be evaluated in process
//! ([`SalonFilter::matches`]) or bound into the Postgres query
//! (`Salon::find_providers_matching`).

use crate::domains::salons::data::SearchParams;
use crate::domains::salons::models::{Salon, PROVIDER_ROLE};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalonFilter {
    services_for: Option<String>,
    categories: Option<Vec<String>>,
    city: Option<String>,
}

impl SalonFilter {
    /// The universal provider predicate.
    pub fn any_provider() -> Self {
        Self::default()
    }

    pub fn compile(params: &SearchParams) -> Self {
        Self {
            services_for: non_empty(params.service_type.as_deref()).map(str::to_string),
            categories: params.services.as_deref().and_then(split_categories),
            city: non_empty(params.city.as_deref()).map(str::to_string),
        }
    }

    pub fn role(&self) -> &'static str {
        PROVIDER_ROLE
    }

    /// Clientele tag that `servicesFor` must contain.
    pub fn services_for(&self) -> Option<&str> {
        self.services_for.as_deref()
    }

    /// Category tags, at least one of which `businessCategories` must contain.
    pub fn categories(&self) -> Option<&[String]> {
        self.categories.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// City fragment with LIKE metacharacters escaped (escape char `\`).
    pub fn city_like_fragment(&self) -> Option<String> {
        self.city.as_deref().map(escape_like)
    }

    pub fn is_unconstrained(&self) -> bool {
        self.services_for.is_none() && self.categories.is_none() && self.city.is_none()
    }

    pub fn matches(&self, salon: &Salon) -> bool {
        if salon.role != self.role() {
            return false;
        }

        if let Some(tag) = &self.services_for {
            if !salon.services_for.iter().any(|s| s == tag) {
                return false;
            }
        }

        if let Some(categories) = &self.categories {
            if !salon
                .business_categories
                .iter()
                .any(|c| categories.contains(c))
            {
                return false;
            }
        }

        if let Some(city) = &self.city {
            let stored = salon.address.city.as_deref().unwrap_or_default();
            if !stored.to_lowercase().contains(&city.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Split a comma-separated category list, trimming entries and dropping blanks.
fn split_categories(raw: &str) -> Option<Vec<String>> {
    let categories: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if categories.is_empty() {
        None
    } else {
        Some(categories)
    }
}

fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
