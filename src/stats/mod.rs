//! Competitive-programming profile widget.
//!
//! Lifecycle per page load:
//!
//! ```text
//! NotConfigured                       (no container / placeholder handle)
//! Loading ──► Rendered                (both requests succeeded)
//!         └─► Unavailable             (either request failed)
//! ```
//!
//! Every state is terminal; reloading the page is the only retry.

pub mod api;
pub mod join;

use crate::clock::Clock;
use crate::config::StatsConfig;
use crate::feature::Missing;
use crate::page::Page;

use api::{CodeforcesApi, JsonFetch, ProfileSnapshot, RatingChange, UserInfo};

pub const NO_CONTESTS: &str = "No contests yet";
pub const UNRATED: &str = "Unrated";
const DEFAULT_CONTEST_NAME: &str = "Contest";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsState {
    NotConfigured,
    Loading,
    Rendered,
    Unavailable,
}

/// Stats container with a real handle, plus its two display fields.
///
/// Either field may be missing from the markup; writes to it are skipped.
pub struct StatsWidget<E> {
    pub handle: String,
    rating: Option<E>,
    latest: Option<E>,
}

impl<E: Clone> StatsWidget<E> {
    /// Find the container and read its handle. A missing container, empty
    /// handle, or the template placeholder all mean "not configured".
    pub fn locate<P: Page<Element = E>>(page: &P, config: &StatsConfig) -> Result<Self, Missing> {
        let container = page
            .query(&config.container_selector)
            .ok_or_else(|| Missing::new(config.container_selector.clone()))?;
        let handle = page
            .attribute(&container, &config.handle_attribute)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty() && *h != config.handle_placeholder)
            .ok_or_else(|| {
                Missing::new(format!(
                    "{}[{}]",
                    config.container_selector, config.handle_attribute
                ))
            })?;
        Ok(Self {
            handle,
            rating: page.element_by_id(&config.rating_id),
            latest: page.element_by_id(&config.latest_id),
        })
    }

    fn show_rating<P: Page<Element = E>>(&self, page: &P, text: &str) {
        if let Some(el) = &self.rating {
            page.set_text(el, text);
        }
    }

    fn show_latest<P: Page<Element = E>>(&self, page: &P, text: &str) {
        if let Some(el) = &self.latest {
            page.set_text(el, text);
        }
    }
}

/// `"<rating> (<rank>)"`, or `"Unrated"` when the profile has no rating.
pub fn rating_text(user: &UserInfo) -> String {
    match user.rating {
        Some(rating) if user.rank.is_empty() => rating.to_string(),
        Some(rating) => format!("{} ({})", rating, user.rank),
        None => UNRATED.to_string(),
    }
}

/// `"<contest> (<date>)"` with a `" • Rank <n>"` suffix when placed.
pub fn contest_text<C: Clock>(entry: &RatingChange, clock: &C) -> String {
    let name = entry
        .contest_name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CONTEST_NAME);
    let when = entry
        .rating_update_time_seconds
        .map(|secs| clock.local_date(secs))
        .unwrap_or_default();
    match entry.new_rank {
        Some(rank) => format!("{name} ({when}) \u{2022} Rank {rank}"),
        None => format!("{name} ({when})"),
    }
}

pub struct ProfileStatsLoader<F, C> {
    api: CodeforcesApi<F>,
    clock: C,
    unavailable: String,
}

impl<F: JsonFetch, C: Clock> ProfileStatsLoader<F, C> {
    pub fn new(fetch: F, clock: C, config: &StatsConfig) -> Self {
        Self {
            api: CodeforcesApi::new(fetch, config.api_base.clone()),
            clock,
            unavailable: config.unavailable_text.clone(),
        }
    }

    /// Fetch and render. Returns the terminal state.
    pub async fn load<P: Page>(&self, page: &P, widget: &StatsWidget<P::Element>) -> StatsState {
        tracing::debug!(handle = %widget.handle, state = ?StatsState::Loading, "loading profile stats");

        match self.api.snapshot(&widget.handle).await {
            Ok(snapshot) => {
                self.render(page, widget, &snapshot);
                tracing::info!(handle = %widget.handle, "profile stats rendered");
                StatsState::Rendered
            }
            Err(e) => {
                tracing::warn!(handle = %widget.handle, error = %e, "profile stats unavailable");
                widget.show_rating(page, &self.unavailable);
                widget.show_latest(page, &self.unavailable);
                StatsState::Unavailable
            }
        }
    }

    fn render<P: Page>(&self, page: &P, widget: &StatsWidget<P::Element>, snapshot: &ProfileSnapshot) {
        // An empty user list leaves the markup default in place
        if let Some(user) = &snapshot.user {
            widget.show_rating(page, &rating_text(user));
        }
        match &snapshot.latest {
            Some(entry) => widget.show_latest(page, &contest_text(entry, &self.clock)),
            None => widget.show_latest(page, NO_CONTESTS),
        }
    }
}
