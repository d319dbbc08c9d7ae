//! Page controller: constructed once per page load, owns every routine.

use crate::clock::Clock;
use crate::config::PageConfig;
use crate::feature::Feature;
use crate::nav::NavToggle;
use crate::page::Page;
use crate::scroll::AnchorScroller;
use crate::stats::api::JsonFetch;
use crate::stats::{ProfileStatsLoader, StatsState, StatsWidget};
use crate::storage::PreferenceStore;
use crate::theme::{Theme, ThemeManager};
use crate::year::stamp_year;

/// Which routines found their markup on this page.
#[derive(Clone, Debug, PartialEq)]
pub struct InitReport {
    pub theme: Theme,
    pub theme_toggle: Feature,
    pub navigation: Feature,
    pub anchors: Feature,
    pub year: Feature,
    pub stats: Feature,
}

/// Result of [`PageController::initialize`]: the report plus the bound
/// elements the event layer attaches listeners to.
pub struct Initialized<E> {
    pub report: InitReport,
    pub theme_toggle: Option<E>,
    pub nav: Option<NavToggle<E>>,
    pub scroller: AnchorScroller<E>,
    pub stats: Option<StatsWidget<E>>,
}

pub struct PageController<P, S, F, C> {
    page: P,
    config: PageConfig,
    theme: ThemeManager<S>,
    stats: ProfileStatsLoader<F, C>,
    clock: C,
}

impl<P, S, F, C> PageController<P, S, F, C>
where
    P: Page,
    S: PreferenceStore,
    F: JsonFetch,
    C: Clock + Clone,
{
    pub fn new(page: P, store: S, fetch: F, clock: C, config: PageConfig) -> Self {
        Self {
            theme: ThemeManager::new(store, &config.theme),
            stats: ProfileStatsLoader::new(fetch, clock.clone(), &config.stats),
            page,
            config,
            clock,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn theme(&self) -> &ThemeManager<S> {
        &self.theme
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme.toggle(&self.page)
    }

    /// Run every synchronous setup routine, in page order.
    pub fn initialize(&self) -> Initialized<P::Element> {
        let page = &self.page;

        let theme = self.theme.initialize(page);
        let theme_toggle = self.theme.bind_toggle(page);
        let nav = NavToggle::bind(page, &self.config.nav);
        let scroller = AnchorScroller::bind(page, &self.config.anchors);
        let year = stamp_year(page, &self.clock, &self.config.year);
        let stats = StatsWidget::locate(page, &self.config.stats);

        let report = InitReport {
            theme,
            theme_toggle: Feature::from_binding(&theme_toggle),
            navigation: Feature::from_binding(&nav),
            anchors: Feature::Active,
            year: Feature::from_binding(&year),
            stats: Feature::from_binding(&stats),
        };
        for (name, feature) in [
            ("theme toggle", &report.theme_toggle),
            ("navigation", &report.navigation),
            ("year", &report.year),
            ("stats", &report.stats),
        ] {
            if let Feature::Inactive { missing } = feature {
                tracing::debug!(feature = name, %missing, "feature inactive on this page");
            }
        }

        Initialized {
            report,
            theme_toggle: theme_toggle.ok(),
            nav: nav.ok(),
            scroller,
            stats: stats.ok(),
        }
    }

    /// Fetch and render the stats widget, or do nothing when not configured.
    pub async fn load_stats(&self, widget: Option<&StatsWidget<P::Element>>) -> StatsState {
        match widget {
            Some(widget) => self.stats.load(&self.page, widget).await,
            None => StatsState::NotConfigured,
        }
    }
}
