//! Footer year stamp.

use crate::clock::Clock;
use crate::config::YearConfig;
use crate::feature::Missing;
use crate::page::Page;

/// Write the current year into the placeholder element.
pub fn stamp_year<P: Page, C: Clock>(page: &P, clock: &C, config: &YearConfig) -> Result<i32, Missing> {
    let element = page
        .element_by_id(&config.element_id)
        .ok_or_else(|| Missing::new(format!("#{}", config.element_id)))?;
    let year = clock.current_year();
    page.set_text(&element, &year.to_string());
    Ok(year)
}
