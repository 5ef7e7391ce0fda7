//! Defines the properties for the `ReportBoardComponent`.

use common::config::Settings;
use yew::prelude::*;

/// Properties for the `ReportBoardComponent`.
///
/// The whole page variant is described by `settings`: endpoints and display
/// timezone in `settings.client`, enabled forms and initial content in
/// `settings.page`. Parents usually pass what `helpers::load_settings` found
/// in the host page; the default describes the plain reporting page.
#[derive(Properties, PartialEq, Clone)]
pub struct ReportBoardProps {
    #[prop_or_default]
    pub settings: Settings,
}
