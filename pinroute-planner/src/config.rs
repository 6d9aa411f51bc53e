//! Presentation constants and behaviour switches for the planner.

use pinroute_core::{Alert, AlertKind, StyleFn, TravelMode, overlay_style};

/// Text shown when asking the user for an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct AddressPrompt {
    pub title: String,
    pub placeholder: String,
}

impl Default for AddressPrompt {
    fn default() -> Self {
        Self {
            title: "Add".to_owned(),
            placeholder: "Enter an address".to_owned(),
        }
    }
}

/// Fixed alert texts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct AlertTexts {
    /// Title shared by every error alert.
    pub title: String,
    /// Shown when the geocoding service fails.
    pub geocode_failed: String,
    /// Shown when the geocoder finds nothing for an address.
    pub address_not_found: String,
    /// Shown when the route service returns no route for a pair.
    pub route_unavailable: String,
}

impl Default for AlertTexts {
    fn default() -> Self {
        Self {
            title: "Error".to_owned(),
            geocode_failed: "Service unavailable. Please try again".to_owned(),
            address_not_found: "No location found for this address".to_owned(),
            route_unavailable: "Route unavailable".to_owned(),
        }
    }
}

impl AlertTexts {
    pub(crate) fn alert(&self, kind: AlertKind) -> Alert {
        let message = match kind {
            AlertKind::GeocodeFailed => &self.geocode_failed,
            AlertKind::AddressNotFound => &self.address_not_found,
            AlertKind::RouteUnavailable => &self.route_unavailable,
        };
        Alert::new(kind, self.title.clone(), message.clone())
    }
}

/// Planner configuration.
///
/// # Examples
/// ```
/// use pinroute_core::TravelMode;
/// use pinroute_planner::PlannerConfig;
///
/// let config = PlannerConfig::default().with_empty_geocode_alert(false);
/// assert_eq!(config.travel_mode, TravelMode::Walking);
/// assert!(!config.alert_on_empty_geocode);
/// ```
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub prompt: AddressPrompt,
    pub alerts: AlertTexts,
    /// Travel mode sent with every directions request.
    pub travel_mode: TravelMode,
    /// Alert when the geocoder answers without a location. When off, such
    /// answers are dropped silently.
    pub alert_on_empty_geocode: bool,
    /// Styles each overlay as it is drawn.
    pub style: StyleFn,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            prompt: AddressPrompt::default(),
            alerts: AlertTexts::default(),
            travel_mode: TravelMode::Walking,
            alert_on_empty_geocode: true,
            style: overlay_style,
        }
    }
}

impl PlannerConfig {
    #[must_use]
    pub fn with_travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    #[must_use]
    pub fn with_empty_geocode_alert(mut self, enabled: bool) -> Self {
        self.alert_on_empty_geocode = enabled;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleFn) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_alerts(mut self, alerts: AlertTexts) -> Self {
        self.alerts = alerts;
        self
    }
}
