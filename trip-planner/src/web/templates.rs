//! Askama templates for the web frontend.

use askama::Template;

use super::limits::FormLimits;
use crate::catalogue::Catalogue;
use crate::domain::{Coordinate, HotelTier};
use crate::planner::{ItineraryEntry, TripResult};

/// Currency shown next to every amount.
pub const CURRENCY: &str = "BGN";

/// Format an amount for display, e.g. "1170.00 BGN".
pub fn format_money(amount: f64) -> String {
    format!("{amount:.2} {CURRENCY}")
}

/// Trip length for display, e.g. "1 day" or "7 days".
pub fn format_days(days: u32) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the planning form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub routes: Vec<RouteFormView>,
    pub transports: Vec<TransportView>,
    pub tiers: Vec<TierView>,
    pub min_days: u32,
    pub max_days: u32,
    pub default_days: u32,
    pub min_budget: f64,
    pub max_budget: f64,
    pub default_budget: f64,
}

impl IndexTemplate {
    /// Build the form from the catalogue.
    pub fn new(catalogue: &Catalogue, limits: &FormLimits) -> Self {
        let routes = catalogue
            .routes()
            .iter()
            .enumerate()
            .map(|(index, route)| RouteFormView {
                index,
                name: route.name().to_string(),
                legs: route
                    .legs()
                    .enumerate()
                    .map(|(i, (from, to))| LegFormView {
                        index: i,
                        from: from.to_string(),
                        to: to.to_string(),
                    })
                    .collect(),
                cities: route
                    .cities()
                    .iter()
                    .filter_map(|name| catalogue.city(name))
                    .map(|city| CityFormView {
                        name: city.name.clone(),
                        hotels: city
                            .hotels
                            .iter()
                            .map(|h| HotelChoiceView {
                                name: h.name.clone(),
                                price: format_money(h.nightly_price),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        let transports = catalogue
            .transports()
            .iter()
            .map(|t| TransportView {
                id: t.id.to_string(),
                label: format!("{} {}", t.icon, t.name),
            })
            .collect();

        let tiers = HotelTier::ALL
            .iter()
            .map(|&tier| TierView {
                value: tier.as_str(),
                label: format!("{} {}", tier.stars(), tier.as_str()),
                selected: tier == HotelTier::default(),
            })
            .collect();

        Self {
            routes,
            transports,
            tiers,
            min_days: limits.min_days,
            max_days: limits.max_days,
            default_days: 7u32.clamp(limits.min_days, limits.max_days.max(limits.min_days)),
            min_budget: limits.min_budget,
            max_budget: limits.max_budget,
            default_budget: 2500f64.clamp(limits.min_budget, limits.max_budget.max(limits.min_budget)),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Trip plan fragment.
#[derive(Template)]
#[template(path = "plan_results.html")]
pub struct PlanResultsTemplate {
    pub plan: TripView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A route and the choices it offers on the form.
#[derive(Debug, Clone)]
pub struct RouteFormView {
    pub index: usize,
    pub name: String,
    pub legs: Vec<LegFormView>,
    pub cities: Vec<CityFormView>,
}

/// A leg that needs a transport choice.
#[derive(Debug, Clone)]
pub struct LegFormView {
    pub index: usize,
    pub from: String,
    pub to: String,
}

/// A city that needs a hotel choice.
#[derive(Debug, Clone)]
pub struct CityFormView {
    pub name: String,
    pub hotels: Vec<HotelChoiceView>,
}

#[derive(Debug, Clone)]
pub struct HotelChoiceView {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone)]
pub struct TransportView {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct TierView {
    pub value: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Trip plan view model for templates.
#[derive(Debug, Clone)]
pub struct TripView {
    pub route: String,
    pub days: u32,
    /// `days` with its unit, e.g. "1 day"
    pub duration: String,
    pub transport: String,
    pub food: String,
    pub hotel: String,
    pub total: String,
    pub budget: String,
    pub remaining: String,
    pub within_budget: bool,
    pub stops: Vec<StopView>,
    pub map: MapView,
}

impl TripView {
    /// Create from a planner result.
    pub fn from_result(result: &TripResult) -> Self {
        let points = &result.path.points;
        let projection = Projection::fit(points, MAP_WIDTH, MAP_HEIGHT, MAP_PADDING);

        let polyline = points
            .iter()
            .map(|&p| {
                let (x, y) = projection.project(p);
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let cities = result
            .itinerary
            .entries()
            .iter()
            .map(|e| MapLabelView::at(&projection, e.coordinate, &e.city))
            .collect();

        let icons = result
            .path
            .markers
            .iter()
            .map(|m| MapLabelView::at(&projection, m.position, &m.icon))
            .collect();

        Self {
            route: result.route.clone(),
            days: result.days,
            duration: format_days(result.days),
            transport: format_money(result.costs.transport),
            food: format_money(result.costs.food),
            hotel: format_money(result.costs.hotel),
            total: format_money(result.total_cost()),
            budget: format_money(result.budget),
            remaining: format_money(result.remaining_budget().abs()),
            within_budget: result.within_budget(),
            stops: result
                .itinerary
                .entries()
                .iter()
                .map(StopView::from_entry)
                .collect(),
            map: MapView {
                width: MAP_WIDTH,
                height: MAP_HEIGHT,
                polyline,
                cities,
                icons,
            },
        }
    }
}

/// One city in the trip details listing.
#[derive(Debug, Clone)]
pub struct StopView {
    pub city: String,
    pub sight: String,
    pub hotel_name: String,
    pub hotel_price: String,
    pub stars: Option<&'static str>,
    pub booking_link: Option<String>,
    pub food: String,
    pub food_price: String,
    pub stay_cost: String,
    pub arrival: Option<ArrivalView>,
}

impl StopView {
    fn from_entry(entry: &ItineraryEntry) -> Self {
        Self {
            city: entry.city.clone(),
            sight: entry.sight.clone(),
            hotel_name: entry.hotel.name.clone(),
            hotel_price: format_money(entry.hotel.nightly_price),
            stars: entry.hotel.tier.map(HotelTier::stars),
            booking_link: entry.hotel.booking_link.clone(),
            food: entry.food.description.clone(),
            food_price: format_money(entry.food.price_per_day),
            stay_cost: format_money(entry.stay_cost),
            arrival: entry.arrival.as_ref().map(|leg| ArrivalView {
                icon: leg.icon.clone(),
                mode_name: leg.mode_name.clone(),
                from: leg.from.clone(),
                distance: format!("{:.0} km", leg.distance_km),
                cost: format_money(leg.cost),
            }),
        }
    }
}

/// The leg that reaches a city.
#[derive(Debug, Clone)]
pub struct ArrivalView {
    pub icon: String,
    pub mode_name: String,
    pub from: String,
    pub distance: String,
    pub cost: String,
}

// ============================================================================
// Map rendering
// ============================================================================

const MAP_WIDTH: f64 = 640.0;
const MAP_HEIGHT: f64 = 400.0;
const MAP_PADDING: f64 = 40.0;

/// Inline SVG map of a route.
#[derive(Debug, Clone)]
pub struct MapView {
    pub width: f64,
    pub height: f64,
    /// SVG `points` attribute for the route polyline
    pub polyline: String,
    pub cities: Vec<MapLabelView>,
    pub icons: Vec<MapLabelView>,
}

/// Text placed at a point on the map.
#[derive(Debug, Clone)]
pub struct MapLabelView {
    pub x: String,
    pub y: String,
    pub text: String,
}

impl MapLabelView {
    fn at(projection: &Projection, position: Coordinate, text: &str) -> Self {
        let (x, y) = projection.project(position);
        Self {
            x: format!("{x:.1}"),
            y: format!("{y:.1}"),
            text: text.to_string(),
        }
    }
}

/// Equirectangular projection of a set of points into a viewbox.
///
/// Longitudes are scaled by the cosine of the mean latitude so that
/// shapes are not stretched east-west. The points are centred and scaled
/// uniformly to fit inside the padded box; north is up.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    lon_scale: f64,
    min_x: f64,
    min_y: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    height: f64,
}

impl Projection {
    /// Fit `points` into a `width` × `height` box with `padding` on each side.
    pub fn fit(points: &[Coordinate], width: f64, height: f64, padding: f64) -> Self {
        let mean_lat = if points.is_empty() {
            0.0
        } else {
            points.iter().map(|p| p.lat).sum::<f64>() / points.len() as f64
        };
        let lon_scale = mean_lat.to_radians().cos();

        let xs = points.iter().map(|p| p.lon * lon_scale);
        let ys = points.iter().map(|p| p.lat);
        let (min_x, max_x) = bounds(xs);
        let (min_y, max_y) = bounds(ys);

        let inner_w = (width - 2.0 * padding).max(0.0);
        let inner_h = (height - 2.0 * padding).max(0.0);
        let span_x = nonzero_span(max_x - min_x);
        let span_y = nonzero_span(max_y - min_y);
        let scale = (inner_w / span_x).min(inner_h / span_y);

        Self {
            lon_scale,
            min_x,
            min_y,
            scale,
            offset_x: padding + (inner_w - (max_x - min_x) * scale) / 2.0,
            offset_y: padding + (inner_h - (max_y - min_y) * scale) / 2.0,
            height,
        }
    }

    /// Position of `point` in viewbox coordinates.
    pub fn project(&self, point: Coordinate) -> (f64, f64) {
        let x = self.offset_x + (point.lon * self.lon_scale - self.min_x) * self.scale;
        let y = self.offset_y + (point.lat - self.min_y) * self.scale;
        (x, self.height - y)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min.is_finite() { (min, max) } else { (0.0, 0.0) }
}

fn nonzero_span(span: f64) -> f64 {
    if span > 1e-9 { span } else { 1.0 }
}
