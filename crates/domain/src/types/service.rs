//! Service selection types
//!
//! A `ServiceSelection` is one configured, bookable unit of work (e.g.
//! "4 hours of massage with 4 professionals on 2026-03-05"). The computed
//! fields on it are derived by the pricing engine and overwritten whenever
//! totals are recalculated; everything else is caller input.

use serde::{Deserialize, Serialize};

use crate::constants::MINDFULNESS_DEFAULT_PRICE;

/// Category of bookable service. Drives the cost-calculation branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    Massage,
    HairMakeup,
    Headshot,
    Nails,
    /// Fixed-price group sessions; never billed hourly.
    Mindfulness,
}

impl ServiceType {
    /// Whether this category uses the fixed-price mindfulness branch.
    pub const fn is_mindfulness(self) -> bool {
        matches!(self, Self::Mindfulness)
    }
}

/// Mindfulness class variant. Must stay consistent with `classLength` and
/// `fixedPrice` (30/drop-in/1250, 45/intro/1375, 60/mindful-movement/1500);
/// the recalculator reconciles any drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MindfulnessType {
    DropIn,
    Intro,
    MindfulMovement,
}

/// Cadence of a manually declared recurring commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyKind {
    Quarterly,
    Monthly,
    Custom,
}

/// Manual recurrence declaration on a service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringFrequency {
    /// Cadence of the commitment.
    #[serde(rename = "type")]
    pub kind: FrequencyKind,
    /// Committed number of events; drives the discount tier.
    pub occurrences: u32,
}

/// Appointment count for a service: a concrete number, or the literal
/// `"unlimited"` for mindfulness sessions (participants drop in freely).
///
/// Serializes as a JSON number or the string `"unlimited"`, matching the
/// stored proposal schema. Counts are clamped non-negative on ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AppointmentCountRepr", into = "AppointmentCountRepr")]
pub enum AppointmentCount {
    /// Concrete appointment count.
    Limited(i64),
    /// Mindfulness sentinel; contributes 0 to numeric sums.
    Unlimited,
}

impl AppointmentCount {
    /// Numeric value for summing; `Unlimited` contributes 0.
    pub const fn numeric(self) -> i64 {
        match self {
            Self::Limited(n) => n,
            Self::Unlimited => 0,
        }
    }

    /// Whether this is the mindfulness sentinel.
    pub const fn is_unlimited(self) -> bool {
        matches!(self, Self::Unlimited)
    }
}

impl Default for AppointmentCount {
    fn default() -> Self {
        Self::Limited(0)
    }
}

/// Wire representation: number or string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AppointmentCountRepr {
    Number(f64),
    Text(String),
}

impl From<AppointmentCountRepr> for AppointmentCount {
    fn from(repr: AppointmentCountRepr) -> Self {
        match repr {
            // Legacy blobs occasionally hold floats; floor and clamp.
            #[allow(clippy::cast_possible_truncation)]
            AppointmentCountRepr::Number(n) => Self::Limited((n.floor() as i64).max(0)),
            AppointmentCountRepr::Text(_) => Self::Unlimited,
        }
    }
}

impl From<AppointmentCount> for AppointmentCountRepr {
    fn from(count: AppointmentCount) -> Self {
        match count {
            #[allow(clippy::cast_precision_loss)]
            AppointmentCount::Limited(n) => Self::Number(n as f64),
            AppointmentCount::Unlimited => Self::Text(String::from("unlimited")),
        }
    }
}

/// Computed pricing result for one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTotals {
    pub total_appointments: AppointmentCount,
    /// Client-facing price after all discounts.
    pub service_cost: f64,
    /// Cost-side payout to staff.
    pub pro_revenue: f64,
    /// Client-facing price before any discount.
    pub original_price: f64,
    /// Recurring discount percentage applied (0 when none).
    pub recurring_discount: f64,
    /// Dollar amount saved by the recurring discount.
    pub recurring_savings: f64,
}

impl Default for ServiceTotals {
    fn default() -> Self {
        Self {
            total_appointments: AppointmentCount::Limited(0),
            service_cost: 0.0,
            pro_revenue: 0.0,
            original_price: 0.0,
            recurring_discount: 0.0,
            recurring_savings: 0.0,
        }
    }
}

/// Outcome of pricing one service.
///
/// `Pending` marks a service whose required numeric fields are not filled in
/// yet. It is a valid, representable state (the builder UI prices services
/// as the user types), not a failure; it lowers to all-zero totals.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceQuote {
    /// Required fields missing; totals are all zero.
    Pending,
    /// Fully priced.
    Priced(ServiceTotals),
}

impl ServiceQuote {
    /// Lower to a totals record; `Pending` yields the all-zero record.
    pub fn into_totals(self) -> ServiceTotals {
        match self {
            Self::Pending => ServiceTotals::default(),
            Self::Priced(totals) => totals,
        }
    }

    /// Whether the service was too incomplete to price.
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A named alternative quantity tier for a service.
///
/// Options carry their own copies of the scalable inputs; fields left `None`
/// fall back to the owning service's values when the option is repriced.
/// Exactly one option in a set should be selected at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pros: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
    pub total_appointments: AppointmentCount,
    pub total_cost: f64,
    pub pro_revenue: f64,
    pub is_selected: bool,
}

/// One bookable unit of work within a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceSelection {
    pub service_type: ServiceType,

    // --- caller inputs ---
    /// Event duration in hours. Required for non-mindfulness types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_hours: Option<f64>,
    /// Staff assigned. Required for non-mindfulness types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_pros: Option<u32>,
    /// Minutes per individual appointment. Required for non-mindfulness types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_time: Option<f64>,
    /// Client-facing rate per staff-hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
    /// Payout to staff per hour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pro_hourly: Option<f64>,
    /// Flat per-staff add-on cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_arrival: Option<f64>,
    /// Per-appointment retouching add-on (headshot only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retouching_cost: Option<f64>,
    /// Flat session price (mindfulness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_price: Option<f64>,
    /// Class length in minutes (mindfulness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mindfulness_type: Option<MindfulnessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<u32>,
    /// Flat percentage discount (applied before any recurring discount).
    pub discount_percent: f64,
    pub is_recurring: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
    /// `YYYY-MM-DD`, the `TBD` sentinel, or any raw string awaiting
    /// normalization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    // --- derived by the engine ---
    pub total_appointments: AppointmentCount,
    pub service_cost: f64,
    pub pro_revenue: f64,
    pub original_price: f64,
    pub recurring_discount: f64,
    pub recurring_savings: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_options: Option<Vec<PricingOption>>,
}

impl ServiceSelection {
    /// Effective fixed price for a mindfulness service.
    pub fn effective_fixed_price(&self) -> f64 {
        self.fixed_price.unwrap_or(MINDFULNESS_DEFAULT_PRICE)
    }

    /// Whether this service carries a usable manual recurrence declaration.
    pub const fn has_manual_recurrence(&self) -> bool {
        self.is_recurring && self.recurring_frequency.is_some()
    }

    /// Overwrite the derived fields from a totals record.
    pub fn apply_totals(&mut self, totals: &ServiceTotals) {
        self.total_appointments = totals.total_appointments;
        self.service_cost = totals.service_cost;
        self.pro_revenue = totals.pro_revenue;
        self.original_price = totals.original_price;
        self.recurring_discount = totals.recurring_discount;
        self.recurring_savings = totals.recurring_savings;
    }
}
