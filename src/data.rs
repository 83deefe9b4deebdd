//! Mock Operational Data
//!
//! Static KPI, farm, and crop records shown on the dashboard. There is no
//! data fetching; these stand in for a real operations backend.

/// Direction a KPI is moving relative to the previous period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// Arrow glyph for the trend indicator.
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Stable => "→",
        }
    }

    /// Text color class for the trend indicator.
    pub fn color_class(self) -> &'static str {
        match self {
            Trend::Up => "text-green-400",
            Trend::Down => "text-red-400",
            Trend::Stable => "text-gray-400",
        }
    }
}

/// A key performance indicator card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: Trend,
}

/// A farm under management.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Farm {
    pub name: &'static str,
    pub location: &'static str,
}

/// A crop currently in the ground.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crop {
    pub name: &'static str,
    pub status: &'static str,
    pub health: &'static str,
}

pub const KPIS: [Kpi; 4] = [
    Kpi {
        title: "Overall Farm Health",
        value: "98%",
        trend: Trend::Up,
    },
    Kpi {
        title: "Soil Moisture",
        value: "65%",
        trend: Trend::Stable,
    },
    Kpi {
        title: "Harvest Forecast",
        value: "1.2M tons",
        trend: Trend::Up,
    },
    Kpi {
        title: "Active Sprayers",
        value: "12",
        trend: Trend::Down,
    },
];

pub const FARMS: [Farm; 4] = [
    Farm {
        name: "Green Valley Fields",
        location: "Central Valley, CA",
    },
    Farm {
        name: "Sunrise Acres",
        location: "Plains, GA",
    },
    Farm {
        name: "Northern Ridge",
        location: "Willamette Valley, OR",
    },
    Farm {
        name: "Evergreen Pastures",
        location: "Lancaster, PA",
    },
];

pub const CROPS: [Crop; 4] = [
    Crop {
        name: "Corn (Maize)",
        status: "Growing",
        health: "99%",
    },
    Crop {
        name: "Soybeans",
        status: "Flowering",
        health: "97%",
    },
    Crop {
        name: "Wheat",
        status: "Harvest Ready",
        health: "95%",
    },
    Crop {
        name: "Canola",
        status: "Vegetative",
        health: "98%",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_renders_four_of_each_record() {
        assert_eq!(KPIS.len(), 4);
        assert_eq!(FARMS.len(), 4);
        assert_eq!(CROPS.len(), 4);
    }

    #[test]
    fn trends_render_distinct_arrows() {
        assert_eq!(Trend::Up.arrow(), "↑");
        assert_eq!(Trend::Down.arrow(), "↓");
        assert_eq!(Trend::Stable.arrow(), "→");
    }
}
